use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Block indexes attached to a validation failure (at most a neighbor pair).
pub type BlockIndexes = SmallVec<[usize; 2]>;

/// Kind of save-time invariant violation reported by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationViolation {
    Empty,
    StartNotMidnight,
    EndNotEndOfDay,
    Gap,
    Overlap,
    EmptyRange,
    TemperatureOutOfRange,
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid time `{input}`: expected HH:MM between 00:00 and 24:00")]
    Format { input: String },

    #[error("block {index} is too small to split ({duration} min, need at least 30)")]
    TooSmall { index: usize, duration: u16 },

    #[error("the last remaining block cannot be deleted")]
    LastBlock,

    #[error("invalid schedule at block(s) {indexes:?}: {reason}")]
    Validation {
        indexes: BlockIndexes,
        violation: ValidationViolation,
        reason: String,
    },

    #[error("schedule gateway failure: {0}")]
    Gateway(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ScheduleError {
    pub(crate) fn validation(
        indexes: &[usize],
        violation: ValidationViolation,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            indexes: BlockIndexes::from_slice(indexes),
            violation,
            reason: reason.into(),
        }
    }

    /// Errors surfaced as auto-dismissing notices that leave the model untouched.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Format { .. } | Self::TooSmall { .. } | Self::LastBlock | Self::InvalidData(_)
        )
    }
}
