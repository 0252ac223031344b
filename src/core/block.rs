use serde::{Deserialize, Serialize};

use super::temperature::Temperature;
use super::time_unit::{MinuteOfDay, to_clock};

/// One contiguous `[start, end)` interval with a single target temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub start: MinuteOfDay,
    pub end: MinuteOfDay,
    pub temperature: Temperature,
}

impl Block {
    #[must_use]
    pub fn new(start: MinuteOfDay, end: MinuteOfDay, temperature: impl Into<Temperature>) -> Self {
        Self {
            start,
            end,
            temperature: temperature.into(),
        }
    }

    /// Duration in minutes; zero for inverted ranges.
    #[must_use]
    pub fn duration(self) -> MinuteOfDay {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn contains(self, minute: MinuteOfDay) -> bool {
        self.start <= minute && minute < self.end
    }

    /// `HH:MM-HH:MM` label used in logs and notices.
    #[must_use]
    pub fn range_label(self) -> String {
        format!("{}-{}", to_clock(self.start), to_clock(self.end))
    }
}
