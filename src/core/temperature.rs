use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

pub const MIN_TEMPERATURE_C: f64 = 5.0;
pub const MAX_TEMPERATURE_C: f64 = 30.0;
/// Temperature given to the second half of a split block.
pub const DEFAULT_SPLIT_TEMPERATURE_C: f64 = 21.0;
pub const DEFAULT_FROST_PROTECTION_C: f64 = MIN_TEMPERATURE_C;

/// Reserved non-numeric set points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialTemperature {
    Frost,
    Off,
}

/// Target temperature of one block: Celsius or a sentinel.
///
/// Serialized untagged, so the wire form is either a number or
/// `"frost"`/`"off"`. Partition logic treats the value as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Temperature {
    Celsius(f64),
    Special(SpecialTemperature),
}

impl Temperature {
    pub const FROST: Self = Self::Special(SpecialTemperature::Frost);
    pub const OFF: Self = Self::Special(SpecialTemperature::Off);

    /// Builds a numeric temperature clamped into the supported range.
    pub fn clamped(value: f64) -> ScheduleResult<Self> {
        if !value.is_finite() {
            return Err(ScheduleError::InvalidData(
                "temperature must be finite".to_owned(),
            ));
        }
        Ok(Self::Celsius(
            value.clamp(MIN_TEMPERATURE_C, MAX_TEMPERATURE_C),
        ))
    }

    #[must_use]
    pub fn celsius(self) -> Option<f64> {
        match self {
            Self::Celsius(value) => Some(value),
            Self::Special(_) => None,
        }
    }

    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(self, Self::Special(_))
    }

    /// Sentinels are in range by definition; numbers must lie in `[5, 30]`.
    #[must_use]
    pub fn is_in_range(self) -> bool {
        match self {
            Self::Celsius(value) => {
                value.is_finite() && (MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&value)
            }
            Self::Special(_) => true,
        }
    }

    /// Effective set point, with `frost`/`off` resolved to frost protection.
    #[must_use]
    pub fn resolve(self, frost_protection_c: f64) -> f64 {
        match self {
            Self::Celsius(value) => value,
            Self::Special(_) => frost_protection_c,
        }
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self::Celsius(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius(value) => write!(f, "{value:.1}°C"),
            Self::Special(SpecialTemperature::Frost) => f.write_str("FROST"),
            Self::Special(SpecialTemperature::Off) => f.write_str("OFF"),
        }
    }
}
