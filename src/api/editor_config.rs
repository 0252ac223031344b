use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_FROST_PROTECTION_C, DEFAULT_SPLIT_TEMPERATURE_C, FALLBACK_MODES};
use crate::error::{ScheduleError, ScheduleResult};
use crate::interaction::AbandonPolicy;

/// Public editor bootstrap configuration.
///
/// This type is serializable so host applications can persist/load editor
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEditorConfig {
    #[serde(default = "default_timeline_width_px")]
    pub timeline_width_px: f64,
    #[serde(default = "default_split_temperature_c")]
    pub default_split_temperature_c: f64,
    #[serde(default = "default_frost_protection_c")]
    pub frost_protection_c: f64,
    #[serde(default)]
    pub abandon_policy: AbandonPolicy,
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
    #[serde(default = "default_fallback_modes")]
    pub fallback_modes: Vec<String>,
}

impl Default for ScheduleEditorConfig {
    fn default() -> Self {
        Self::new(default_timeline_width_px())
    }
}

impl ScheduleEditorConfig {
    /// Creates a config for a timeline of the given pixel width.
    #[must_use]
    pub fn new(timeline_width_px: f64) -> Self {
        Self {
            timeline_width_px,
            default_split_temperature_c: default_split_temperature_c(),
            frost_protection_c: default_frost_protection_c(),
            abandon_policy: AbandonPolicy::default(),
            notice_ttl_ms: default_notice_ttl_ms(),
            fallback_modes: default_fallback_modes(),
        }
    }

    /// Sets the temperature given to the second half of a split.
    #[must_use]
    pub fn with_default_split_temperature(mut self, celsius: f64) -> Self {
        self.default_split_temperature_c = celsius;
        self
    }

    #[must_use]
    pub fn with_frost_protection(mut self, celsius: f64) -> Self {
        self.frost_protection_c = celsius;
        self
    }

    /// Chooses whether abandoned drags keep or roll back intermediate writes.
    #[must_use]
    pub fn with_abandon_policy(mut self, policy: AbandonPolicy) -> Self {
        self.abandon_policy = policy;
        self
    }

    #[must_use]
    pub fn with_notice_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.notice_ttl_ms = ttl_ms;
        self
    }

    #[must_use]
    pub fn with_fallback_modes<S: Into<String>>(mut self, modes: impl IntoIterator<Item = S>) -> Self {
        self.fallback_modes = modes.into_iter().map(Into::into).collect();
        self
    }

    pub fn to_json_pretty(&self) -> ScheduleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScheduleError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ScheduleResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScheduleError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_timeline_width_px() -> f64 {
    1440.0
}

fn default_split_temperature_c() -> f64 {
    DEFAULT_SPLIT_TEMPERATURE_C
}

fn default_frost_protection_c() -> f64 {
    DEFAULT_FROST_PROTECTION_C
}

fn default_notice_ttl_ms() -> u64 {
    3_000
}

fn default_fallback_modes() -> Vec<String> {
    FALLBACK_MODES.iter().map(|mode| (*mode).to_owned()).collect()
}
