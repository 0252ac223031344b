use indexmap::IndexSet;
use tracing::debug;

use crate::core::{
    DayType, MODE_NORMAL, ScheduleVariant, day_types_for_mode, mode_requires_schedule,
    selectable_modes,
};
use crate::error::{ScheduleError, ScheduleResult};

/// Tracks the hub's mode list and which variant is picked for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSelector {
    modes: Vec<String>,
    from_fallback: bool,
    current: ScheduleVariant,
}

impl ModeSelector {
    #[must_use]
    pub fn new(fallback_modes: &[String]) -> Self {
        Self {
            modes: fallback_modes.to_vec(),
            from_fallback: true,
            current: ScheduleVariant::normal_weekday(),
        }
    }

    /// Replaces the mode list with one reported by the hub.
    ///
    /// `None` or an empty list restores `fallback_modes`.
    pub fn apply_listed_modes(&mut self, listed: Option<Vec<String>>, fallback_modes: &[String]) {
        match listed {
            Some(modes) if modes.iter().any(|mode| !mode.trim().is_empty()) => {
                let unique: IndexSet<String> = modes
                    .into_iter()
                    .map(|mode| mode.trim().to_owned())
                    .filter(|mode| !mode.is_empty())
                    .collect();
                self.modes = unique.into_iter().collect();
                self.from_fallback = false;
            }
            _ => {
                self.modes = fallback_modes.to_vec();
                self.from_fallback = true;
            }
        }
        debug!(
            modes = self.modes.len(),
            from_fallback = self.from_fallback,
            "mode list updated"
        );
    }

    #[must_use]
    pub fn modes(&self) -> &[String] {
        &self.modes
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.from_fallback
    }

    /// Named modes for the dynamic dropdown (excludes normal/manual/off).
    #[must_use]
    pub fn selectable_modes(&self) -> Vec<String> {
        selectable_modes(&self.modes)
    }

    #[must_use]
    pub fn current(&self) -> &ScheduleVariant {
        &self.current
    }

    /// Picks a mode and its first day type.
    pub fn select_mode(&mut self, mode: &str) -> ScheduleResult<ScheduleVariant> {
        let mode = mode.trim();
        if mode != MODE_NORMAL && !self.modes.iter().any(|known| known == mode) {
            return Err(ScheduleError::InvalidData(format!(
                "unknown mode `{mode}`"
            )));
        }
        if !mode_requires_schedule(mode) {
            return Err(ScheduleError::InvalidData(format!(
                "mode `{mode}` has no schedule to edit"
            )));
        }
        let variant = ScheduleVariant::default_for_mode(mode).ok_or_else(|| {
            ScheduleError::InvalidData(format!("mode `{mode}` has no schedule to edit"))
        })?;
        self.current = variant.clone();
        Ok(variant)
    }

    /// Switches day type within the current mode.
    pub fn select_day_type(&mut self, day_type: DayType) -> ScheduleResult<ScheduleVariant> {
        if !day_types_for_mode(&self.current.mode).contains(&day_type) {
            return Err(ScheduleError::InvalidData(format!(
                "mode `{}` has no `{day_type}` schedule",
                self.current.mode
            )));
        }
        self.current.day_type = day_type;
        Ok(self.current.clone())
    }
}
