use crate::core::{Schedule, ScheduleVariant, default_schedule};

use super::ModeSelector;

/// Schedule data owned by one editor instance.
pub(super) struct EditorModel {
    pub(super) variant: ScheduleVariant,
    pub(super) schedule: Schedule,
    /// Last state known to match the gateway (loaded, defaulted or saved).
    pub(super) baseline: Schedule,
    pub(super) selected: Option<usize>,
    pub(super) editing: bool,
    pub(super) pending_variant: Option<ScheduleVariant>,
    pub(super) selector: ModeSelector,
}

impl EditorModel {
    pub(super) fn new(fallback_modes: &[String]) -> Self {
        let selector = ModeSelector::new(fallback_modes);
        let variant = selector.current().clone();
        let schedule = default_schedule(variant.day_type);
        Self {
            variant,
            baseline: schedule.clone(),
            schedule,
            selected: None,
            editing: false,
            pending_variant: None,
            selector,
        }
    }

    /// Installs a fresh schedule as both working copy and baseline.
    pub(super) fn replace(&mut self, variant: ScheduleVariant, schedule: Schedule) {
        self.variant = variant;
        self.baseline = schedule.clone();
        self.schedule = schedule;
        self.selected = None;
        self.editing = false;
    }

    pub(super) fn clamp_selection(&mut self) {
        let len = self.schedule.len();
        if let Some(selected) = self.selected {
            if selected >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}
