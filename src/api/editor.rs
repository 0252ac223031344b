use std::time::Duration;

use tracing::debug;

use crate::core::{Block, Schedule, ScheduleVariant};
use crate::error::{ScheduleError, ScheduleResult};
use crate::extensions::EditorEvent;
use crate::interaction::{GestureState, InteractionMode, TimelineGeometry};
use crate::render::Renderer;

use super::editor_model::EditorModel;
use super::editor_runtime::{EditorBehaviorState, EditorCore, EditorRuntimeState};
use super::notice::{Notice, NoticeKind};
use super::validation::validate_editor_config;
use super::{ModeSelector, ScheduleEditorConfig};

/// Main orchestration facade consumed by host applications.
///
/// `ScheduleEditor` owns the schedule being edited, the gesture state
/// machine, pending notices and invalidation, and hands finished frames to a
/// replaceable `Renderer`.
pub struct ScheduleEditor<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EditorCore,
}

impl<R: Renderer> ScheduleEditor<R> {
    /// Creates an editor on the built-in `normal/weekday` schedule.
    pub fn new(renderer: R, config: ScheduleEditorConfig) -> ScheduleResult<Self> {
        let geometry = validate_editor_config(&config)?;
        let model = EditorModel::new(&config.fallback_modes);
        debug!(variant = %model.variant, "schedule editor created");
        Ok(Self {
            renderer,
            core: EditorCore {
                model,
                behavior: EditorBehaviorState { config, geometry },
                runtime: EditorRuntimeState::with_full_invalidation(),
            },
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScheduleEditorConfig {
        &self.core.behavior.config
    }

    pub fn set_config(&mut self, config: ScheduleEditorConfig) -> ScheduleResult<()> {
        let geometry = validate_editor_config(&config)?;
        self.core.behavior = EditorBehaviorState { config, geometry };
        self.invalidate_full();
        Ok(())
    }

    #[must_use]
    pub fn geometry(&self) -> TimelineGeometry {
        self.core.behavior.geometry
    }

    /// Updates the timeline width after a host layout change.
    pub fn set_timeline_width(&mut self, width_px: f64) -> ScheduleResult<()> {
        let geometry = TimelineGeometry::new(width_px)?;
        self.core.behavior.config.timeline_width_px = width_px;
        self.core.behavior.geometry = geometry;
        self.invalidate_full();
        Ok(())
    }

    #[must_use]
    pub fn variant(&self) -> &ScheduleVariant {
        &self.core.model.variant
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.core.model.schedule
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.core.model.schedule.blocks()
    }

    #[must_use]
    pub fn selected_block(&self) -> Option<usize> {
        self.core.model.selected
    }

    /// `true` while there are local edits not yet accepted by the gateway.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.core.model.editing
    }

    #[must_use]
    pub fn mode_selector(&self) -> &ModeSelector {
        &self.core.model.selector
    }

    #[must_use]
    pub fn pending_variant(&self) -> Option<&ScheduleVariant> {
        self.core.model.pending_variant.as_ref()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.core.runtime.interaction.mode()
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.core.runtime.interaction.gesture()
    }

    /// Host-driven refreshes must be skipped while this is `false`.
    #[must_use]
    pub fn accepts_host_refresh(&self) -> bool {
        self.core.runtime.interaction.accepts_host_refresh()
    }

    /// Records whether a host affordance (dropdown, dialog) is open.
    pub fn set_affordance_open(&mut self, open: bool) {
        self.core.runtime.interaction.set_affordance_open(open);
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.core.runtime.notices.current()
    }

    pub fn dismiss_notice(&mut self) {
        if self.core.runtime.notices.dismiss() {
            self.invalidate_full();
        }
    }

    /// Advances transient notice lifetimes by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.core.runtime.notices.tick(elapsed) {
            self.invalidate_full();
        }
    }

    /// Drops local edits and returns to the last loaded or saved schedule.
    pub fn discard_changes(&mut self) {
        self.finish_gesture_silently();
        let model = &mut self.core.model;
        model.schedule = model.baseline.clone();
        model.editing = false;
        model.clamp_selection();
        debug!(variant = %model.variant, "discarded local schedule edits");
        self.invalidate_full();
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn mark_edited(&mut self) {
        self.core.model.editing = true;
    }

    pub(super) fn raise_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let ttl_ms = self.core.behavior.config.notice_ttl_ms;
        self.core
            .runtime
            .notices
            .raise(Notice::transient(kind, message, ttl_ms));
        self.invalidate_full();
    }

    pub(super) fn raise_persistent_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.core
            .runtime
            .notices
            .raise(Notice::persistent(kind, message));
        self.invalidate_full();
    }

    /// Surfaces a recoverable error to the user and passes it back to the caller.
    pub(super) fn report<T>(&mut self, err: ScheduleError) -> ScheduleResult<T> {
        debug!(error = %err, "editor operation rejected");
        if err.is_transient() {
            self.raise_notice(NoticeKind::Warning, err.to_string());
        } else {
            self.raise_persistent_notice(NoticeKind::Error, err.to_string());
        }
        Err(err)
    }

    pub(super) fn finish_gesture_silently(&mut self) {
        self.core.runtime.interaction.on_gesture_end();
        self.core.runtime.gesture_origin = None;
    }

    pub(super) fn emit_selection_changed(&mut self) {
        let index = self.core.model.selected;
        self.emit_plugin_event(EditorEvent::SelectionChanged { index });
    }
}
