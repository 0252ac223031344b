use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ScheduleResult;
use crate::extensions::EditorEvent;
use crate::render::{RenderFrame, Renderer};

use super::ScheduleEditor;

/// Ordered repaint classes.
///
/// `Light` covers boundary moves inside an active drag, which a presentation
/// layer may patch in place. `Full` rebuilds the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Light,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

impl<R: Renderer> ScheduleEditor<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.core.runtime.pending_invalidation
    }

    /// `true` while a redraw is owed to the presentation layer.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.core.runtime.pending_invalidation != InvalidationLevel::None
    }

    pub fn invalidate(&mut self, level: InvalidationLevel) {
        let runtime = &mut self.core.runtime;
        runtime.pending_invalidation = runtime.pending_invalidation.max(level);
    }

    pub(super) fn invalidate_light(&mut self) {
        self.invalidate(InvalidationLevel::Light);
    }

    pub(super) fn invalidate_full(&mut self) {
        self.invalidate(InvalidationLevel::Full);
    }

    /// Performs the single pending render, if any, and clears the dirty state.
    ///
    /// A full repaint owed during an active gesture is held back until the
    /// gesture ends so the node under the pointer survives. Returns `true`
    /// when the renderer was called.
    pub fn flush(&mut self) -> ScheduleResult<bool> {
        let level = self.core.runtime.pending_invalidation;
        if level == InvalidationLevel::None {
            return Ok(false);
        }
        let gesture_active = self.core.runtime.interaction.is_gesture_active();
        if gesture_active && level == InvalidationLevel::Full {
            trace!("deferring full repaint until gesture end");
            return Ok(false);
        }

        let frame = self.build_render_frame(level == InvalidationLevel::Light);
        self.renderer.render(&frame)?;
        self.core.runtime.pending_invalidation = InvalidationLevel::None;
        trace!(?level, segments = frame.segments.len(), "flushed editor frame");
        self.emit_plugin_event(EditorEvent::Rendered);
        Ok(true)
    }

    /// Renders unconditionally and clears any pending invalidation.
    pub fn render(&mut self) -> ScheduleResult<()> {
        let frame = self.build_render_frame(false);
        self.renderer.render(&frame)?;
        self.core.runtime.pending_invalidation = InvalidationLevel::None;
        self.emit_plugin_event(EditorEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn build_render_frame(&self, partial: bool) -> RenderFrame {
        RenderFrame::from_blocks(
            self.core.behavior.geometry,
            self.core.model.schedule.blocks(),
            self.core.model.selected,
        )
        .with_interaction_mode(self.core.runtime.interaction.mode())
        .with_notice(
            self.core
                .runtime
                .notices
                .current()
                .map(|notice| notice.message.clone()),
        )
        .with_partial(partial)
    }
}
