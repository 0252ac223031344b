use tracing::{debug, trace, warn};

use crate::core::{BoundaryHandle, MinuteOfDay, is_contiguous_partition};
use crate::error::{ScheduleError, ScheduleResult};
use crate::extensions::EditorEvent;
use crate::interaction::{AbandonPolicy, GestureState, InteractionMode, ResizeDrag};
use crate::render::Renderer;

use super::ScheduleEditor;

impl<R: Renderer> ScheduleEditor<R> {
    /// Starts a resize drag on one block handle.
    ///
    /// The outer day edges have no handle and are rejected.
    pub fn press_handle(
        &mut self,
        index: usize,
        handle: BoundaryHandle,
        client_x: f64,
    ) -> ScheduleResult<()> {
        if !client_x.is_finite() {
            return Err(ScheduleError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        self.settle_gesture();
        let block = self.core.model.schedule.block(index)?;
        let last = self.core.model.schedule.len() - 1;
        let origin_minutes = match handle {
            BoundaryHandle::Left if index > 0 => block.start,
            BoundaryHandle::Right if index < last => block.end,
            _ => {
                return Err(ScheduleError::InvalidData(format!(
                    "block {index} has no draggable {handle:?} handle"
                )));
            }
        };

        self.core.runtime.gesture_origin = Some(self.core.model.schedule.clone());
        self.core.runtime.interaction.on_handle_press(ResizeDrag {
            index,
            handle,
            origin_minutes,
            origin_client_x: client_x,
        });
        debug!(index, ?handle, origin_minutes, "resize gesture started");
        self.emit_plugin_event(EditorEvent::GestureStarted {
            mode: InteractionMode::Resizing,
        });
        Ok(())
    }

    /// Applies the pointer position of an active resize drag.
    ///
    /// Returns the boundary minute after snapping and clamping, or `None`
    /// when no resize drag is active. Edits land in the model immediately
    /// and only raise a light invalidation.
    pub fn pointer_move(&mut self, client_x: f64) -> ScheduleResult<Option<MinuteOfDay>> {
        let Some(drag) = self.core.runtime.interaction.resize_drag() else {
            return Ok(None);
        };
        if !client_x.is_finite() {
            return Ok(None);
        }

        let requested = drag.requested_minutes(client_x, self.core.behavior.geometry);
        let block = self.core.model.schedule.block(drag.index)?;
        let current = match drag.handle {
            BoundaryHandle::Left => block.start,
            BoundaryHandle::Right => block.end,
        };
        let step = requested - i32::from(current);
        if step == 0 {
            return Ok(Some(current));
        }

        let minute = self
            .core
            .model
            .schedule
            .resize_boundary(drag.index, drag.handle, step)?;
        if minute != current {
            trace!(index = drag.index, requested, minute, "drag moved boundary");
            self.mark_edited();
            self.invalidate_light();
            self.emit_plugin_event(EditorEvent::BoundaryMoved {
                index: drag.index,
                handle: drag.handle,
                minute,
            });
        }
        Ok(Some(minute))
    }

    /// Starts a block-level drag used for reordering.
    pub fn start_block_drag(&mut self, index: usize) -> ScheduleResult<()> {
        self.settle_gesture();
        self.core.model.schedule.block(index)?;
        self.core.runtime.gesture_origin = None;
        self.core.runtime.interaction.on_block_drag_start(index);
        debug!(index, "reorder gesture started");
        self.emit_plugin_event(EditorEvent::GestureStarted {
            mode: InteractionMode::Reordering,
        });
        Ok(())
    }

    /// Drops the dragged block onto `target_index`, swapping the two positions.
    ///
    /// Without an active block drag this is a no-op.
    pub fn drop_block_on(&mut self, target_index: usize) -> ScheduleResult<()> {
        let Some(drag) = self.core.runtime.interaction.reorder_drag() else {
            return Ok(());
        };
        if let Err(err) = self.core.model.schedule.block(target_index) {
            self.abandon_gesture();
            return Err(err);
        }
        self.core.runtime.interaction.on_gesture_end();
        let source = drag.source_index;
        self.swap_blocks(source, target_index)?;
        self.invalidate_full();
        self.emit_plugin_event(EditorEvent::GestureCommitted);
        Ok(())
    }

    /// Commits the active gesture (pointer released on a valid target).
    pub fn end_gesture(&mut self) {
        let previous = self.core.runtime.interaction.on_gesture_end();
        self.core.runtime.gesture_origin = None;
        if matches!(previous, GestureState::Idle) {
            return;
        }
        if !is_contiguous_partition(self.core.model.schedule.blocks()) {
            warn!("schedule lost full-day coverage during gesture");
        }
        self.invalidate_full();
        debug!(mode = ?previous.mode(), "gesture committed");
        self.emit_plugin_event(EditorEvent::GestureCommitted);
    }

    /// Ends the active gesture without a valid drop target.
    ///
    /// With `AbandonPolicy::KeepPartial` intermediate resize writes stay in the
    /// model; with `AbandonPolicy::Rollback` the schedule returns to its state
    /// at gesture start.
    pub fn abandon_gesture(&mut self) {
        let previous = self.core.runtime.interaction.on_gesture_end();
        let origin = self.core.runtime.gesture_origin.take();
        if matches!(previous, GestureState::Idle) {
            return;
        }

        let rolled_back = match (self.core.behavior.config.abandon_policy, origin) {
            (AbandonPolicy::Rollback, Some(origin)) => {
                let changed = origin != self.core.model.schedule;
                self.core.model.schedule = origin;
                self.core.model.editing = self.core.model.schedule != self.core.model.baseline;
                changed
            }
            _ => false,
        };
        self.invalidate_full();
        debug!(mode = ?previous.mode(), rolled_back, "gesture abandoned");
        self.emit_plugin_event(EditorEvent::GestureAbandoned { rolled_back });
    }

    /// Commits any active gesture before a structural edit shifts block indexes.
    pub(super) fn settle_gesture(&mut self) {
        if self.core.runtime.interaction.is_gesture_active() {
            self.end_gesture();
        }
    }
}
