use serde::{Deserialize, Serialize};

use crate::core::{BoundaryHandle, END_OF_DAY, MinuteOfDay, snap_delta};
use crate::error::{ScheduleError, ScheduleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Resizing,
    Reordering,
}

/// What happens to edits already written during a gesture that is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AbandonPolicy {
    /// Intermediate writes stay applied (last valid snapped position wins).
    #[default]
    KeepPartial,
    /// The schedule is restored to its state at gesture start.
    Rollback,
}

/// Active handle drag captured at press time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeDrag {
    pub index: usize,
    pub handle: BoundaryHandle,
    pub origin_minutes: MinuteOfDay,
    pub origin_client_x: f64,
}

impl ResizeDrag {
    /// Boundary position the pointer asks for, before model clamping.
    #[must_use]
    pub fn requested_minutes(self, client_x: f64, geometry: TimelineGeometry) -> i32 {
        let delta = geometry.delta_minutes(client_x - self.origin_client_x);
        i32::from(self.origin_minutes) + snap_delta(delta)
    }
}

/// Active block-level drag used for reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderDrag {
    pub source_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Resizing(ResizeDrag),
    Reordering(ReorderDrag),
}

impl GestureState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Resizing(_) => InteractionMode::Resizing,
            Self::Reordering(_) => InteractionMode::Reordering,
        }
    }
}

/// Horizontal pixel geometry of the timeline strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineGeometry {
    width_px: f64,
}

impl TimelineGeometry {
    pub fn new(width_px: f64) -> ScheduleResult<Self> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(ScheduleError::InvalidData(
                "timeline width must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { width_px })
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.width_px
    }

    /// Converts a pointer displacement into whole minutes (not yet snapped).
    #[must_use]
    pub fn delta_minutes(self, delta_client_x: f64) -> i32 {
        if !delta_client_x.is_finite() {
            return 0;
        }
        let minutes = (delta_client_x / self.width_px * f64::from(END_OF_DAY)).round();
        minutes.clamp(-f64::from(END_OF_DAY), f64::from(END_OF_DAY)) as i32
    }

    #[must_use]
    pub fn minute_to_x(self, minute: MinuteOfDay) -> f64 {
        f64::from(minute.min(END_OF_DAY)) / f64::from(END_OF_DAY) * self.width_px
    }

    #[must_use]
    pub fn x_to_minute(self, x: f64) -> MinuteOfDay {
        let ratio = (x / self.width_px).clamp(0.0, 1.0);
        (ratio * f64::from(END_OF_DAY)).round() as MinuteOfDay
    }
}

impl Default for TimelineGeometry {
    fn default() -> Self {
        Self { width_px: 1440.0 }
    }
}

/// Pointer-gesture state plus host affordance tracking.
///
/// This type only records gesture transitions; schedule mutation happens in
/// the editor facade so the state machine stays free of model borrows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    gesture: GestureState,
    affordance_open: bool,
}

impl InteractionState {
    #[must_use]
    pub fn gesture(self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.gesture.mode()
    }

    #[must_use]
    pub fn is_gesture_active(self) -> bool {
        !matches!(self.gesture, GestureState::Idle)
    }

    #[must_use]
    pub fn resize_drag(self) -> Option<ResizeDrag> {
        match self.gesture {
            GestureState::Resizing(drag) => Some(drag),
            _ => None,
        }
    }

    #[must_use]
    pub fn reorder_drag(self) -> Option<ReorderDrag> {
        match self.gesture {
            GestureState::Reordering(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn on_handle_press(&mut self, drag: ResizeDrag) {
        self.gesture = GestureState::Resizing(drag);
    }

    pub fn on_block_drag_start(&mut self, source_index: usize) {
        self.gesture = GestureState::Reordering(ReorderDrag { source_index });
    }

    /// Ends any gesture and returns the one that was active.
    pub fn on_gesture_end(&mut self) -> GestureState {
        std::mem::take(&mut self.gesture)
    }

    #[must_use]
    pub fn affordance_open(self) -> bool {
        self.affordance_open
    }

    pub fn set_affordance_open(&mut self, open: bool) {
        self.affordance_open = open;
    }

    /// Host re-renders would destroy in-flight gesture or dropdown state.
    #[must_use]
    pub fn accepts_host_refresh(self) -> bool {
        !self.affordance_open && !self.is_gesture_active()
    }
}
