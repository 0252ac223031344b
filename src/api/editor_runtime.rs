use crate::core::Schedule;
use crate::extensions::EditorPlugin;
use crate::interaction::{InteractionState, TimelineGeometry};

use super::{InvalidationLevel, ScheduleEditorConfig, notice::NoticeBoard};

/// Configuration-derived state grouped separately from the schedule model.
pub(super) struct EditorBehaviorState {
    pub(super) config: ScheduleEditorConfig,
    pub(super) geometry: TimelineGeometry,
}

/// Runtime orchestration state grouped separately from model/behavior.
pub(super) struct EditorRuntimeState {
    pub(super) plugins: Vec<Box<dyn EditorPlugin>>,
    pub(super) interaction: InteractionState,
    /// Schedule as it was when the active gesture began.
    pub(super) gesture_origin: Option<Schedule>,
    pub(super) pending_invalidation: InvalidationLevel,
    pub(super) notices: NoticeBoard,
}

impl EditorRuntimeState {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            plugins: Vec::new(),
            interaction: InteractionState::default(),
            gesture_origin: None,
            pending_invalidation: InvalidationLevel::Full,
            notices: NoticeBoard::default(),
        }
    }
}

/// Internal editor core state used by the public facade (`ScheduleEditor`).
pub(super) struct EditorCore {
    pub(super) model: super::editor_model::EditorModel,
    pub(super) behavior: EditorBehaviorState,
    pub(super) runtime: EditorRuntimeState,
}
