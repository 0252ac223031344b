use serde::{Deserialize, Serialize};

use crate::core::{BoundaryHandle, DayType, MinuteOfDay};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorContext {
    pub day_type: DayType,
    pub blocks_len: usize,
    pub selected_block: Option<usize>,
    pub editing: bool,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    ScheduleLoaded { blocks_len: usize, fallback: bool },
    SelectionChanged { index: Option<usize> },
    BlockSplit { index: usize, new_index: usize },
    BlockDeleted { index: usize },
    BoundaryMoved {
        index: usize,
        handle: BoundaryHandle,
        minute: MinuteOfDay,
    },
    BlocksSwapped { first: usize, second: usize },
    BlockMoved { from: usize, to: usize },
    TemperatureChanged { index: usize },
    GestureStarted { mode: InteractionMode },
    GestureCommitted,
    GestureAbandoned { rolled_back: bool },
    SaveRejected,
    Saved,
    SaveFailed,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe editor events and read context without mutating the
/// schedule directly.
pub trait EditorPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: EditorEvent, context: EditorContext);
}
