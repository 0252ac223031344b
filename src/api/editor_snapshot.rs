use serde::{Deserialize, Serialize};

use crate::core::{Block, ScheduleVariant};
use crate::error::{ScheduleError, ScheduleResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{InvalidationLevel, Notice, ScheduleEditor};

/// Serializable editor state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub variant: ScheduleVariant,
    pub blocks: Vec<Block>,
    pub selected_block: Option<usize>,
    pub editing: bool,
    pub interaction_mode: InteractionMode,
    pub pending_variant: Option<ScheduleVariant>,
    pub pending_invalidation: InvalidationLevel,
    pub notice: Option<Notice>,
}

impl EditorSnapshot {
    pub fn from_json_str(input: &str) -> ScheduleResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScheduleError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}

impl<R: Renderer> ScheduleEditor<R> {
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            variant: self.core.model.variant.clone(),
            blocks: self.core.model.schedule.blocks().to_vec(),
            selected_block: self.core.model.selected,
            editing: self.core.model.editing,
            interaction_mode: self.core.runtime.interaction.mode(),
            pending_variant: self.core.model.pending_variant.clone(),
            pending_invalidation: self.core.runtime.pending_invalidation,
            notice: self.core.runtime.notices.current().cloned(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ScheduleResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ScheduleError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
