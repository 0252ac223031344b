use crate::extensions::{EditorContext, EditorEvent};
use crate::render::Renderer;

use super::ScheduleEditor;

impl<R: Renderer> ScheduleEditor<R> {
    pub(super) fn plugin_context(&self) -> EditorContext {
        EditorContext {
            day_type: self.core.model.variant.day_type,
            blocks_len: self.core.model.schedule.len(),
            selected_block: self.core.model.selected,
            editing: self.core.model.editing,
            interaction_mode: self.core.runtime.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: EditorEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
