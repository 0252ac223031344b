use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::extensions::EditorPlugin;
use crate::render::Renderer;

use super::ScheduleEditor;

impl<R: Renderer> ScheduleEditor<R> {
    /// Attaches an observer; ids must be non-blank and unique per editor.
    ///
    /// Plugins receive events in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn EditorPlugin>) -> ScheduleResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.trim().is_empty() {
            return Err(ScheduleError::InvalidData(
                "editor plugin id must not be blank".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(ScheduleError::InvalidData(format!(
                "editor plugin `{plugin_id}` is already attached to this schedule editor"
            )));
        }
        debug!(plugin = plugin_id, "editor plugin attached");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the plugin with `plugin_id`. Returns `true` when one was attached.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.core.runtime.plugins.len();
        self.core
            .runtime
            .plugins
            .retain(|plugin| plugin.id() != plugin_id);
        let removed = self.core.runtime.plugins.len() != before;
        if removed {
            debug!(plugin = plugin_id, "editor plugin detached");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .runtime
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }

    /// Attached plugin ids in dispatch order.
    #[must_use]
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.core
            .runtime
            .plugins
            .iter()
            .map(|plugin| plugin.id())
            .collect()
    }
}
