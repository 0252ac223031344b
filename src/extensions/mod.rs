//! Observer hooks for presentation layers and host integrations.

pub mod plugins;

pub use plugins::{EditorContext, EditorEvent, EditorPlugin};
