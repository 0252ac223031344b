mod block_controller;
mod editor;
mod editor_config;
mod editor_model;
mod editor_runtime;
mod editor_snapshot;
mod gateway;
mod interaction_controller;
mod invalidation;
mod json_contract;
mod mode_selector;
mod notice;
mod plugin_dispatch;
mod plugin_registry;
mod session_controller;
mod validation;

pub use editor::ScheduleEditor;
pub use editor_config::ScheduleEditorConfig;
pub use editor_snapshot::EditorSnapshot;
pub use gateway::{EntityRef, HubRef, InMemoryScheduleGateway, ScheduleGateway};
pub use invalidation::InvalidationLevel;
pub use json_contract::{SCHEDULE_PAYLOAD_JSON_SCHEMA_V1, SchedulePayloadV1, WireBlock};
pub use mode_selector::ModeSelector;
pub use notice::{Notice, NoticeKind};
pub use session_controller::{LoadSource, LoadedSchedule, SaveRequest, fetch_or_default};
