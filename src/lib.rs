//! schedule-rs: day-schedule editing engine for heating timelines.
//!
//! A day is an ordered partition of `[00:00, 24:00)` into temperature
//! blocks. The crate keeps that partition intact through interactive edits
//! (split, delete, boundary drags, reordering), gates saves behind a
//! validator, and talks to the device through an async gateway trait.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScheduleEditor, ScheduleEditorConfig};
pub use error::{ScheduleError, ScheduleResult};
