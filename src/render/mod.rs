mod frame;
mod null_renderer;
mod primitives;

pub use frame::{HandleMarker, RenderFrame, TimelineSegment};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::ScheduleResult;

/// Contract implemented by any presentation layer.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from schedule mutation and gesture handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScheduleResult<()>;
}
