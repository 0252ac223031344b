use crate::error::ScheduleResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless editor usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real presentation layer is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_segment_count: usize,
    pub last_handle_count: usize,
    pub last_notice: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScheduleResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_segment_count = frame.segments.len();
        self.last_handle_count = frame.handles.len();
        self.last_notice = frame.notice.clone();
        Ok(())
    }
}
