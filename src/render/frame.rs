use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Block, BoundaryHandle, MinuteOfDay, Temperature, to_clock};
use crate::error::{ScheduleError, ScheduleResult};
use crate::interaction::{InteractionMode, TimelineGeometry};

use super::Color;

/// One block laid out on the timeline strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSegment {
    pub index: usize,
    pub start: MinuteOfDay,
    pub end: MinuteOfDay,
    pub x_px: f64,
    pub width_px: f64,
    pub start_label: String,
    pub end_label: String,
    pub temperature: Temperature,
    pub temperature_label: String,
    pub color: Color,
    pub selected: bool,
}

impl TimelineSegment {
    pub fn validate(&self) -> ScheduleResult<()> {
        if !self.x_px.is_finite() || !self.width_px.is_finite() || self.width_px < 0.0 {
            return Err(ScheduleError::InvalidData(format!(
                "segment {} has invalid geometry",
                self.index
            )));
        }
        self.color.validate()
    }
}

/// Draggable inner boundary, reported as the right handle of the earlier block.
///
/// Outer day edges are pinned and never emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub block_index: usize,
    pub handle: BoundaryHandle,
    pub minute: MinuteOfDay,
    pub x_px: f64,
}

/// Backend-agnostic view of the editor for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width_px: f64,
    pub segments: Vec<TimelineSegment>,
    pub handles: SmallVec<[HandleMarker; 8]>,
    pub interaction_mode: InteractionMode,
    pub notice: Option<String>,
    /// Only boundary positions moved; existing nodes may be patched in place.
    pub partial: bool,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: TimelineGeometry) -> Self {
        Self {
            width_px: geometry.width_px(),
            segments: Vec::new(),
            handles: SmallVec::new(),
            interaction_mode: InteractionMode::Idle,
            notice: None,
            partial: false,
        }
    }

    /// Lays out `blocks` left to right and emits the inner handles.
    #[must_use]
    pub fn from_blocks(
        geometry: TimelineGeometry,
        blocks: &[Block],
        selected: Option<usize>,
    ) -> Self {
        let mut frame = Self::new(geometry);
        for (index, block) in blocks.iter().enumerate() {
            let x_px = geometry.minute_to_x(block.start);
            frame.segments.push(TimelineSegment {
                index,
                start: block.start,
                end: block.end,
                x_px,
                width_px: (geometry.minute_to_x(block.end) - x_px).max(0.0),
                start_label: to_clock(block.start),
                end_label: to_clock(block.end),
                temperature: block.temperature,
                temperature_label: block.temperature.to_string(),
                color: Color::for_temperature(block.temperature),
                selected: selected == Some(index),
            });
            if index + 1 < blocks.len() {
                frame.handles.push(HandleMarker {
                    block_index: index,
                    handle: BoundaryHandle::Right,
                    minute: block.end,
                    x_px: geometry.minute_to_x(block.end),
                });
            }
        }
        frame
    }

    #[must_use]
    pub fn with_interaction_mode(mut self, mode: InteractionMode) -> Self {
        self.interaction_mode = mode;
        self
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    #[must_use]
    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Lowest and highest numeric set point shown, for legends.
    #[must_use]
    pub fn temperature_span(&self) -> Option<(f64, f64)> {
        let numeric = self
            .segments
            .iter()
            .filter_map(|segment| segment.temperature.celsius())
            .map(OrderedFloat);
        let min = numeric.clone().min()?;
        let max = numeric.max()?;
        Some((min.into_inner(), max.into_inner()))
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if !self.width_px.is_finite() || self.width_px <= 0.0 {
            return Err(ScheduleError::InvalidData(
                "frame width must be finite and > 0".to_owned(),
            ));
        }
        for segment in &self.segments {
            segment.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
