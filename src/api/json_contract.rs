use serde::{Deserialize, Serialize};

use crate::core::{
    Block, DayType, END_OF_DAY, MinuteOfDay, ScheduleVariant, Temperature, to_clock,
    to_end_minutes, to_minutes,
};
use crate::error::{ScheduleError, ScheduleResult};

pub const SCHEDULE_PAYLOAD_JSON_SCHEMA_V1: u32 = 1;

/// Legacy stores wrote the end of day as the last displayable minute.
const LEGACY_END_OF_DAY: &str = "23:59";

/// One block as exchanged with a backend: clock strings instead of minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireBlock {
    pub start_time: String,
    pub end_time: String,
    pub temperature: Temperature,
}

impl WireBlock {
    #[must_use]
    pub fn from_block(block: Block) -> Self {
        Self {
            start_time: to_clock(block.start),
            end_time: to_clock(block.end),
            temperature: block.temperature,
        }
    }

    pub fn to_block(&self) -> ScheduleResult<Block> {
        let start = to_minutes(&self.start_time)?;
        let end = decode_end_time(&self.end_time)?;
        Ok(Block::new(start, end, self.temperature))
    }
}

fn decode_end_time(text: &str) -> ScheduleResult<MinuteOfDay> {
    if text.trim() == LEGACY_END_OF_DAY {
        return Ok(END_OF_DAY);
    }
    to_end_minutes(text)
}

/// Versioned schedule document for one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayloadV1 {
    pub schema_version: u32,
    pub mode: String,
    pub day_type: DayType,
    pub blocks: Vec<WireBlock>,
}

impl SchedulePayloadV1 {
    #[must_use]
    pub fn from_blocks(variant: &ScheduleVariant, blocks: &[Block]) -> Self {
        Self {
            schema_version: SCHEDULE_PAYLOAD_JSON_SCHEMA_V1,
            mode: variant.mode.clone(),
            day_type: variant.day_type,
            blocks: blocks.iter().copied().map(WireBlock::from_block).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> ScheduleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScheduleError::InvalidData(format!("failed to serialize schedule payload v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ScheduleResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ScheduleError::InvalidData(format!("failed to parse schedule payload json: {e}"))
        })?;
        if payload.schema_version != SCHEDULE_PAYLOAD_JSON_SCHEMA_V1 {
            return Err(ScheduleError::InvalidData(format!(
                "unsupported schedule payload schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }

    /// Decodes clock strings into blocks sorted by start time.
    ///
    /// The blocks are not validated; `Schedule::new` does that.
    pub fn into_variant_and_blocks(self) -> ScheduleResult<(ScheduleVariant, Vec<Block>)> {
        let mut blocks = self
            .blocks
            .iter()
            .map(WireBlock::to_block)
            .collect::<ScheduleResult<Vec<_>>>()?;
        blocks.sort_by_key(|block| block.start);
        Ok((ScheduleVariant::new(self.mode, self.day_type), blocks))
    }
}
