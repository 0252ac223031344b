use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ScheduleError, ScheduleResult};

use super::block::Block;
use super::snap::{MIN_BLOCK_MINUTES, snap, snap_delta};
use super::temperature::Temperature;
use super::time_unit::{END_OF_DAY, MinuteOfDay, START_OF_DAY};
use super::validation::validate;

/// Blocks of at least this length split one hour after their start.
pub const SPLIT_HOUR_THRESHOLD_MINUTES: MinuteOfDay = 120;
const SPLIT_HOUR_OFFSET_MINUTES: MinuteOfDay = 60;

/// Which edge of a block a resize handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryHandle {
    Left,
    Right,
}

/// Ordered, non-empty partition of one day into temperature blocks.
///
/// Every public mutation restores full-day coverage (first start `00:00`,
/// last end `24:00`, neighbors share a boundary) before returning, and
/// interactive edits keep boundaries on the 15-minute grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct Schedule {
    blocks: Vec<Block>,
}

impl Schedule {
    /// Sorts `blocks` by start and accepts them only if they pass the validator.
    pub fn new(mut blocks: Vec<Block>) -> ScheduleResult<Self> {
        blocks.sort_by_key(|block| block.start);
        validate(&blocks)?;
        Ok(Self { blocks })
    }

    /// Single block covering the whole day.
    #[must_use]
    pub fn uniform(temperature: Temperature) -> Self {
        Self {
            blocks: vec![Block::new(START_OF_DAY, END_OF_DAY, temperature)],
        }
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, index: usize) -> ScheduleResult<Block> {
        self.blocks
            .get(index)
            .copied()
            .ok_or_else(|| out_of_range(index, self.blocks.len()))
    }

    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Index of the longest block; the earliest wins ties.
    #[must_use]
    pub fn longest_block_index(&self) -> usize {
        let mut best = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            if block.duration() > self.blocks[best].duration() {
                best = index;
            }
        }
        best
    }

    /// Splits one block in two and returns the index of the new second half.
    ///
    /// Blocks of two hours or more split one hour after their start, shorter
    /// ones at the snapped midpoint. Both halves keep at least 15 minutes.
    pub fn split_block(&mut self, index: usize, second_half: Temperature) -> ScheduleResult<usize> {
        let block = self.block(index)?;
        let duration = block.duration();
        if duration < 2 * MIN_BLOCK_MINUTES {
            return Err(ScheduleError::TooSmall { index, duration });
        }

        let raw = if duration >= SPLIT_HOUR_THRESHOLD_MINUTES {
            block.start + SPLIT_HOUR_OFFSET_MINUTES
        } else {
            block.start + duration / 2
        };
        let split_at = snap(i32::from(raw)).clamp(
            block.start + MIN_BLOCK_MINUTES,
            block.end - MIN_BLOCK_MINUTES,
        );

        self.blocks[index].end = split_at;
        self.blocks
            .insert(index + 1, Block::new(split_at, block.end, second_half));
        debug!(index, split_at, "split block");
        Ok(index + 1)
    }

    /// Removes a block and heals the hole by extending the earlier neighbor.
    pub fn delete_block(&mut self, index: usize) -> ScheduleResult<Block> {
        self.block(index)?;
        if self.blocks.len() == 1 {
            return Err(ScheduleError::LastBlock);
        }

        let removed = self.blocks.remove(index);
        if index == 0 {
            self.blocks[0].start = START_OF_DAY;
        } else if index == self.blocks.len() {
            self.blocks[index - 1].end = END_OF_DAY;
        } else {
            self.blocks[index - 1].end = self.blocks[index].start;
        }
        debug!(index, remaining = self.blocks.len(), "deleted block");
        Ok(removed)
    }

    /// Moves the boundary on `handle` of block `index` by a snapped delta.
    ///
    /// Returns the boundary value after the move. The day's outer edges are
    /// pinned, and the boundary stays at least 15 minutes inside both blocks
    /// that share it.
    pub fn resize_boundary(
        &mut self,
        index: usize,
        handle: BoundaryHandle,
        delta_minutes: i32,
    ) -> ScheduleResult<MinuteOfDay> {
        let block = self.block(index)?;
        let Some(boundary) = self.boundary_position(index, handle) else {
            trace!(index, ?handle, "outer day edge is pinned");
            return Ok(match handle {
                BoundaryHandle::Left => block.start,
                BoundaryHandle::Right => block.end,
            });
        };

        let current = self.blocks[boundary].start;
        let lower = i32::from(self.blocks[boundary - 1].start + MIN_BLOCK_MINUTES);
        let upper = i32::from(self.blocks[boundary].end) - i32::from(MIN_BLOCK_MINUTES);
        if lower > upper {
            trace!(index, ?handle, "neighbors too small to move boundary");
            return Ok(current);
        }

        let target = i32::from(current)
            .saturating_add(snap_delta(delta_minutes))
            .clamp(lower, upper);
        let target = target as MinuteOfDay;
        self.blocks[boundary - 1].end = target;
        self.blocks[boundary].start = target;
        trace!(index, ?handle, from = current, to = target, "resized boundary");
        Ok(target)
    }

    /// Moves the boundary on `handle` of block `index` toward an absolute minute.
    pub fn set_boundary(
        &mut self,
        index: usize,
        handle: BoundaryHandle,
        minute: MinuteOfDay,
    ) -> ScheduleResult<MinuteOfDay> {
        let block = self.block(index)?;
        let current = match handle {
            BoundaryHandle::Left => block.start,
            BoundaryHandle::Right => block.end,
        };
        let delta = i32::from(snap(i32::from(minute))) - i32::from(current);
        self.resize_boundary(index, handle, delta)
    }

    /// Swaps two blocks' positions; durations and temperatures travel with them.
    ///
    /// Boundaries are then re-laid out from `00:00` so the sequence is
    /// time-ordered again before this returns.
    pub fn swap_blocks(&mut self, first: usize, second: usize) -> ScheduleResult<()> {
        self.block(first)?;
        self.block(second)?;
        if first == second {
            return Ok(());
        }
        self.blocks.swap(first, second);
        self.reflow();
        debug!(first, second, "swapped blocks");
        Ok(())
    }

    /// Moves one block to another position, shifting the ones in between.
    pub fn move_block(&mut self, from: usize, to: usize) -> ScheduleResult<()> {
        self.block(from)?;
        self.block(to)?;
        if from == to {
            return Ok(());
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.reflow();
        debug!(from, to, "moved block");
        Ok(())
    }

    /// Sets a block's temperature, clamping numeric values into `[5, 30]`.
    pub fn set_temperature(
        &mut self,
        index: usize,
        temperature: Temperature,
    ) -> ScheduleResult<Temperature> {
        self.block(index)?;
        let applied = match temperature {
            Temperature::Celsius(value) => Temperature::clamped(value)?,
            special => special,
        };
        self.blocks[index].temperature = applied;
        trace!(index, temperature = %applied, "set block temperature");
        Ok(applied)
    }

    /// Block active at `minute`, with its index.
    #[must_use]
    pub fn block_at(&self, minute: MinuteOfDay) -> Option<(usize, Block)> {
        self.blocks
            .iter()
            .copied()
            .enumerate()
            .find(|(_, block)| block.contains(minute))
    }

    /// Effective set point at `minute`; sentinels resolve to frost protection.
    #[must_use]
    pub fn temperature_at(&self, minute: MinuteOfDay, frost_protection_c: f64) -> f64 {
        let minute = minute.min(END_OF_DAY - 1);
        self.block_at(minute)
            .map_or(frost_protection_c, |(_, block)| {
                block.temperature.resolve(frost_protection_c)
            })
    }

    /// Next boundary after `minute` and the temperature that starts there.
    ///
    /// Past the last boundary the answer wraps to the first block of the next day.
    #[must_use]
    pub fn next_change(&self, minute: MinuteOfDay) -> (MinuteOfDay, Temperature) {
        self.blocks
            .iter()
            .find(|block| block.start > minute)
            .map_or(
                (self.blocks[0].start, self.blocks[0].temperature),
                |block| (block.start, block.temperature),
            )
    }

    fn boundary_position(&self, index: usize, handle: BoundaryHandle) -> Option<usize> {
        match handle {
            BoundaryHandle::Left if index > 0 => Some(index),
            BoundaryHandle::Right if index + 1 < self.blocks.len() => Some(index + 1),
            _ => None,
        }
    }

    fn reflow(&mut self) {
        let mut cursor = START_OF_DAY;
        for block in &mut self.blocks {
            let duration = block.duration();
            block.start = cursor;
            block.end = cursor + duration;
            cursor = block.end;
        }
        if let Some(last) = self.blocks.last_mut() {
            last.end = END_OF_DAY;
        }
    }
}

impl TryFrom<Vec<Block>> for Schedule {
    type Error = ScheduleError;

    fn try_from(blocks: Vec<Block>) -> ScheduleResult<Self> {
        Self::new(blocks)
    }
}

impl From<Schedule> for Vec<Block> {
    fn from(schedule: Schedule) -> Self {
        schedule.blocks
    }
}

fn out_of_range(index: usize, len: usize) -> ScheduleError {
    ScheduleError::InvalidData(format!(
        "block index {index} out of range for {len} block(s)"
    ))
}
