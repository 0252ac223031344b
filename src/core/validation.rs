use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult, ValidationViolation};

use super::block::Block;
use super::snap::is_on_grid;
use super::time_unit::{END_OF_DAY, START_OF_DAY, to_clock};

/// Save-time gate for a candidate schedule.
///
/// Checks, in order: non-empty, gap/overlap-free full-day coverage after
/// sorting by start, non-empty ranges, numeric temperatures in range. The
/// first violation is returned; indexes refer to positions in `blocks` as given.
pub fn validate(blocks: &[Block]) -> ScheduleResult<()> {
    let result = validate_inner(blocks);
    if let Err(err) = &result {
        debug!(error = %err, blocks = blocks.len(), "schedule rejected by validator");
    }
    result
}

fn validate_inner(blocks: &[Block]) -> ScheduleResult<()> {
    if blocks.is_empty() {
        return Err(ScheduleError::validation(
            &[],
            ValidationViolation::Empty,
            "at least one block is required",
        ));
    }

    let mut order: Vec<usize> = (0..blocks.len()).collect();
    order.sort_by_key(|&index| blocks[index].start);

    let first = order[0];
    if blocks[first].start != START_OF_DAY {
        return Err(ScheduleError::validation(
            &[first],
            ValidationViolation::StartNotMidnight,
            format!(
                "first block must start at 00:00, starts at {}",
                to_clock(blocks[first].start)
            ),
        ));
    }

    for pair in order.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let current_end = blocks[current].end;
        let next_start = blocks[next].start;
        if current_end < next_start {
            return Err(ScheduleError::validation(
                &[current, next],
                ValidationViolation::Gap,
                format!(
                    "gap between {} and {}",
                    to_clock(current_end),
                    to_clock(next_start)
                ),
            ));
        }
        if current_end > next_start {
            return Err(ScheduleError::validation(
                &[current, next],
                ValidationViolation::Overlap,
                format!(
                    "overlap between {} and {}",
                    blocks[current].range_label(),
                    blocks[next].range_label()
                ),
            ));
        }
    }

    let last = order[order.len() - 1];
    if blocks[last].end != END_OF_DAY {
        return Err(ScheduleError::validation(
            &[last],
            ValidationViolation::EndNotEndOfDay,
            format!(
                "last block must end at 24:00, ends at {}",
                to_clock(blocks[last].end)
            ),
        ));
    }

    for (index, block) in blocks.iter().enumerate() {
        if block.start >= block.end {
            return Err(ScheduleError::validation(
                &[index],
                ValidationViolation::EmptyRange,
                format!("block {} has an empty time range", block.range_label()),
            ));
        }
    }

    for (index, block) in blocks.iter().enumerate() {
        if !block.temperature.is_in_range() {
            return Err(ScheduleError::validation(
                &[index],
                ValidationViolation::TemperatureOutOfRange,
                format!(
                    "block {}: temperature {} out of range (5-30°C)",
                    block.range_label(),
                    block.temperature
                ),
            ));
        }
    }

    Ok(())
}

/// Invariant A in stored order: starts at 0, ends at 1440, every neighbor pair shares a boundary.
#[must_use]
pub fn is_contiguous_partition(blocks: &[Block]) -> bool {
    let (Some(first), Some(last)) = (blocks.first(), blocks.last()) else {
        return false;
    };
    first.start == START_OF_DAY
        && last.end == END_OF_DAY
        && blocks.iter().all(|block| block.start < block.end)
        && blocks.windows(2).all(|pair| pair[0].end == pair[1].start)
}

/// Invariant B: every boundary sits on the 15-minute grid.
#[must_use]
pub fn is_grid_aligned(blocks: &[Block]) -> bool {
    blocks
        .iter()
        .all(|block| is_on_grid(block.start) && is_on_grid(block.end))
}
