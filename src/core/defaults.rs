use super::block::Block;
use super::schedule::Schedule;
use super::variant::DayType;

const SETBACK_C: f64 = 18.0;
const COMFORT_C: f64 = 21.0;

/// Built-in schedule used when a variant cannot be fetched.
///
/// Weekdays carry a morning and an evening comfort peak; weekend and daily
/// schedules keep one long comfort span.
#[must_use]
pub fn default_schedule(day_type: DayType) -> Schedule {
    let blocks = match day_type {
        DayType::Weekday => vec![
            Block::new(0, 6 * 60, SETBACK_C),
            Block::new(6 * 60, 8 * 60, COMFORT_C),
            Block::new(8 * 60, 16 * 60, SETBACK_C),
            Block::new(16 * 60, 22 * 60, COMFORT_C),
            Block::new(22 * 60, 24 * 60, SETBACK_C),
        ],
        DayType::Weekend => vec![
            Block::new(0, 8 * 60, SETBACK_C),
            Block::new(8 * 60, 23 * 60, COMFORT_C),
            Block::new(23 * 60, 24 * 60, SETBACK_C),
        ],
        DayType::Daily => vec![
            Block::new(0, 6 * 60, SETBACK_C),
            Block::new(6 * 60, 22 * 60, COMFORT_C),
            Block::new(22 * 60, 24 * 60, SETBACK_C),
        ],
    };
    // Constant tables above satisfy every validator rule.
    match Schedule::new(blocks) {
        Ok(schedule) => schedule,
        Err(_) => Schedule::uniform(COMFORT_C.into()),
    }
}
