use super::time_unit::{END_OF_DAY, MinuteOfDay};

/// Grid step used by every interactive mutation.
pub const GRID_MINUTES: MinuteOfDay = 15;

/// Smallest duration a block may have after any edit.
pub const MIN_BLOCK_MINUTES: MinuteOfDay = GRID_MINUTES;

/// Rounds a signed minute value to the nearest grid tick without clamping.
///
/// Ties round away from zero, so `+7.5` and `-7.5` snap symmetrically.
/// Results saturate at the outermost ticks representable in `i32`.
#[must_use]
pub fn snap_delta(minutes: i32) -> i32 {
    let step = i64::from(GRID_MINUTES);
    let snapped = (f64::from(minutes) / step as f64).round() as i64 * step;
    let floor = i64::from(i32::MIN) / step * step;
    let ceiling = i64::from(i32::MAX) / step * step;
    snapped.clamp(floor, ceiling) as i32
}

/// Rounds to the nearest grid tick and clamps into `[0, 1440]`.
#[must_use]
pub fn snap(minutes: i32) -> MinuteOfDay {
    snap_delta(minutes).clamp(0, i32::from(END_OF_DAY)) as MinuteOfDay
}

#[must_use]
pub fn is_on_grid(minutes: MinuteOfDay) -> bool {
    minutes % GRID_MINUTES == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_tick() {
        assert_eq!(snap(7), 0);
        assert_eq!(snap(8), 15);
        assert_eq!(snap(22), 15);
        assert_eq!(snap(23), 30);
        assert_eq!(snap(1_439), END_OF_DAY);
    }

    #[test]
    fn clamps_into_day() {
        assert_eq!(snap(-40), 0);
        assert_eq!(snap(2_000), END_OF_DAY);
    }

    #[test]
    fn signed_delta_snaps_symmetrically() {
        assert_eq!(snap_delta(-8), -15);
        assert_eq!(snap_delta(-7), 0);
        assert_eq!(snap_delta(52), 45);
    }

    #[test]
    fn extreme_inputs_saturate_on_grid() {
        assert_eq!(snap(i32::MIN), 0);
        assert_eq!(snap(i32::MAX), END_OF_DAY);
        assert_eq!(snap_delta(i32::MAX), i32::MAX / 15 * 15);
        assert_eq!(snap_delta(i32::MIN), i32::MIN / 15 * 15);
        assert_eq!(snap_delta(i32::MIN + 1) % 15, 0);
    }
}
