pub mod block;
pub mod defaults;
pub mod schedule;
pub mod snap;
pub mod temperature;
pub mod time_unit;
pub mod validation;
pub mod variant;

pub use block::Block;
pub use defaults::default_schedule;
pub use schedule::{BoundaryHandle, SPLIT_HOUR_THRESHOLD_MINUTES, Schedule};
pub use snap::{GRID_MINUTES, MIN_BLOCK_MINUTES, is_on_grid, snap, snap_delta};
pub use temperature::{
    DEFAULT_FROST_PROTECTION_C, DEFAULT_SPLIT_TEMPERATURE_C, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C,
    SpecialTemperature, Temperature,
};
pub use time_unit::{
    END_OF_DAY, MinuteOfDay, START_OF_DAY, from_naive_time, to_clock, to_end_minutes,
    to_minutes, to_naive_time,
};
pub use validation::{is_contiguous_partition, is_grid_aligned, validate};
pub use variant::{
    DayType, FALLBACK_MODES, MODE_HOMEOFFICE, MODE_MANUAL, MODE_NORMAL, MODE_OFF,
    ScheduleVariant, day_types_for_mode, mode_display_name, mode_requires_schedule,
    selectable_modes, variant_display_name,
};
