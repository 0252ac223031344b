use crate::core::{MAX_TEMPERATURE_C, MIN_TEMPERATURE_C};
use crate::error::{ScheduleError, ScheduleResult};
use crate::interaction::TimelineGeometry;

use super::ScheduleEditorConfig;

pub(super) fn validate_editor_config(
    config: &ScheduleEditorConfig,
) -> ScheduleResult<TimelineGeometry> {
    let geometry = TimelineGeometry::new(config.timeline_width_px)?;

    for (name, value) in [
        (
            "default_split_temperature_c",
            config.default_split_temperature_c,
        ),
        ("frost_protection_c", config.frost_protection_c),
    ] {
        if !value.is_finite() || !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&value) {
            return Err(ScheduleError::InvalidData(format!(
                "editor config `{name}` must be finite and in [{MIN_TEMPERATURE_C}, {MAX_TEMPERATURE_C}]"
            )));
        }
    }

    if config.notice_ttl_ms == 0 {
        return Err(ScheduleError::InvalidData(
            "editor config `notice_ttl_ms` must be > 0".to_owned(),
        ));
    }

    if config
        .fallback_modes
        .iter()
        .any(|mode| mode.trim().is_empty())
    {
        return Err(ScheduleError::InvalidData(
            "editor config `fallback_modes` must not contain empty names".to_owned(),
        ));
    }

    Ok(geometry)
}
