use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::error::{ScheduleError, ScheduleResult};

/// Zero-based minute of the day. `1440` is the end of day (`24:00`).
pub type MinuteOfDay = u16;

pub const START_OF_DAY: MinuteOfDay = 0;
pub const END_OF_DAY: MinuteOfDay = 24 * 60;

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-4]):([0-5][0-9])$").expect("clock pattern is a valid regex")
});

/// Parses `HH:MM` wall-clock text into minutes since midnight.
///
/// Accepts `24:00` as the end of day; any other `24:MM` is rejected.
pub fn to_minutes(text: &str) -> ScheduleResult<MinuteOfDay> {
    let trimmed = text.trim();
    let format_error = || ScheduleError::Format {
        input: text.to_owned(),
    };

    let captures = CLOCK_PATTERN.captures(trimmed).ok_or_else(format_error)?;
    let hours: MinuteOfDay = captures[1].parse().map_err(|_| format_error())?;
    let minutes: MinuteOfDay = captures[2].parse().map_err(|_| format_error())?;

    let total = hours * 60 + minutes;
    if total > END_OF_DAY {
        return Err(format_error());
    }
    Ok(total)
}

/// Parses an end-of-range time. `00:00` always means `24:00` here.
pub fn to_end_minutes(text: &str) -> ScheduleResult<MinuteOfDay> {
    match to_minutes(text)? {
        START_OF_DAY => Ok(END_OF_DAY),
        minutes => Ok(minutes),
    }
}

/// Formats minutes as zero-padded `HH:MM`; values past the end of day clamp to `24:00`.
#[must_use]
pub fn to_clock(minutes: MinuteOfDay) -> String {
    let minutes = minutes.min(END_OF_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[must_use]
pub fn from_naive_time(time: NaiveTime) -> MinuteOfDay {
    // hour() < 24 and minute() < 60, so the sum always fits.
    (time.hour() * 60 + time.minute()) as MinuteOfDay
}

/// Converts to a wall-clock time. The end of day has no `NaiveTime` and maps to `None`.
#[must_use]
pub fn to_naive_time(minutes: MinuteOfDay) -> Option<NaiveTime> {
    if minutes >= END_OF_DAY {
        return None;
    }
    NaiveTime::from_hms_opt(u32::from(minutes / 60), u32::from(minutes % 60), 0)
}
