use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub const MODE_NORMAL: &str = "normal";
pub const MODE_HOMEOFFICE: &str = "homeoffice";
pub const MODE_MANUAL: &str = "manual";
pub const MODE_OFF: &str = "off";

/// Mode names used when the hub cannot report its own list.
pub const FALLBACK_MODES: [&str; 4] = [MODE_NORMAL, MODE_HOMEOFFICE, MODE_MANUAL, MODE_OFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
    Daily,
}

impl DayType {
    /// Monday through Friday are weekdays.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of one editable schedule: a hub mode plus a day type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleVariant {
    pub mode: String,
    pub day_type: DayType,
}

impl ScheduleVariant {
    #[must_use]
    pub fn new(mode: impl Into<String>, day_type: DayType) -> Self {
        Self {
            mode: mode.into(),
            day_type,
        }
    }

    #[must_use]
    pub fn normal_weekday() -> Self {
        Self::new(MODE_NORMAL, DayType::Weekday)
    }

    #[must_use]
    pub fn normal_weekend() -> Self {
        Self::new(MODE_NORMAL, DayType::Weekend)
    }

    /// Variant in effect for `mode` on `date`, if the mode is scheduled at all.
    #[must_use]
    pub fn for_mode_on(mode: &str, date: NaiveDate) -> Option<Self> {
        if !mode_requires_schedule(mode) {
            return None;
        }
        let day_type = if mode == MODE_NORMAL {
            DayType::for_date(date)
        } else {
            DayType::Daily
        };
        Some(Self::new(mode, day_type))
    }

    /// First variant a mode opens with in the editor.
    #[must_use]
    pub fn default_for_mode(mode: &str) -> Option<Self> {
        day_types_for_mode(mode)
            .first()
            .map(|day_type| Self::new(mode, *day_type))
    }
}

impl fmt::Display for ScheduleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mode, self.day_type)
    }
}

/// Day types a mode keeps schedules for. Only `normal` splits weekday/weekend.
#[must_use]
pub fn day_types_for_mode(mode: &str) -> &'static [DayType] {
    match mode {
        MODE_MANUAL | MODE_OFF => &[],
        MODE_NORMAL => &[DayType::Weekday, DayType::Weekend],
        _ => &[DayType::Daily],
    }
}

#[must_use]
pub fn mode_requires_schedule(mode: &str) -> bool {
    !matches!(mode, MODE_MANUAL | MODE_OFF)
}

/// Modes offered in the dynamic selector list.
///
/// `normal` has its own weekday/weekend tabs while `manual` and `off` carry no
/// schedule, so all three are left out. Duplicates keep their first position.
#[must_use]
pub fn selectable_modes<S: AsRef<str>>(modes: &[S]) -> Vec<String> {
    modes
        .iter()
        .map(|mode| mode.as_ref().trim())
        .filter(|mode| {
            !mode.is_empty() && !matches!(*mode, MODE_NORMAL | MODE_MANUAL | MODE_OFF)
        })
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Human-readable label such as `Normal - Weekday (Mon-Fri)`.
#[must_use]
pub fn variant_display_name(variant: &ScheduleVariant) -> String {
    let base = mode_display_name(&variant.mode);
    match variant.day_type {
        DayType::Weekday => format!("{base} - Weekday (Mon-Fri)"),
        DayType::Weekend => format!("{base} - Weekend (Sat-Sun)"),
        DayType::Daily => format!("{base} (daily)"),
    }
}

#[must_use]
pub fn mode_display_name(mode: &str) -> String {
    let mut chars = mode.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
