use crate::core::{MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, SpecialTemperature, Temperature};
use crate::error::{ScheduleError, ScheduleResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    const COLD: Self = Self::rgb(0.23, 0.51, 0.96);
    const WARM: Self = Self::rgb(0.94, 0.27, 0.27);
    const FROST: Self = Self::rgb(0.75, 0.89, 0.98);
    const OFF: Self = Self::rgb(0.58, 0.60, 0.62);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Heat ramp from cold blue at 5°C to warm red at 30°C; sentinels get fixed colors.
    #[must_use]
    pub fn for_temperature(temperature: Temperature) -> Self {
        match temperature {
            Temperature::Special(SpecialTemperature::Frost) => Self::FROST,
            Temperature::Special(SpecialTemperature::Off) => Self::OFF,
            Temperature::Celsius(value) => {
                let t = ((value - MIN_TEMPERATURE_C) / (MAX_TEMPERATURE_C - MIN_TEMPERATURE_C))
                    .clamp(0.0, 1.0);
                let t = if t.is_finite() { t } else { 0.0 };
                Self::rgb(
                    lerp(Self::COLD.red, Self::WARM.red, t),
                    lerp(Self::COLD.green, Self::WARM.green, t),
                    lerp(Self::COLD.blue, Self::WARM.blue, t),
                )
            }
        }
    }

    pub fn validate(self) -> ScheduleResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScheduleError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
