//! Tracing setup for hosts embedding `schedule-rs`.
//!
//! The editor only emits `tracing` events; installing a subscriber is left to
//! the host. With the `telemetry` feature these helpers install a compact
//! formatter so editor logs show up without further wiring.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "schedule_rs=info";

/// Installs a compact subscriber filtered by `RUST_LOG` or `DEFAULT_TRACING_FILTER`.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact subscriber using an explicit filter directive such as
/// `schedule_rs=trace`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directives) else {
            return false;
        };
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
