//! Opt-in tracing setup for hosts embedding the chart engine.
//!
//! Nothing here runs implicitly. Applications either call
//! [`init_default_tracing`] once at startup or install their own
//! `tracing` subscriber with whatever filtering they need; the chart
//! code only ever emits events through the `tracing` macros.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, falling back
/// to `info` when the variable is unset.
///
/// Returns `true` on success. Returns `false` when the `telemetry`
/// feature is off or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
