//! Opt-in tracing setup for applications embedding `aster-charts`.
//!
//! The crate logs composition decisions (discarded protected fields,
//! renderer component registration) at debug level through `tracing`.
//! Hosts that already install a subscriber need nothing from here.

/// Installs a compact default `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// The filter honors `RUST_LOG` and falls back to `aster_charts=info`.
/// Returns `false` when the feature is disabled or a global subscriber
/// was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("aster_charts=info"));
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
