//! Opt-in tracing setup for programs that render plots.
//!
//! The library only emits `tracing` events. Hosts that do not install a
//! subscriber of their own can enable the `telemetry` feature and call
//! [`init_default_tracing`] once at startup.

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(filter = DEFAULT_TRACING_FILTER, "raster-plot tracing ready");
        }
        installed
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
