//! Tracing setup for applications embedding `tikzplot-rs`.
//!
//! Document assembly emits structured `tracing` events (series added, build
//! dimensions, save completion). Setup stays explicit and opt-in: call
//! `init_default_tracing`, or wire your own subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter honors `RUST_LOG` and falls back to `info`. Returns `true` when
/// initialization succeeds, `false` when the feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
