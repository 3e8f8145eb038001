//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with a stderr formatter.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`, if set
/// 3. `"info"`
///
/// Output goes to stderr so rendered markup on stdout stays clean.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are
/// ignored.
///
/// # Example
///
/// ```rust
/// use islandora_objects::observability::init_tracing;
/// use islandora_objects::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
