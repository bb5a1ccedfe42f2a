//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an `EnvFilter` resolved from
//! the environment or configuration, feeding a compact fmt layer on stderr.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for the engine.
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call installs a
/// subscriber. Installation failure (e.g. the host already installed one) is
/// silently ignored — observability is optional.
pub fn init_tracing(config: &Config) {
    let fallback = config.trace_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        init_tracing(&config);
        init_tracing(&config);
        tracing::debug!("still alive after double init");
    }
}
