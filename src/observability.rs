use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence over `log_level`. Everything is written to
/// stderr; stdout carries command output only.
pub fn init_observability(log_level: &str, log_format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    match log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
    }

    tracing::debug!(
        log.level = log_level,
        log.format = %log_format,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_init_once() {
        let result = init_observability("debug", LogFormat::Pretty);
        assert!(result.is_ok(), "Observability init should succeed: {:?}", result.err());

        // a global subscriber is already installed
        assert!(init_observability("info", LogFormat::Json).is_err());
    }
}
