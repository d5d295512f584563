//! Logging Infrastructure
//!
//! Structured logging for development (human-readable) and production
//! (JSON lines). `RUST_LOG` overrides the configured level.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber
///
/// # Examples
/// ```no_run
/// // Development
/// employee_server::init_logger("debug", false)?;
///
/// // Production
/// employee_server::init_logger("info", true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_thread_ids(true),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_line_number(false))
            .try_init()?;
    }

    Ok(())
}
