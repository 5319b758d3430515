//! Logging setup via tracing-subscriber.
//!
//! Everything logged goes to stderr. Stdout is left to the greeting lines, so
//! `greet Ada | …` never sees a log record.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

use crate::error::AppError;

/// Build the event filter. `RUST_LOG` wins when it is set and valid,
/// otherwise the configured `level` applies.
pub fn filter(level: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))
}

/// A fmt subscriber writing through `writer`. [`init`] passes stderr.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber on stderr. Call once, after config is loaded.
pub fn init(level: &str) -> Result<(), AppError> {
    let subscriber = subscriber(filter(level)?, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Check that `level` is a plain level name (`error` … `trace`, or `off`).
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
