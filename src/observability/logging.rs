//! Structured logging configuration.

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV_VAR: &str = "ROSTER_LOG";

/// Filter used when neither the environment nor the config sets one.
const DEFAULT_LEVEL: &str = "warn";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!("Unknown log format: {s}"))),
        }
    }
}

/// Logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Event filter.
    pub filter: EnvFilter,
}

impl LoggingConfig {
    /// Builds logging configuration from config settings.
    ///
    /// Precedence: `--verbose` forces `debug`, then `ROSTER_LOG`, then the
    /// configured level, then `warn`. An unparseable format falls back to
    /// pretty output.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let env_directive = std::env::var(LOG_ENV_VAR).ok();
        let configured = settings.and_then(|s| s.level.as_deref());

        let directive = resolve_directive(verbose, env_directive.as_deref(), configured);
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        let format = settings
            .and_then(|s| s.format.as_deref())
            .and_then(|f| LogFormat::from_str(f).ok())
            .unwrap_or_default();

        Self { format, filter }
    }
}

fn resolve_directive(verbose: bool, env: Option<&str>, configured: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|d| !d.trim().is_empty())
        .or(configured)
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}
