//! Configuration management.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default threshold for the high-earners query.
pub const DEFAULT_HIGH_EARNER_THRESHOLD: f64 = 70_000.0;

/// Main configuration for the roster tool.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    /// File loaded on startup and saved after mutating commands.
    pub data_file: PathBuf,
    /// Default threshold for `high-earners`.
    pub high_earner_threshold: f64,
    /// Seed the built-in sample employees when the data file is missing.
    pub seed_sample_data: bool,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive used when `ROSTER_LOG` is unset, e.g. `info` or `roster=debug`.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Data file path.
    pub data_file: Option<String>,
    /// High earner threshold.
    pub high_earner_threshold: Option<f64>,
    /// Sample data seeding.
    pub seed_sample_data: Option<bool>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLogging {
    /// Filter level.
    pub level: Option<String>,
    /// Output format.
    pub format: Option<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("employees.dat"),
            high_earner_threshold: DEFAULT_HIGH_EARNER_THRESHOLD,
            seed_sample_data: true,
            logging: LoggingSettings::default(),
        }
    }
}

impl RosterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::failed("read_config_file", format!("{}: {e}", path.display())))?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, has unknown keys, or
    /// sets a negative threshold.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::failed("parse_config_file", e))?;

        if let Some(threshold) = file.high_earner_threshold
            && (threshold.is_nan() || threshold < 0.0)
        {
            return Err(Error::InvalidInput(format!(
                "high_earner_threshold must be non-negative, got {threshold}"
            )));
        }

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/roster/` on macOS)
    /// 2. XDG config dir (`~/.config/roster/` for Unix compatibility)
    ///
    /// Returns default configuration if no usable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("roster").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("roster")
                .join("config.toml"),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                },
            }
        }

        Self::default()
    }

    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(data_file) = file.data_file {
            config.data_file = PathBuf::from(data_file);
        }
        if let Some(threshold) = file.high_earner_threshold {
            config.high_earner_threshold = threshold;
        }
        if let Some(seed) = file.seed_sample_data {
            config.seed_sample_data = seed;
        }
        if let Some(logging) = file.logging {
            config.logging = LoggingSettings {
                level: logging.level,
                format: logging.format,
            };
        }

        config
    }

    /// Sets the data file.
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
