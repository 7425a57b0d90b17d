//! # Calculator Configuration
//!
//! Optional settings for result display and the post-result pause.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CALC_NUMBER_FORMAT=shortest                                        │
//! │     CALC_RESULT_DELAY_SECS=10                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CALC_CONFIG, or                                                   │
//! │     ~/.config/calc/calc.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.calc.calc/calc.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     general format, 6 digits, banner on, no delay                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # calc.toml
//! [display]
//! number_format = "general"  # general | shortest
//! precision = 6
//! show_banner = true
//!
//! [session]
//! result_delay_secs = 0
//! ```

use std::path::PathBuf;
use std::time::Duration;

use calc_core::{NumberFormat, ResultFormatter, DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CALC_CONFIG";

/// Upper bound for the post-result pause.
pub const MAX_RESULT_DELAY_SECS: u64 = 3600;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Display Settings
// =============================================================================

/// How the result line is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub number_format: NumberFormat,

    /// Significant digits for the `general` format.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Print the "Simple Calculator" header before the first prompt.
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            number_format: NumberFormat::default(),
            precision: default_precision(),
            show_banner: default_true(),
        }
    }
}

// =============================================================================
// Session Settings
// =============================================================================

/// Session behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Seconds to pause after printing a successful result. 0 disables it.
    #[serde(default)]
    pub result_delay_secs: u64,
}

// =============================================================================
// Main Config
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub session: SessionSettings,
}

impl CalcConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (calc.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`CalcConfig::load`], reading variables through `env`.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading calculator config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::LoadFailed { path: path.clone(), source })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(&env)?;
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_PRECISION).contains(&self.display.precision) {
            return Err(ConfigError::InvalidValue {
                key: "precision".into(),
                reason: format!("must be between 1 and {}", MAX_PRECISION),
            });
        }

        if self.session.result_delay_secs > MAX_RESULT_DELAY_SECS {
            return Err(ConfigError::InvalidValue {
                key: "result_delay_secs".into(),
                reason: format!("must be at most {}", MAX_RESULT_DELAY_SECS),
            });
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    ///
    /// Unparseable values are rejected with [`ConfigError::InvalidValue`].
    fn apply_env_overrides<F>(&mut self, env: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = env("CALC_NUMBER_FORMAT") {
            debug!(format = %format, "Overriding number format from environment");
            self.display.number_format =
                format.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "CALC_NUMBER_FORMAT".into(),
                    reason: "expected general or shortest".into(),
                })?;
        }

        if let Some(precision) = env("CALC_PRECISION") {
            self.display.precision =
                precision.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "CALC_PRECISION".into(),
                    reason: format!("'{}' is not a whole number", precision),
                })?;
        }

        if let Some(banner) = env("CALC_SHOW_BANNER") {
            match banner.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.display.show_banner = true,
                "0" | "false" | "no" | "off" => self.display.show_banner = false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CALC_SHOW_BANNER".into(),
                        reason: format!("'{}' is not a boolean", banner),
                    })
                }
            }
        }

        if let Some(delay) = env("CALC_RESULT_DELAY_SECS") {
            debug!(delay = %delay, "Overriding result delay from environment");
            self.session.result_delay_secs =
                delay.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "CALC_RESULT_DELAY_SECS".into(),
                    reason: format!("'{}' is not a whole number of seconds", delay),
                })?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "calc", "calc")
            .map(|dirs| dirs.config_dir().join("calc.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Formatter built from the display settings.
    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.display.number_format, self.display.precision)
    }

    /// The post-result pause, if any.
    pub fn result_delay(&self) -> Option<Duration> {
        match self.session.result_delay_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn missing_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.display.number_format, NumberFormat::General);
        assert_eq!(config.display.precision, 6);
        assert!(config.display.show_banner);
        assert_eq!(config.result_delay(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (_dir, path) = missing_file();
        let config = CalcConfig::load_with_env(Some(path), env_from(&[])).unwrap();
        assert_eq!(config.display.precision, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        std::fs::write(
            &path,
            "[display]\nnumber_format = \"shortest\"\nshow_banner = false\n\n[session]\nresult_delay_secs = 10\n",
        )
        .unwrap();

        let config = CalcConfig::load_with_env(Some(path), env_from(&[])).unwrap();
        assert_eq!(config.display.number_format, NumberFormat::Shortest);
        assert_eq!(config.display.precision, 6);
        assert!(!config.display.show_banner);
        assert_eq!(config.result_delay(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_path_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[display]\nprecision = 10\n").unwrap();

        let env = env_from(&[(CONFIG_PATH_ENV, path.to_str().unwrap())]);
        let config = CalcConfig::load_with_env(None, env).unwrap();
        assert_eq!(config.display.precision, 10);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        std::fs::write(&path, "[display]\nprecision = 10\n").unwrap();

        let env = env_from(&[
            ("CALC_PRECISION", "3"),
            ("CALC_NUMBER_FORMAT", "shortest"),
            ("CALC_SHOW_BANNER", "off"),
            ("CALC_RESULT_DELAY_SECS", "20"),
        ]);
        let config = CalcConfig::load_with_env(Some(path), env).unwrap();
        assert_eq!(config.display.precision, 3);
        assert_eq!(config.display.number_format, NumberFormat::Shortest);
        assert!(!config.display.show_banner);
        assert_eq!(config.session.result_delay_secs, 20);
    }

    #[test]
    fn test_invalid_env_values_are_errors() {
        let (_dir, path) = missing_file();
        let env = env_from(&[("CALC_PRECISION", "six")]);
        assert!(CalcConfig::load_with_env(Some(path.clone()), env).is_err());

        let env = env_from(&[("CALC_NUMBER_FORMAT", "roman")]);
        assert!(CalcConfig::load_with_env(Some(path.clone()), env).is_err());

        let env = env_from(&[("CALC_SHOW_BANNER", "maybe")]);
        let err = CalcConfig::load_with_env(Some(path), env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "CALC_SHOW_BANNER"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CalcConfig::default();
        config.display.precision = 0;
        assert!(config.validate().is_err());

        config.display.precision = 18;
        assert!(config.validate().is_err());

        config.display.precision = 17;
        assert!(config.validate().is_ok());

        config.session.result_delay_secs = MAX_RESULT_DELAY_SECS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        std::fs::write(&path, "[display\nprecision = ").unwrap();

        let err = CalcConfig::load_with_env(Some(path), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CalcConfig::default()).unwrap();
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("[session]"));
        assert!(toml_str.contains("number_format = \"general\""));
    }
}
