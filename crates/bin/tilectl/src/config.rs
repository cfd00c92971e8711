//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tilehub.toml` in the working directory. Timing and logging
//! fields have defaults; hub credentials do not and must come from the file
//! or the environment. Environment variables take precedence over file values.

use serde::Deserialize;
use tilehub_domain::hub::HubConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hub connection values.
    pub hub: HubConfig,
    /// Toggle behavior settings.
    pub toggle: ToggleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Toggle behavior configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// How long tiles keep the busy style before reverting, in milliseconds.
    pub busy_revert_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `tilehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tilehub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TILEHUB_IP_ADDRESS") {
            self.hub.ip_address = val;
        }
        if let Ok(val) = std::env::var("TILEHUB_APP_ID") {
            self.hub.app_id = val;
        }
        if let Ok(val) = std::env::var("TILEHUB_ACCESS_TOKEN") {
            self.hub.access_token = val;
        }
        if let Ok(val) = std::env::var("TILEHUB_BUSY_REVERT_MS") {
            if let Ok(ms) = val.parse() {
                self.toggle.busy_revert_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("TILEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hub.ip_address.is_empty() {
            return Err(ConfigError::Validation(
                "hub.ip_address must be set".to_string(),
            ));
        }
        if self.hub.app_id.is_empty() {
            return Err(ConfigError::Validation(
                "hub.app_id must be set".to_string(),
            ));
        }
        if self.hub.access_token.is_empty() {
            return Err(ConfigError::Validation(
                "hub.access_token must be set".to_string(),
            ));
        }
        if self.toggle.busy_revert_ms == 0 {
            return Err(ConfigError::Validation(
                "toggle.busy_revert_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            busy_revert_ms: 400,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tilectl=info,tilehub=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.toggle.busy_revert_ms, 400);
        assert_eq!(config.logging.filter, "tilectl=info,tilehub=info");
        assert!(config.hub.ip_address.is_empty());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [hub]
            ip_address = '10.0.0.5'
            app_id = '42'
            access_token = 'abc123'

            [toggle]
            busy_revert_ms = 250

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.hub.ip_address, "10.0.0.5");
        assert_eq!(config.hub.app_id, "42");
        assert_eq!(config.hub.access_token, "abc123");
        assert_eq!(config.toggle.busy_revert_ms, 250);
        assert_eq!(config.logging.filter, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [hub]
            ip_address = '10.0.0.5'
            app_id = '42'
            access_token = 'abc123'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.toggle.busy_revert_ms, 400);
        assert_eq!(config.logging.filter, "tilectl=info,tilehub=info");
    }

    #[test]
    fn should_parse_partial_hub_table_with_defaults() {
        // Only the address in the file; the credentials are expected to
        // arrive via env overrides, so parsing must not require them.
        let toml = "
            [hub]
            ip_address = '10.0.0.5'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.hub.ip_address, "10.0.0.5");
        assert!(config.hub.app_id.is_empty());
        assert!(config.hub.access_token.is_empty());
        // Still rejected at validation time when nothing fills them in.
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.toggle.busy_revert_ms, 400);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_missing_hub_credentials() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_zero_busy_revert() {
        let mut config: Config = toml::from_str(
            "
            [hub]
            ip_address = '10.0.0.5'
            app_id = '42'
            access_token = 'abc123'
        ",
        )
        .unwrap();
        config.toggle.busy_revert_ms = 0;
        assert!(config.validate().is_err());
    }
}
