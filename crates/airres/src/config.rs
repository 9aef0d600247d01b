//! Configuration management for airres.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::directory::FlightDirectory;
use crate::error::{Error, Result};
use crate::registry::{DuplicatePolicy, DEFAULT_CAPACITY};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "airres";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "AIRRES_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AIRRES_`, sections split on `__`,
///    e.g. `AIRRES_REGISTRY__CAPACITY=3`)
/// 2. TOML config file at `~/.config/airres/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry configuration.
    pub registry: RegistryConfig,
    /// Interactive session configuration.
    pub session: SessionConfig,
}

/// Registry-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Seats per flight.
    pub capacity: usize,
    /// Refuse a second reservation for a passenger already on the flight.
    pub reject_duplicates: bool,
}

/// Session-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Regex that entered flight numbers must match (after normalization).
    /// Unset accepts anything.
    pub flight_number_pattern: Option<String>,
    /// Print the welcome banner when the menu starts.
    pub show_banner: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            reject_duplicates: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            flight_number_pattern: None,
            show_banner: true,
        }
    }
}

impl RegistryConfig {
    /// The duplicate policy selected by `reject_duplicates`.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.registry.capacity == 0 {
            return Err(Error::config_validation(
                "registry.capacity must be greater than 0",
            ));
        }

        self.flight_number_regex()?;
        Ok(())
    }

    /// Compile the configured flight number pattern, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn flight_number_regex(&self) -> Result<Option<Regex>> {
        self.session
            .flight_number_pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|_| {
                    Error::config_validation(format!("invalid regex pattern: {pattern}"))
                })
            })
            .transpose()
    }

    /// Render the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build an empty flight directory with the configured registry settings.
    #[must_use]
    pub fn directory(&self) -> FlightDirectory {
        FlightDirectory::new(self.registry.capacity)
            .with_duplicate_policy(self.registry.duplicate_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.registry.capacity, 370);
        assert!(!config.registry.reject_duplicates);
        assert!(config.session.flight_number_pattern.is_none());
        assert!(config.session.show_banner);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_capacity() {
        let mut config = Config::default();
        config.registry.capacity = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("registry.capacity"));
    }

    #[test]
    fn test_validate_invalid_regex() {
        let mut config = Config::default();
        config.session.flight_number_pattern = Some("[invalid".to_string());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("invalid regex"));
    }

    #[test]
    fn test_flight_number_regex() {
        let mut config = Config::default();
        assert!(config.flight_number_regex().unwrap().is_none());

        config.session.flight_number_pattern = Some(r"^[A-Z]{2}\d{1,4}$".to_string());
        let re = config.flight_number_regex().unwrap().unwrap();
        assert!(re.is_match("AA100"));
        assert!(!re.is_match("100AA"));
    }

    #[test]
    fn test_duplicate_policy() {
        let mut registry = RegistryConfig::default();
        assert_eq!(registry.duplicate_policy(), DuplicatePolicy::Allow);
        registry.reject_duplicates = true;
        assert_eq!(registry.duplicate_policy(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_directory_uses_registry_settings() {
        let mut config = Config::default();
        config.registry.capacity = 2;
        config.registry.reject_duplicates = true;

        let mut directory = config.directory();
        assert_eq!(directory.capacity(), 2);
        let registry = directory.find_or_create("AA1");
        assert_eq!(registry.capacity(), 2);
        assert_eq!(registry.duplicate_policy(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("airres"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "airres.toml",
                r#"
                [registry]
                capacity = 3
                reject_duplicates = true

                [session]
                flight_number_pattern = "^[A-Z]{2}[0-9]+$"
                show_banner = false
                "#,
            )?;

            let config = Config::load_from(Some(PathBuf::from("airres.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.registry.capacity, 3);
            assert!(config.registry.reject_duplicates);
            assert_eq!(
                config.session.flight_number_pattern.as_deref(),
                Some("^[A-Z]{2}[0-9]+$")
            );
            assert!(!config.session.show_banner);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("airres.toml", "[registry]\ncapacity = 3\n")?;
            jail.set_env("AIRRES_REGISTRY__CAPACITY", "7");

            let config = Config::load_from(Some(PathBuf::from("airres.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.registry.capacity, 7);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.create_file("airres.toml", "[registry]\ncapacity = 0\n")?;

            let result = Config::load_from(Some(PathBuf::from("airres.toml")));
            assert!(matches!(result, Err(Error::ConfigValidation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        Jail::expect_with(|jail| {
            jail.create_file("airres.toml", "[registry]\ncapacity = \"many\"\n")?;

            let result = Config::load_from(Some(PathBuf::from("airres.toml")));
            assert!(matches!(result, Err(Error::ConfigLoad(_))));
            Ok(())
        });
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("capacity"));
        assert!(json.contains("show_banner"));
    }

    #[test]
    fn test_to_json() {
        let mut config = Config::default();
        config.registry.capacity = 3;
        config.session.flight_number_pattern = Some("^AA".to_string());

        let json = config.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["registry"]["capacity"], 3);
        assert_eq!(value["registry"]["reject_duplicates"], false);
        assert_eq!(value["session"]["flight_number_pattern"], "^AA");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_registry_config_deserialize() {
        let json = r#"{"capacity": 12}"#;
        let registry: RegistryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(registry.capacity, 12);
        assert!(!registry.reject_duplicates);
    }
}
