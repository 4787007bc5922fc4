//! Application configuration loading from config.toml
//!
//! Every key is optional. A missing file yields the built-in defaults so the
//! bot runs out of the box in demo mode.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Who a signed-in user is when no per-user mapping exists
    pub identity: IdentityConfig,
    /// Mock login settings
    pub login: LoginConfig,
    /// AI insight endpoint settings
    pub insight: InsightConfig,
}

/// `[identity]` table
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    /// Customer name used to filter bookings after login
    pub customer_name: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            customer_name: crate::core::store::DEMO_CUSTOMER.to_string(),
        }
    }
}

/// `[login]` table
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoginConfig {
    /// The only accepted one-time code
    pub demo_otp: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            demo_otp: "1234".to_string(),
        }
    }
}

/// `[insight]` table
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InsightConfig {
    /// Gemini model name
    pub model: String,
    /// Base URL of the Generative Language API
    pub api_url: String,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

/// Loads application configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    debug!("Loading configuration from {:?}", path.as_ref());
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] when the TOML is invalid.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from the default location (./config.toml), falling
/// back to defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<AppConfig> {
    if !Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
        return Ok(AppConfig::default());
    }
    load_config(DEFAULT_CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [identity]
            customer_name = "TechStart Inc"

            [login]
            demo_otp = "4321"

            [insight]
            model = "gemini-2.5-flash"
            api_url = "http://localhost:8080"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.identity.customer_name, "TechStart Inc");
        assert_eq!(config.login.demo_otp, "4321");
        assert_eq!(config.insight.model, "gemini-2.5-flash");
        assert_eq!(config.insight.api_url, "http://localhost:8080");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config("[login]\ndemo_otp = \"9999\"\n").unwrap();
        assert_eq!(config.login.demo_otp, "9999");
        assert_eq!(config.identity.customer_name, "Pavan");
        assert_eq!(config.insight, InsightConfig::default());

        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_config("[login\ndemo_otp = 1");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
