//! Configuration management for the VCF cleaner.
//!
//! Settings come from environment variables (optionally via a `.env` file);
//! the binary then applies its command-line overrides on top.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for a cleaning run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// vCard version written on every record (default: 3.0)
    pub vcard_version: f64,

    /// Emit unrecognized property lines verbatim (default: false)
    pub include_other_info: bool,

    /// Keep declared phone types instead of collapsing them to CELL (default: false)
    pub preserve_phone_type: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `VCF_VERSION`: vCard version to write (default: 3.0)
    /// - `VCF_INCLUDE_OTHER_INFO`: keep passthrough lines (default: false)
    /// - `VCF_PRESERVE_PHONE_TYPE`: keep phone types (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let vcard_version = Self::parse_env_f64("VCF_VERSION", defaults.vcard_version)?;
        Self::validate_version("VCF_VERSION", vcard_version)?;

        let include_other_info =
            Self::parse_env_bool("VCF_INCLUDE_OTHER_INFO", defaults.include_other_info)?;
        let preserve_phone_type =
            Self::parse_env_bool("VCF_PRESERVE_PHONE_TYPE", defaults.preserve_phone_type)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            vcard_version,
            include_other_info,
            preserve_phone_type,
            log_level,
        })
    }

    /// Whether `version` is finite and positive, i.e. writable as `VERSION:<n.n>`.
    pub fn is_valid_version(version: f64) -> bool {
        version.is_finite() && version > 0.0
    }

    /// Check that a version can be written as a positive decimal.
    pub fn validate_version(var_name: &str, version: f64) -> ConfigResult<()> {
        if Self::is_valid_version(version) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", version),
            })
        }
    }

    /// Parse an environment variable as f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, case-insensitively.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a boolean, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vcard_version: 3.0,
            include_other_info: false,
            preserve_phone_type: false,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "VCF_VERSION",
        "VCF_INCLUDE_OTHER_INFO",
        "VCF_PRESERVE_PHONE_TYPE",
        "LOG_LEVEL",
    ];

    // Sets vars for one test and clears them (and any leftovers) on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_is_valid_version() {
        assert!(Config::is_valid_version(3.0));
        assert!(Config::is_valid_version(2.1));
        assert!(!Config::is_valid_version(0.0));
        assert!(!Config::is_valid_version(-4.0));
        assert!(!Config::is_valid_version(f64::NAN));
        assert!(!Config::is_valid_version(f64::INFINITY));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.vcard_version, 3.0);
        assert!(!config.include_other_info);
        assert!(!config.preserve_phone_type);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("VCF_VERSION", "4.0");
        guard.set("VCF_INCLUDE_OTHER_INFO", "yes");
        guard.set("VCF_PRESERVE_PHONE_TYPE", "TRUE");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.vcard_version, 4.0);
        assert!(config.include_other_info);
        assert!(config.preserve_phone_type);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_version() {
        let mut guard = EnvGuard::new();
        guard.set("VCF_VERSION", "three");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "VCF_VERSION"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_negative_version() {
        let mut guard = EnvGuard::new();
        guard.set("VCF_VERSION", "-1");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_OFF", "off");
        guard.set("TEST_BOOL_BAD", "maybe");

        assert!(!Config::parse_env_bool("TEST_BOOL_OFF", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
        assert!(Config::parse_env_bool("TEST_BOOL_BAD", false).is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_f64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_F64", " 2.1 ");

        assert_eq!(Config::parse_env_f64("TEST_F64", 3.0).unwrap(), 2.1);
        assert_eq!(Config::parse_env_f64("NONEXISTENT_F64", 3.0).unwrap(), 3.0);
    }
}
