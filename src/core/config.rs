// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::models::{clamp_length, GenerationConfig};

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_digits: bool,
    pub default_include_symbols: bool,
    pub default_exclude_similar: bool,

    // History
    pub history_limit: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_to_file: bool,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_digits: true,
            default_include_symbols: false,
            default_exclude_similar: false,

            // History
            history_limit: 50,

            // Logging
            log_level: LevelFilter::Info,
            log_to_file: true,
            log_file: PathBuf::from("logs/qenqey.log"),
        }
    }
}

// Values from the environment that were ignored or adjusted while loading
pub type ConfigWarnings = Vec<String>;

// Parse a variable, keeping the current value when it is unset or invalid
fn override_from<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
    warnings: &mut ConfigWarnings,
) {
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", val, key)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The logger is not running yet at this point, so anything worth
    /// reporting is returned for the caller to log once it is.
    pub fn load() -> (Self, ConfigWarnings) {
        Self::load_from(|key| env::var(key).ok())
    }

    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> (Self, ConfigWarnings) {
        let mut config = Config::default();
        let mut warnings = ConfigWarnings::new();

        // Password Generation
        override_from(&lookup, "QENQEY_DEFAULT_LENGTH", &mut config.default_password_length, &mut warnings);
        override_from(&lookup, "QENQEY_UPPERCASE", &mut config.default_include_uppercase, &mut warnings);
        override_from(&lookup, "QENQEY_LOWERCASE", &mut config.default_include_lowercase, &mut warnings);
        override_from(&lookup, "QENQEY_DIGITS", &mut config.default_include_digits, &mut warnings);
        override_from(&lookup, "QENQEY_SYMBOLS", &mut config.default_include_symbols, &mut warnings);
        override_from(&lookup, "QENQEY_EXCLUDE_SIMILAR", &mut config.default_exclude_similar, &mut warnings);

        let clamped = clamp_length(config.default_password_length);
        if clamped != config.default_password_length {
            warnings.push(format!(
                "Default password length {} out of range, using {}",
                config.default_password_length, clamped
            ));
            config.default_password_length = clamped;
        }

        // History
        override_from(&lookup, "QENQEY_HISTORY_LIMIT", &mut config.history_limit, &mut warnings);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        override_from(&lookup, "LOG_TO_FILE", &mut config.log_to_file, &mut warnings);

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        (config, warnings)
    }

    /// Generation settings the front end starts from.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: clamp_length(self.default_password_length),
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_digits: self.default_include_digits,
            include_symbols: self.default_include_symbols,
            exclude_similar: self.default_exclude_similar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_generation_config() {
        let config = Config::default();
        assert_eq!(config.generation_config(), GenerationConfig::default());
    }

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_load_from_applies_valid_values() {
        let (config, warnings) = Config::load_from(lookup_in(&[
            ("QENQEY_DEFAULT_LENGTH", "42"),
            ("QENQEY_SYMBOLS", "true"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert!(warnings.is_empty());
        assert_eq!(config.default_password_length, 42);
        assert!(config.default_include_symbols);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_are_ignored_and_reported() {
        let (config, warnings) = Config::load_from(lookup_in(&[
            ("QENQEY_DEFAULT_LENGTH", "many"),
            ("QENQEY_DIGITS", "perhaps"),
            ("LOG_LEVEL", "loud"),
        ]));

        assert_eq!(config.default_password_length, 16);
        assert!(config.default_include_digits);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            warnings,
            vec![
                "Ignoring invalid value 'many' for QENQEY_DEFAULT_LENGTH".to_string(),
                "Ignoring invalid value 'perhaps' for QENQEY_DIGITS".to_string(),
                "Unknown log level 'loud', using INFO".to_string(),
            ]
        );
    }

    #[test]
    fn test_out_of_range_length_is_clamped_and_reported() {
        let (config, warnings) = Config::load_from(lookup_in(&[("QENQEY_DEFAULT_LENGTH", "2")]));

        assert_eq!(config.default_password_length, 4);
        assert_eq!(warnings, vec!["Default password length 2 out of range, using 4".to_string()]);
    }

    #[test]
    fn test_generation_config_clamps_length() {
        let config = Config {
            default_password_length: 1000,
            ..Config::default()
        };
        assert_eq!(config.generation_config().length, 128);
    }
}
