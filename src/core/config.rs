// src/core/config.rs
use std::env;
use log::LevelFilter;

// Defaults applied when a command line flag is not given
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: i32,
    pub default_avoid_ambiguous: bool,
    pub default_force_every_class: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 8,
            default_avoid_ambiguous: false,
            default_force_every_class: false,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables.
    // Returns the warnings for ignored values so they can be logged once a logger exists.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build a configuration from any key lookup, starting from the defaults
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_AVOID_AMBIGUOUS") {
            match val.trim().parse() {
                Ok(avoid) => config.default_avoid_ambiguous = avoid,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_AVOID_AMBIGUOUS '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_FORCE_EVERY_CLASS") {
            match val.trim().parse() {
                Ok(force) => config.default_force_every_class = force,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_FORCE_EVERY_CLASS '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', keeping {}", level, config.log_level)),
            }
        }

        (config, warnings)
    }
}
