//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{dictionary, limits};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path to the pronunciation dictionary
    pub dictionary_path: PathBuf,
    /// Load the dictionary into memory once instead of rescanning it per word
    pub preload_dictionary: bool,
    /// Longest poem line accepted, in bytes
    pub max_line_length: usize,
    /// Leave blank lines (stanza breaks) out of the rhyme scheme
    pub skip_blank_lines: bool,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            dictionary_path: PathBuf::from(dictionary::DEFAULT_PATH),
            preload_dictionary: true,
            max_line_length: limits::MAX_LINE_LENGTH,
            skip_blank_lines: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; malformed ones are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SONNET_DICTIONARY") {
            config.dictionary_path = PathBuf::from(shellexpand::tilde(&path).to_string());
        }

        if let Some(value) = lookup("SONNET_PRELOAD_DICTIONARY") {
            config.preload_dictionary = parse_flag("SONNET_PRELOAD_DICTIONARY", &value)?;
        }

        if let Some(value) = lookup("SONNET_SKIP_BLANK_LINES") {
            config.skip_blank_lines = parse_flag("SONNET_SKIP_BLANK_LINES", &value)?;
        }

        if let Some(value) = lookup("SONNET_MAX_LINE_LENGTH") {
            config.max_line_length = parse_line_length(&value)?;
        }

        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(
            format!("{name} has invalid value {value:?}"),
            "Use true or false",
        )),
    }
}

fn parse_line_length(value: &str) -> Result<usize> {
    let parsed = value.trim().parse::<usize>().map_err(|_| {
        Error::config(
            format!("SONNET_MAX_LINE_LENGTH has invalid value {value:?}"),
            "Use a positive integer number of bytes",
        )
    })?;

    if parsed < limits::MIN_LINE_LENGTH {
        return Err(Error::config(
            format!("SONNET_MAX_LINE_LENGTH must be at least {}", limits::MIN_LINE_LENGTH),
            "Raise the limit or unset the variable",
        ));
    }

    Ok(parsed)
}
