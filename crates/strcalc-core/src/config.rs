//! Calculator configuration
//!
//! Defaults reproduce the documented grammar exactly: numbers of 1000 and up
//! are ignored and `//<delimiter>\n` headers are honoured. Both knobs can be
//! set from the environment:
//!
//! ```bash
//! STRCALC_BIG_NUMBER=500 STRCALC_CUSTOM_DELIMITERS=off strcalc add "1,2"
//! ```
//!
//! # Example
//!
//! ```
//! use strcalc_core::config::CalcConfig;
//!
//! let config = CalcConfig::default().with_big_number(100);
//! assert!(config.validate().is_ok());
//! ```

use crate::{
    error::{CalcError, Result},
    types::BIG_NUMBER,
};

/// Environment variable overriding [`CalcConfig::big_number`]
pub const ENV_BIG_NUMBER: &str = "STRCALC_BIG_NUMBER";

/// Environment variable overriding [`CalcConfig::custom_delimiters`]
pub const ENV_CUSTOM_DELIMITERS: &str = "STRCALC_CUSTOM_DELIMITERS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
    /// Parsed numbers at or above this value never reach the sum
    pub big_number: i64,
    /// Recognise `//<delimiter>\n` headers
    pub custom_delimiters: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            big_number: BIG_NUMBER,
            custom_delimiters: true,
        }
    }
}

impl CalcConfig {
    /// Defaults overridden by `STRCALC_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BIG_NUMBER) {
            config.big_number = value.trim().parse().map_err(|_| {
                CalcError::Config(format!("{ENV_BIG_NUMBER} must be an integer, got '{value}'"))
            })?;
            log::info!("Big-number threshold set to {} via {ENV_BIG_NUMBER}", config.big_number);
        }

        if let Some(value) = lookup(ENV_CUSTOM_DELIMITERS) {
            config.custom_delimiters = parse_flag(ENV_CUSTOM_DELIMITERS, &value)?;
            log::info!(
                "Custom delimiter headers {} via {ENV_CUSTOM_DELIMITERS}",
                if config.custom_delimiters { "enabled" } else { "disabled" }
            );
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_big_number(mut self, big_number: i64) -> Self {
        self.big_number = big_number;
        self
    }

    pub fn with_custom_delimiters(mut self, enabled: bool) -> Self {
        self.custom_delimiters = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.big_number <= 0 {
            return Err(CalcError::Config(format!(
                "big-number threshold must be positive, got {}",
                self.big_number
            )));
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CalcError::Config(format!(
            "{name} must be a boolean flag, got '{other}'"
        ))),
    }
}
