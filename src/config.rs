use std::{env, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::EARLIEST_YEAR;

const EARLIEST_YEAR_VAR: &str = "JOURNAL_EARLIEST_YEAR";

/// Site-level settings for route validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// First year journal routes may address
    #[serde(default = "default_earliest_year")]
    pub earliest_year: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

const fn default_earliest_year() -> u16 {
    EARLIEST_YEAR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            earliest_year: default_earliest_year(),
        }
    }
}

impl Config {
    /// Loads settings from process environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads settings through `lookup`, falling back to defaults for unset keys.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a value is present but does not parse.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            earliest_year: try_load(&lookup, EARLIEST_YEAR_VAR, default_earliest_year())?,
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            value,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Config::default().earliest_year, 1990);
    }

    #[test]
    fn test_from_vars_unset_uses_default() {
        let config = Config::from_vars(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_vars_reads_value() {
        let config = Config::from_vars(|key| {
            (key == "JOURNAL_EARLIEST_YEAR").then(|| " 2012 ".to_owned())
        })
        .unwrap();
        assert_eq!(config.earliest_year, 2012);
    }

    #[test]
    fn test_from_vars_rejects_garbage() {
        let result = Config::from_vars(|_| Some("nineteen-ninety".to_owned()));
        match result {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, "JOURNAL_EARLIEST_YEAR");
                assert_eq!(value, "nineteen-ninety");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{ "earliest_year": 2001 }"#).unwrap();
        assert_eq!(config.earliest_year, 2001);
    }
}
