//! Demo configuration, read from the environment.
//!
//! Optional variables:
//! - `ROSTER_TODAY`: `YYYY-MM-DD`; pins the evaluation date so ages, and
//!   therefore the output, do not drift with the wall clock.
//! - `RUST_LOG`: log filter (read by `tracing-subscriber`, not here).

use chrono::NaiveDate;
use thiserror::Error;

pub const TODAY_VAR: &str = "ROSTER_TODAY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a YYYY-MM-DD date")]
    InvalidDate { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Evaluation date; `None` means the system clock.
    pub today: Option<NaiveDate>,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let today = match lookup(TODAY_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(
                |_| ConfigError::InvalidDate {
                    var: TODAY_VAR,
                    value,
                },
            )?),
            None => None,
        };
        Ok(Self { today })
    }
}
