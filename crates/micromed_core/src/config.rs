//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold tunables for session length, tick cadence and calendar month.
//! - Load them from JSON with per-field defaults.
//!
//! # Invariants
//! - `CoreConfig::default()` reproduces the shipped behavior: 180 s sessions,
//!   1 s ticks, July 2025 calendar.
//! - Loaded configs are validated before use.

use crate::content::calendar::CalendarMonth;
use crate::model::timer::DEFAULT_SESSION_SECONDS;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config text is not valid JSON for `CoreConfig`.
    Parse(serde_json::Error),
    /// Values parsed but violate an invariant.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Tunables for the app core. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Countdown length of a fresh meditation session.
    pub session_seconds: u32,
    /// Delay between two ticks of a running session.
    pub tick_interval_ms: u64,
    /// Year of the calendar screen month.
    pub calendar_year: i32,
    /// 1-based month of the calendar screen.
    pub calendar_month: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        let month = CalendarMonth::default();
        Self {
            session_seconds: DEFAULT_SESSION_SECONDS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            calendar_year: month.year,
            calendar_month: month.month,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(raw.as_str())?;
        info!(
            "event=config_load module=config status=ok session_seconds={} tick_interval_ms={} calendar={}-{:02}",
            config.session_seconds,
            config.tick_interval_ms,
            config.calendar_year,
            config.calendar_month
        );
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// - `session_seconds` or `tick_interval_ms` is zero.
    /// - `calendar_month` is outside `1..=12`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_seconds == 0 {
            return Err(ConfigError::Invalid(
                "session_seconds must be greater than zero".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if !(1..=12).contains(&self.calendar_month) {
            return Err(ConfigError::Invalid(format!(
                "calendar_month must be within 1..=12, got {}",
                self.calendar_month
            )));
        }
        Ok(())
    }

    /// Countdown length of a fresh session; zero falls back to 180 s.
    pub fn session_length(&self) -> u32 {
        if self.session_seconds == 0 {
            DEFAULT_SESSION_SECONDS
        } else {
            self.session_seconds
        }
    }

    /// Tick period of a running session; zero falls back to 1 s.
    pub fn tick_interval(&self) -> Duration {
        let millis = if self.tick_interval_ms == 0 {
            DEFAULT_TICK_INTERVAL_MS
        } else {
            self.tick_interval_ms
        };
        Duration::from_millis(millis)
    }

    pub fn calendar_month(&self) -> CalendarMonth {
        CalendarMonth::new(self.calendar_year, self.calendar_month)
    }
}
