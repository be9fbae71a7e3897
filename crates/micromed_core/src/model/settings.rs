//! User-facing app settings.
//!
//! # Invariants
//! - Defaults are light theme with notifications enabled.
//! - `notifications_enabled` is stored only; no reminder is ever scheduled.

use serde::{Deserialize, Serialize};

/// Theme selection forwarded to the hosting UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Settings screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: ThemeMode,
    /// Daily reminder toggle. Reminders are not implemented.
    pub notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            notifications_enabled: true,
        }
    }
}
