//! View models rendered by the hosting UI shell.

use crate::model::settings::AppSettings;
use serde::Serialize;

/// One row of the calendar screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    /// `YYYY-MM-DD` note key.
    pub date: String,
    /// Whether a note was saved for this date.
    pub has_note: bool,
}

/// Snapshot of what the current route displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Home {
        phrase: String,
    },
    Settings {
        settings: AppSettings,
    },
    Topics {
        topics: Vec<String>,
    },
    Meditation {
        topic: String,
        remaining_seconds: u32,
        running: bool,
        /// `MM:SS` countdown text.
        display: String,
    },
    Calendar {
        entries: Vec<CalendarEntry>,
    },
    Note {
        date: String,
        text: String,
        phrase: String,
    },
    /// Route name outside the route table.
    Unknown {
        path: String,
    },
}

impl Screen {
    /// Stable screen name, matching the serialized `screen` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home { .. } => "home",
            Self::Settings { .. } => "settings",
            Self::Topics { .. } => "topics",
            Self::Meditation { .. } => "meditation",
            Self::Calendar { .. } => "calendar",
            Self::Note { .. } => "note",
            Self::Unknown { .. } => "unknown",
        }
    }
}
