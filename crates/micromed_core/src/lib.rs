//! Core logic for the Micro Meditation app.
//! This crate is the single source of truth for business invariants; UI
//! shells render the view models it produces.

pub mod app;
pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod observable;
pub mod repo;
pub mod service;

pub use app::screen::{CalendarEntry, Screen};
pub use app::shell::AppShell;
pub use config::{ConfigError, CoreConfig};
pub use content::calendar::{CalendarMonth, CALENDAR_DAYS};
pub use content::phrases::{day_of_month, phrase_for, FALLBACK_PHRASE, MOTIVATIONAL_PHRASES};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::route::{Route, RouteTemplate, DATE_PARAM, TOPIC_PARAM, UNKNOWN_TOPIC};
pub use model::settings::{AppSettings, ThemeMode};
pub use model::timer::{format_time, TimerPhase, TimerState, DEFAULT_SESSION_SECONDS};
pub use model::topic::MeditationTopic;
pub use navigation::router::{extract_param, Router};
pub use observable::{Observable, Subscription};
pub use repo::note_repo::{InMemoryNoteRepository, NoteKey, NoteRepository};
pub use service::meditation_session::{MeditationSession, SessionError};
pub use service::note_service::NoteService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
