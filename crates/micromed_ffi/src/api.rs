//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen-level functions to Dart via FRB.
//! - Own the process-wide app shell and the runtime that drives timers.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every navigation or screen action returns the screen now on top.

use log::warn;
use micromed_core::{
    core_version as core_version_inner, format_time, init_logging as init_logging_inner,
    phrase_for, ping as ping_inner, AppShell, CoreConfig, InMemoryNoteRepository, NoteService,
    Screen, ThemeMode,
};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::runtime::{Builder, Runtime};

const CONFIG_PATH_ENV: &str = "MICROMED_CONFIG_PATH";
static TIMER_RUNTIME: OnceLock<Runtime> = OnceLock::new();
static APP_SHELL: OnceLock<Mutex<AppShell<InMemoryNoteRepository>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Flattened screen snapshot returned by every screen-level call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Screen name (`home|settings|topics|meditation|calendar|note|unknown`).
    pub screen: String,
    /// Concrete route path on top of the stack.
    pub route: String,
    /// Meditation topic or note date, empty elsewhere.
    pub param: String,
    /// Note text or home/note motivational phrase, empty elsewhere.
    pub text: String,
    pub phrase: String,
    /// `MM:SS` countdown on the meditation screen.
    pub countdown: String,
    pub running: bool,
    /// Topic labels or calendar dates.
    pub items: Vec<String>,
    /// Calendar dates that have a saved note.
    pub marked_items: Vec<String>,
    pub dark_theme: bool,
    pub notifications_enabled: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ScreenResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Pushes a route; `param` is appended as `route/param` when set.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_navigate(route: String, param: Option<String>) -> ScreenResponse {
    with_shell(|shell| {
        shell.navigate(route.trim(), param.as_deref());
        "Navigated."
    })
}

/// Pops one route; no-op on `home`.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_go_back() -> ScreenResponse {
    with_shell(|shell| {
        shell.go_back();
        "Back."
    })
}

/// Returns the current screen without changing anything.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_current() -> ScreenResponse {
    with_shell(|_| "Current screen.")
}

/// Starts or stops the countdown on the meditation screen.
///
/// # FFI contract
/// - Returns `ok=false` when the meditation screen is not on top.
#[flutter_rust_bridge::frb(sync)]
pub fn meditation_toggle() -> ScreenResponse {
    let response = with_shell(|shell| match shell.toggle_meditation() {
        Some(state) if state.running => "Meditation started.",
        Some(_) => "Meditation stopped.",
        None => "",
    });
    if response.ok && response.message.is_empty() {
        return ScreenResponse {
            ok: false,
            message: "meditation_toggle failed: meditation screen is not active".to_string(),
            ..response
        };
    }
    response
}

/// Saves note text for the note screen on top.
///
/// # FFI contract
/// - Returns `ok=false` when the note screen is not on top.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(text: String) -> ScreenResponse {
    let response = with_shell(|shell| if shell.save_note(text) { "Note saved." } else { "" });
    if response.ok && response.message.is_empty() {
        return ScreenResponse {
            ok: false,
            message: "note_save failed: note screen is not active".to_string(),
            ..response
        };
    }
    response
}

/// Loads note text for `date`; empty when none was saved.
#[flutter_rust_bridge::frb(sync)]
pub fn note_load(date: String) -> String {
    match app_shell() {
        Ok(shell) => lock_shell(shell).notes().load(date.trim()),
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=note_load reason={err}");
            String::new()
        }
    }
}

/// Motivational phrase for the day encoded in `date`.
#[flutter_rust_bridge::frb(sync)]
pub fn phrase_for_date(date: String) -> String {
    phrase_for(date.as_str()).to_owned()
}

/// Formats seconds as `MM:SS`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_countdown(seconds: u32) -> String {
    format_time(seconds)
}

/// Stores the dark-theme toggle.
#[flutter_rust_bridge::frb(sync)]
pub fn settings_set_dark_theme(enabled: bool) -> ScreenResponse {
    with_shell(|shell| {
        shell.set_theme(ThemeMode::from_dark_flag(enabled));
        "Theme updated."
    })
}

/// Stores the daily-reminder toggle. Reminders are not scheduled.
#[flutter_rust_bridge::frb(sync)]
pub fn settings_set_notifications(enabled: bool) -> ScreenResponse {
    with_shell(|shell| {
        shell.set_notifications_enabled(enabled);
        "Notifications preference updated."
    })
}

fn with_shell(
    f: impl FnOnce(&mut AppShell<InMemoryNoteRepository>) -> &'static str,
) -> ScreenResponse {
    let shell = match app_shell() {
        Ok(shell) => shell,
        Err(err) => return ScreenResponse::failure(err),
    };
    let mut shell = lock_shell(shell);
    let message = f(&mut shell);
    to_screen_response(&shell, message)
}

fn lock_shell(
    shell: &Mutex<AppShell<InMemoryNoteRepository>>,
) -> MutexGuard<'_, AppShell<InMemoryNoteRepository>> {
    shell.lock().unwrap_or_else(PoisonError::into_inner)
}

fn app_shell() -> Result<&'static Mutex<AppShell<InMemoryNoteRepository>>, String> {
    if let Some(shell) = APP_SHELL.get() {
        return Ok(shell);
    }
    let runtime = timer_runtime()?;
    let shell = APP_SHELL.get_or_init(|| {
        let notes = Arc::new(NoteService::new(InMemoryNoteRepository::new()));
        Mutex::new(AppShell::new(notes, resolve_config(), runtime.handle().clone()))
    });
    Ok(shell)
}

fn timer_runtime() -> Result<&'static Runtime, String> {
    if let Some(runtime) = TIMER_RUNTIME.get() {
        return Ok(runtime);
    }
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("micromed-timer")
        .enable_time()
        .build()
        .map_err(|err| format!("timer runtime start failed: {err}"))?;
    // A racing caller may have installed its runtime first; keep that one.
    Ok(TIMER_RUNTIME.get_or_init(|| runtime))
}

fn resolve_config() -> CoreConfig {
    let Ok(raw) = std::env::var(CONFIG_PATH_ENV) else {
        return CoreConfig::default();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CoreConfig::default();
    }
    CoreConfig::from_file(trimmed).unwrap_or_else(|err| {
        warn!("event=config_load module=ffi status=error fallback=default reason={err}");
        CoreConfig::default()
    })
}

fn to_screen_response(
    shell: &AppShell<InMemoryNoteRepository>,
    message: &str,
) -> ScreenResponse {
    let settings = shell.settings();
    let mut response = ScreenResponse {
        ok: true,
        route: shell.current_route().path().to_string(),
        dark_theme: settings.theme.is_dark(),
        notifications_enabled: settings.notifications_enabled,
        message: message.to_string(),
        ..ScreenResponse::default()
    };

    let screen = shell.screen();
    response.screen = screen.name().to_string();
    match screen {
        Screen::Home { phrase } => response.phrase = phrase,
        Screen::Settings { .. } | Screen::Unknown { .. } => {}
        Screen::Topics { topics } => response.items = topics,
        Screen::Meditation {
            topic,
            running,
            display,
            ..
        } => {
            response.param = topic;
            response.running = running;
            response.countdown = display;
        }
        Screen::Calendar { entries } => {
            response.marked_items = entries
                .iter()
                .filter(|entry| entry.has_note)
                .map(|entry| entry.date.clone())
                .collect();
            response.items = entries.into_iter().map(|entry| entry.date).collect();
        }
        Screen::Note { date, text, phrase } => {
            response.param = date;
            response.text = text;
            response.phrase = phrase;
        }
    }
    response
}
