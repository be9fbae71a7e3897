//! App shell: the logic behind the screen host.
//!
//! # Responsibility
//! - Route navigation requests and re-bind screen-scoped state.
//! - Own the active meditation session and the settings.
//! - Share one note service with every note screen.
//!
//! # Invariants
//! - A meditation session exists only while a meditation route is on top.
//! - Every entry onto a meditation route starts a fresh 180 s stopped
//!   session; the previous one is dropped (and its tick task cancelled).
//! - Entering a note route loads that date into the note service.
//! - Screen actions on the wrong screen are no-ops.

use crate::app::screen::{CalendarEntry, Screen};
use crate::config::CoreConfig;
use crate::content::phrases::{phrase_for, HOME_PHRASE};
use crate::model::route::{Route, RouteTemplate};
use crate::model::settings::{AppSettings, ThemeMode};
use crate::model::timer::TimerState;
use crate::model::topic::topic_labels;
use crate::navigation::router::Router;
use crate::observable::{Observable, Subscription};
use crate::repo::note_repo::NoteRepository;
use crate::service::meditation_session::MeditationSession;
use crate::service::note_service::NoteService;
use log::info;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Screen host state for one running app.
pub struct AppShell<R: NoteRepository> {
    config: CoreConfig,
    router: Router,
    notes: Arc<NoteService<R>>,
    settings: Observable<AppSettings>,
    session: Option<MeditationSession>,
    runtime: Handle,
}

impl<R: NoteRepository> AppShell<R> {
    /// Creates a shell positioned on `home`.
    ///
    /// `runtime` drives the tick tasks of meditation sessions.
    pub fn new(notes: Arc<NoteService<R>>, config: CoreConfig, runtime: Handle) -> Self {
        info!(
            "event=shell_start module=app status=ok session_seconds={} tick_interval_ms={} calendar={}",
            config.session_length(),
            config.tick_interval().as_millis(),
            config.calendar_month().date_key(1)
        );
        Self {
            config,
            router: Router::default(),
            notes,
            settings: Observable::new(AppSettings::default()),
            session: None,
            runtime,
        }
    }

    /// Pushes a route and returns the screen it shows.
    pub fn navigate(&mut self, route_name: &str, param: Option<&str>) -> Screen {
        self.router.navigate(route_name, param);
        self.bind_current_route();
        self.screen()
    }

    /// Pops one route and returns the screen now on top.
    ///
    /// On the root this is a no-op and screen-scoped state is kept.
    pub fn go_back(&mut self) -> Screen {
        if self.router.go_back() {
            self.bind_current_route();
        }
        self.screen()
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Builds the view model of the current route.
    pub fn screen(&self) -> Screen {
        let route = self.router.current();
        match route.template() {
            Some(RouteTemplate::Home) => Screen::Home {
                phrase: HOME_PHRASE.to_string(),
            },
            Some(RouteTemplate::Settings) => Screen::Settings {
                settings: self.settings.get(),
            },
            Some(RouteTemplate::Topics) => Screen::Topics {
                topics: topic_labels(),
            },
            Some(RouteTemplate::Meditation) => {
                let timer = self
                    .meditation_state()
                    .unwrap_or_else(|| TimerState::stopped(self.config.session_length()));
                Screen::Meditation {
                    topic: route.topic(),
                    remaining_seconds: timer.remaining_seconds,
                    running: timer.running,
                    display: timer.display(),
                }
            }
            Some(RouteTemplate::Calendar) => Screen::Calendar {
                entries: self.calendar_entries(),
            },
            Some(RouteTemplate::Note) => {
                let date = route.date();
                Screen::Note {
                    phrase: phrase_for(date.as_str()).to_string(),
                    text: self.notes.text_for(date.as_str()),
                    date,
                }
            }
            None => Screen::Unknown {
                path: route.path().to_string(),
            },
        }
    }

    /// Starts or stops the countdown of the active meditation screen.
    ///
    /// Returns `None` when no meditation screen is on top.
    pub fn toggle_meditation(&mut self) -> Option<TimerState> {
        self.session.as_mut().map(MeditationSession::toggle)
    }

    pub fn meditation_state(&self) -> Option<TimerState> {
        self.session.as_ref().map(MeditationSession::state)
    }

    pub fn meditation_session(&self) -> Option<&MeditationSession> {
        self.session.as_ref()
    }

    /// Subscribes to the active session's timer snapshots.
    pub fn subscribe_meditation(&self) -> Option<Subscription<TimerState>> {
        self.session.as_ref().map(MeditationSession::subscribe)
    }

    /// Saves `text` for the date of the note screen on top.
    ///
    /// Returns `false` (and saves nothing) on any other screen.
    pub fn save_note(&self, text: impl Into<String>) -> bool {
        let route = self.router.current();
        if route.template() != Some(RouteTemplate::Note) {
            return false;
        }
        self.notes.save(route.date().as_str(), text);
        true
    }

    /// Shared note service handle.
    pub fn notes(&self) -> &Arc<NoteService<R>> {
        &self.notes
    }

    pub fn settings(&self) -> AppSettings {
        self.settings.get()
    }

    pub fn subscribe_settings(&self) -> Subscription<AppSettings> {
        self.settings.subscribe()
    }

    pub fn set_theme(&self, theme: ThemeMode) {
        self.settings.update(|settings| settings.theme = theme);
        info!(
            "event=settings_update module=settings status=ok theme={:?}",
            theme
        );
    }

    /// Stores the reminder toggle. No reminder is scheduled.
    pub fn set_notifications_enabled(&self, enabled: bool) {
        self.settings
            .update(|settings| settings.notifications_enabled = enabled);
        info!(
            "event=settings_update module=settings status=ok notifications_enabled={}",
            enabled
        );
    }

    fn calendar_entries(&self) -> Vec<CalendarEntry> {
        let saved = self.notes.note_dates().into_iter().collect::<BTreeSet<_>>();
        self.config
            .calendar_month()
            .dates()
            .into_iter()
            .map(|date| CalendarEntry {
                has_note: saved.contains(&date),
                date,
            })
            .collect()
    }

    fn bind_current_route(&mut self) {
        // Drop first so the old tick task is cancelled before a new one exists.
        self.session = None;

        let route = self.router.current().clone();
        match route.template() {
            Some(RouteTemplate::Meditation) => {
                self.session = Some(MeditationSession::new(
                    route.topic(),
                    &self.config,
                    self.runtime.clone(),
                ));
            }
            Some(RouteTemplate::Note) => {
                self.notes.load(route.date().as_str());
            }
            _ => {}
        }
    }
}
