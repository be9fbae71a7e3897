use micromed_core::{
    extract_param, AppShell, CoreConfig, InMemoryNoteRepository, NoteService, RouteTemplate,
    Screen, ThemeMode, FALLBACK_PHRASE, MOTIVATIONAL_PHRASES, TOPIC_PARAM,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

fn new_shell() -> AppShell<InMemoryNoteRepository> {
    let notes = Arc::new(NoteService::new(InMemoryNoteRepository::new()));
    AppShell::new(notes, CoreConfig::default(), Handle::current())
}

async fn sleep_ms(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

#[tokio::test(start_paused = true)]
async fn shell_starts_on_home_and_back_is_noop_at_root() {
    let mut shell = new_shell();
    assert_eq!(
        shell.screen(),
        Screen::Home {
            phrase: MOTIVATIONAL_PHRASES[0].to_string()
        }
    );

    let screen = shell.go_back();
    assert_eq!(screen.name(), "home");
    assert_eq!(shell.router().depth(), 1);
}

#[tokio::test(start_paused = true)]
async fn topic_flows_from_route_into_meditation_screen() {
    let mut shell = new_shell();
    let topics = shell.navigate("topics", None);
    assert_eq!(
        topics,
        Screen::Topics {
            topics: vec![
                "Relaxation".to_string(),
                "Energy".to_string(),
                "Focus".to_string()
            ]
        }
    );

    let screen = shell.navigate("meditation/Focus", None);
    assert_eq!(
        extract_param(shell.current_route(), TOPIC_PARAM, "Unknown"),
        "Focus"
    );
    assert_eq!(
        screen,
        Screen::Meditation {
            topic: "Focus".to_string(),
            remaining_seconds: 180,
            running: false,
            display: "03:00".to_string(),
        }
    );

    let back = shell.go_back();
    assert_eq!(back.name(), "topics");
    assert!(shell.meditation_session().is_none());
    assert_eq!(
        shell.current_route().template(),
        Some(RouteTemplate::Topics)
    );
}

#[tokio::test(start_paused = true)]
async fn missing_parameters_use_defaults() {
    let mut shell = new_shell();
    match shell.navigate("meditation", None) {
        Screen::Meditation { topic, .. } => assert_eq!(topic, "Unknown"),
        other => panic!("expected meditation screen, got {other:?}"),
    }

    match shell.navigate("note", None) {
        Screen::Note { date, text, phrase } => {
            assert_eq!(date, "");
            assert_eq!(text, "");
            assert_eq!(phrase, FALLBACK_PHRASE);
        }
        other => panic!("expected note screen, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn reentering_meditation_resets_the_countdown() {
    let mut shell = new_shell();
    shell.navigate("meditation", Some("Energy"));
    shell.toggle_meditation().expect("meditation screen is active");
    sleep_ms(5_500).await;
    assert_eq!(
        shell.meditation_state().map(|state| state.remaining_seconds),
        Some(175)
    );

    shell.go_back();
    let screen = shell.navigate("meditation", Some("Energy"));
    match screen {
        Screen::Meditation {
            remaining_seconds,
            running,
            ..
        } => {
            assert_eq!(remaining_seconds, 180);
            assert!(!running);
        }
        other => panic!("expected meditation screen, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn leaving_meditation_cancels_ticks() {
    let mut shell = new_shell();
    shell.navigate("meditation/Relaxation", None);
    let mut subscription = shell.subscribe_meditation().expect("active session");
    shell.toggle_meditation();
    sleep_ms(2_500).await;

    shell.navigate("settings", None);
    assert!(shell.toggle_meditation().is_none());
    sleep_ms(5_000).await;

    assert_eq!(subscription.current().remaining_seconds, 178);
    assert_eq!(subscription.changed().await, None);
}

#[tokio::test(start_paused = true)]
async fn date_flows_from_calendar_into_note_screen() {
    let mut shell = new_shell();
    let calendar = shell.navigate("calendar", None);
    let Screen::Calendar { entries } = calendar else {
        panic!("expected calendar screen");
    };
    assert_eq!(entries.len(), 30);
    assert!(entries.iter().all(|entry| !entry.has_note));

    let date = entries[2].date.clone();
    assert_eq!(date, "2025-07-03");
    let note = shell.navigate("note", Some(date.as_str()));
    assert_eq!(
        note,
        Screen::Note {
            date: date.clone(),
            text: String::new(),
            phrase: MOTIVATIONAL_PHRASES[2].to_string(),
        }
    );

    assert!(shell.save_note("breathe"));
    let Screen::Note { text, .. } = shell.screen() else {
        panic!("expected note screen");
    };
    assert_eq!(text, "breathe");

    let Screen::Calendar { entries } = shell.go_back() else {
        panic!("expected calendar screen");
    };
    assert!(entries[2].has_note);
    assert!(!entries[3].has_note);

    let Screen::Note { text, .. } = shell.navigate("note", Some("2025-07-04")) else {
        panic!("expected note screen");
    };
    assert_eq!(text, "");
    shell.go_back();

    let Screen::Note { text, .. } = shell.navigate("note/2025-07-03", None) else {
        panic!("expected note screen");
    };
    assert_eq!(text, "breathe");
}

#[tokio::test(start_paused = true)]
async fn screen_actions_on_other_screens_are_noops() {
    let mut shell = new_shell();
    assert!(!shell.save_note("ignored"));
    assert!(shell.toggle_meditation().is_none());
    assert!(shell.notes().note_dates().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unknown_routes_render_unknown_screen() {
    let mut shell = new_shell();
    let screen = shell.navigate("profile", Some("42"));
    assert_eq!(
        screen,
        Screen::Unknown {
            path: "profile/42".to_string()
        }
    );
    assert_eq!(shell.go_back().name(), "home");
}

#[tokio::test(start_paused = true)]
async fn settings_screen_reflects_theme_and_notification_toggles() {
    let mut shell = new_shell();
    let mut subscription = shell.subscribe_settings();
    shell.navigate("settings", None);

    shell.set_theme(ThemeMode::Dark);
    shell.set_notifications_enabled(false);
    assert!(subscription.has_changed());

    let Screen::Settings { settings } = shell.screen() else {
        panic!("expected settings screen");
    };
    assert!(settings.theme.is_dark());
    assert!(!settings.notifications_enabled);
    assert_eq!(subscription.current(), settings);
}

#[tokio::test(start_paused = true)]
async fn shells_share_one_injected_note_service() {
    let notes = Arc::new(NoteService::new(InMemoryNoteRepository::new()));
    let mut first = AppShell::new(Arc::clone(&notes), CoreConfig::default(), Handle::current());
    let mut second = AppShell::new(Arc::clone(&notes), CoreConfig::default(), Handle::current());

    first.navigate("note", Some("2025-07-10"));
    first.save_note("shared");

    let Screen::Note { text, .. } = second.navigate("note", Some("2025-07-10")) else {
        panic!("expected note screen");
    };
    assert_eq!(text, "shared");
    assert_eq!(notes.load("2025-07-10"), "shared");
}

#[tokio::test(start_paused = true)]
async fn note_screen_keeps_its_own_date_after_foreign_load() {
    let notes = Arc::new(NoteService::new(InMemoryNoteRepository::new()));
    let mut shell = AppShell::new(Arc::clone(&notes), CoreConfig::default(), Handle::current());
    notes.save("2025-07-03", "mine");
    notes.save("2025-07-04", "other day secret");

    shell.navigate("note", Some("2025-07-03"));
    assert_eq!(notes.load("2025-07-04"), "other day secret");

    let Screen::Note { date, text, .. } = shell.screen() else {
        panic!("expected note screen");
    };
    assert_eq!(date, "2025-07-03");
    assert_eq!(text, "mine");

    assert!(shell.save_note(text));
    assert_eq!(notes.text_for("2025-07-03"), "mine");
    assert_eq!(notes.text_for("2025-07-04"), "other day secret");
}
