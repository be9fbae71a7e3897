use micromed_core::{CoreConfig, MeditationSession, SessionError, TimerState};
use std::time::Duration;
use tokio::runtime::Handle;

fn config_with_seconds(session_seconds: u32) -> CoreConfig {
    CoreConfig {
        session_seconds,
        ..CoreConfig::default()
    }
}

fn new_session(session_seconds: u32) -> MeditationSession {
    MeditationSession::new(
        "Focus",
        &config_with_seconds(session_seconds),
        Handle::current(),
    )
}

async fn sleep_ms(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

#[tokio::test(start_paused = true)]
async fn fresh_session_is_stopped_at_default_length() {
    let session = MeditationSession::new("Relaxation", &CoreConfig::default(), Handle::current());
    assert_eq!(session.state(), TimerState::stopped(180));
    assert_eq!(session.state().display(), "03:00");
    assert_eq!(session.topic(), "Relaxation");
    assert!(!session.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn running_session_ticks_once_per_second() {
    let mut session = new_session(180);
    let started = session.toggle();
    assert!(started.running);
    assert_eq!(started.remaining_seconds, 180);

    sleep_ms(3_500).await;
    let state = session.state();
    assert_eq!(state.remaining_seconds, 177);
    assert!(state.running);
    assert_eq!(state.display(), "02:57");
}

#[tokio::test(start_paused = true)]
async fn stopping_halts_ticks_and_cancels_task() {
    let mut session = new_session(180);
    session.toggle();
    sleep_ms(2_500).await;

    let stopped = session.toggle();
    assert!(!stopped.running);
    assert_eq!(stopped.remaining_seconds, 178);

    sleep_ms(10_000).await;
    assert_eq!(session.state(), TimerState::stopped(178));
    assert!(!session.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn restarting_begins_a_fresh_one_second_wait() {
    let mut session = new_session(180);
    session.toggle();
    sleep_ms(1_500).await;
    assert_eq!(session.state().remaining_seconds, 179);

    session.toggle();
    session.toggle();
    sleep_ms(900).await;
    assert_eq!(session.state().remaining_seconds, 179);
    sleep_ms(200).await;
    assert_eq!(session.state().remaining_seconds, 178);
}

#[tokio::test(start_paused = true)]
async fn countdown_expires_at_zero_and_stops_itself() {
    let mut session = new_session(3);
    session.toggle();

    sleep_ms(10_000).await;
    assert_eq!(session.state(), TimerState::stopped(0));
    assert_eq!(session.state().display(), "00:00");
    assert!(!session.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn toggle_at_zero_runs_then_immediately_stops_again() {
    let mut session = new_session(1);
    session.toggle();
    sleep_ms(1_500).await;
    assert_eq!(session.state(), TimerState::stopped(0));

    let restarted = session.toggle();
    assert!(restarted.running);
    assert_eq!(restarted.remaining_seconds, 0);

    sleep_ms(1).await;
    assert_eq!(session.state(), TimerState::stopped(0));

    sleep_ms(5_000).await;
    assert_eq!(session.state(), TimerState::stopped(0));
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_each_tick() {
    let mut session = new_session(180);
    let mut subscription = session.subscribe();

    session.toggle();
    assert!(subscription.current().running);

    let first = subscription.changed().await.expect("first tick");
    let second = subscription.changed().await.expect("second tick");
    assert_eq!(first.remaining_seconds, 179);
    assert_eq!(second.remaining_seconds, 178);
}

#[tokio::test(start_paused = true)]
async fn dropping_session_stops_ticks_for_good() {
    let mut session = new_session(180);
    let mut subscription = session.subscribe();
    session.toggle();
    sleep_ms(1_500).await;
    assert_eq!(session.state().remaining_seconds, 179);

    drop(session);
    sleep_ms(5_000).await;

    assert_eq!(subscription.current().remaining_seconds, 179);
    assert_eq!(subscription.changed().await, None);
}

#[tokio::test(start_paused = true)]
async fn topic_does_not_change_duration() {
    let config = CoreConfig::default();
    for topic in ["Relaxation", "Energy", "Focus", "Unknown", "anything"] {
        let session = MeditationSession::new(topic, &config, Handle::current());
        assert_eq!(session.state().remaining_seconds, 180);
    }
}

#[test]
fn session_requires_a_runtime() {
    let result = MeditationSession::on_current_runtime("Focus", &CoreConfig::default());
    assert!(matches!(result, Err(SessionError::RuntimeUnavailable)));
}

#[tokio::test(start_paused = true)]
async fn ticks_stay_on_whole_second_boundaries() {
    let mut session = new_session(180);
    session.toggle();

    sleep_ms(59_999).await;
    assert_eq!(session.state().remaining_seconds, 121);
    sleep_ms(2).await;
    assert_eq!(session.state().remaining_seconds, 120);
    assert_eq!(session.state().display(), "02:00");
}

#[tokio::test(start_paused = true)]
async fn zero_tick_interval_falls_back_to_one_second() {
    let config = CoreConfig {
        tick_interval_ms: 0,
        ..CoreConfig::default()
    };
    let mut session = MeditationSession::new("Energy", &config, Handle::current());
    session.toggle();

    sleep_ms(1_500).await;
    assert_eq!(session.state().remaining_seconds, 179);
    assert!(session.state().running);
}
