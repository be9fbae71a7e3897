//! Meditation session driver.
//!
//! # Responsibility
//! - Own one countdown timer for one meditation screen instance.
//! - Drive ticks from a tokio task while the timer is running.
//! - Publish every state change through an observable.
//!
//! # Invariants
//! - At most one tick task exists per session.
//! - Entering `Running` spawns a fresh task; entering `Stopped` aborts it.
//! - The task re-checks `Running` before each decrement and stops on zero.
//! - Dropping the session aborts the task; no tick lands after teardown.
//! - Toggling at zero enters `Running` and is settled back to `Stopped`
//!   without waiting for a tick.

use crate::config::CoreConfig;
use crate::model::timer::TimerState;
use crate::observable::{Observable, Subscription};
use log::{debug, info, trace};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use uuid::Uuid;

/// Session construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No tokio runtime is active on the calling thread.
    RuntimeUnavailable,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuntimeUnavailable => {
                write!(f, "meditation session requires an active tokio runtime")
            }
        }
    }
}

impl Error for SessionError {}

/// One meditation screen instance: topic label, countdown and tick task.
pub struct MeditationSession {
    session_id: Uuid,
    topic: String,
    state: Observable<TimerState>,
    // Bumped on every toggle and on teardown; a tick task only decrements
    // while the generation it was spawned for is still current.
    generation: Arc<AtomicU64>,
    tick_interval: Duration,
    runtime: Handle,
    ticker: Option<JoinHandle<()>>,
}

impl MeditationSession {
    /// Creates a stopped session with `config.session_length()` remaining.
    pub fn new(topic: impl Into<String>, config: &CoreConfig, runtime: Handle) -> Self {
        let session_seconds = config.session_length();
        let session = Self {
            session_id: Uuid::new_v4(),
            topic: topic.into(),
            state: Observable::new(TimerState::stopped(session_seconds)),
            generation: Arc::new(AtomicU64::new(0)),
            tick_interval: config.tick_interval(),
            runtime,
            ticker: None,
        };
        info!(
            "event=session_open module=timer status=ok session={} remaining={}",
            session.session_id, session_seconds
        );
        session
    }

    /// Creates a session bound to the runtime of the calling context.
    ///
    /// # Errors
    /// - `SessionError::RuntimeUnavailable` outside a tokio runtime.
    pub fn on_current_runtime(
        topic: impl Into<String>,
        config: &CoreConfig,
    ) -> Result<Self, SessionError> {
        let runtime = Handle::try_current().map_err(|_| SessionError::RuntimeUnavailable)?;
        Ok(Self::new(topic, config, runtime))
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Topic label; display-only.
    pub fn topic(&self) -> &str {
        self.topic.as_str()
    }

    /// Latest timer snapshot.
    pub fn state(&self) -> TimerState {
        self.state.get()
    }

    /// Subscribes to timer snapshots; one publish per tick and per toggle.
    pub fn subscribe(&self) -> Subscription<TimerState> {
        self.state.subscribe()
    }

    /// Whether a tick task is currently alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    /// Flips `Stopped <-> Running` and starts or cancels the tick task.
    pub fn toggle(&mut self) -> TimerState {
        let generation = Arc::clone(&self.generation);
        let (state, current_generation) = self.state.update(|state| {
            state.toggle();
            (*state, generation.fetch_add(1, Ordering::SeqCst) + 1)
        });

        self.cancel_ticker();
        if state.running {
            self.ticker = Some(self.runtime.spawn(run_ticker(
                self.state.clone(),
                Arc::clone(&self.generation),
                current_generation,
                self.tick_interval,
                self.session_id,
            )));
        }

        info!(
            "event=timer_toggle module=timer status=ok session={} running={} remaining={}",
            self.session_id, state.running, state.remaining_seconds
        );
        state
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for MeditationSession {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cancel_ticker();
        debug!(
            "event=session_close module=timer status=ok session={} remaining={}",
            self.session_id,
            self.state.get().remaining_seconds
        );
    }
}

async fn run_ticker(
    state: Observable<TimerState>,
    generation: Arc<AtomicU64>,
    spawned_for: u64,
    tick_interval: Duration,
    session_id: Uuid,
) {
    let mut ticks = interval_at(Instant::now() + tick_interval, tick_interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    while state.get().wants_tick() {
        ticks.tick().await;

        let ticked = state.update(|timer| {
            if generation.load(Ordering::SeqCst) != spawned_for {
                return None;
            }
            timer.tick();
            Some(*timer)
        });
        let Some(after) = ticked else {
            return;
        };
        trace!(
            "event=timer_tick module=timer status=ok session={} remaining={}",
            session_id,
            after.remaining_seconds
        );
        if after.remaining_seconds == 0 {
            info!(
                "event=timer_expired module=timer status=ok session={}",
                session_id
            );
        }
    }

    let settled = state.update(|timer| {
        generation.load(Ordering::SeqCst) == spawned_for && timer.settle()
    });
    if settled {
        debug!(
            "event=timer_settle module=timer status=ok session={} remaining=0",
            session_id
        );
    }
}
