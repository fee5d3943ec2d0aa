//! The timed journaling session.
//!
//! `SessionController` owns one journal entry, rescores it on every edit and
//! counts down the writing time. Time only advances through [`poll`], which
//! dispatches whatever timers the injected clock says are due.
//!
//! [`poll`]: SessionController::poll

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use qm_core::{JournalEntry, random_prompt};
use qm_scoring::{ScoreResult, ScoringEngine};

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::event::{EventQueue, SessionEvent};
use crate::timers::{TimerId, Timers};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not counting down. Edits are still scored.
    Idle,
    /// Counting down.
    Running,
    /// Time is up. Terminal.
    Expired,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Tick,
    ClearMilestone,
}

/// A single timed writing session.
pub struct SessionController {
    config: SessionConfig,
    engine: Arc<ScoringEngine>,
    clock: Arc<dyn Clock>,
    timers: Timers<Task>,
    tick: Option<TimerId>,
    clear: Option<TimerId>,
    state: SessionState,
    remaining: Duration,
    entry: JournalEntry,
    last: ScoreResult,
    previous_count: u32,
    milestone_visible: bool,
    events: EventQueue,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.state)
            .field("remaining", &self.remaining)
            .field("prompt", &self.entry.prompt())
            .field("last", &self.last)
            .field("milestone_visible", &self.milestone_visible)
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Create a session and start the countdown.
    ///
    /// The prompt comes from the config if set, otherwise it is drawn from
    /// the prompt list, seeded from the config when it has a seed.
    pub fn new(config: SessionConfig, engine: Arc<ScoringEngine>, clock: Arc<dyn Clock>) -> Self {
        let prompt = match &config.prompt {
            Some(p) => p.clone(),
            None => match config.seed {
                Some(seed) => random_prompt(&mut StdRng::seed_from_u64(seed)).to_string(),
                None => random_prompt(&mut rand::rng()).to_string(),
            },
        };

        let mut session = Self {
            remaining: config.duration,
            config,
            engine,
            clock,
            timers: Timers::new(),
            tick: None,
            clear: None,
            state: SessionState::Idle,
            entry: JournalEntry::new(prompt),
            last: ScoreResult::default(),
            previous_count: 0,
            milestone_visible: false,
            events: EventQueue::new(),
        };
        session.start();
        session
    }

    /// Resume counting down. No-op unless idle.
    pub fn start(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        if self.remaining.is_zero() {
            self.expire();
            return;
        }
        self.state = SessionState::Running;
        let now = self.clock.now();
        self.tick = Some(self.timers.every(now, self.config.tick_interval, Task::Tick));
        info!(
            prompt = self.entry.prompt(),
            remaining = self.remaining_seconds(),
            "session started"
        );
    }

    /// Pause the countdown, keeping the remaining time. No-op unless running.
    pub fn stop(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        self.cancel_tick();
        self.state = SessionState::Idle;
        info!(remaining = self.remaining_seconds(), "session stopped");
    }

    /// Dispatch every timer that is due on the clock.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        while let Some((_, task)) = self.timers.pop_due(now) {
            match task {
                Task::Tick => self.on_tick(),
                Task::ClearMilestone => self.on_clear(),
            }
        }
    }

    /// Replace the entry text and rescore it.
    ///
    /// Once expired the text is frozen and the last result is returned.
    pub fn update_text(&mut self, text: &str) -> ScoreResult {
        self.poll();
        if self.state == SessionState::Expired {
            debug!("edit ignored after expiry");
            return self.last;
        }

        let result = self.engine.calculate_score(text);
        self.entry.record(text, result.score, result.sentence_count);
        self.last = result;
        self.events.push(SessionEvent::TextScored(result));

        let milestone = u32::try_from(self.engine.config().milestone_sentences).unwrap_or(u32::MAX);
        if result.milestone_just_reached && self.previous_count < milestone {
            self.reach_milestone(result.sentence_count);
        }
        self.previous_count = result.sentence_count;
        result
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the countdown is running.
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Whether time ran out.
    pub fn is_expired(&self) -> bool {
        self.state == SessionState::Expired
    }

    /// Whole seconds left on the countdown.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining.as_secs()
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        let secs = self.remaining_seconds();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// The prompt for this session.
    pub fn prompt(&self) -> &str {
        self.entry.prompt()
    }

    /// The journal entry being written.
    pub fn entry(&self) -> &JournalEntry {
        &self.entry
    }

    /// The most recent score.
    pub fn last_result(&self) -> ScoreResult {
        self.last
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.last.score
    }

    /// Current sentence count.
    pub fn sentence_count(&self) -> u32 {
        self.last.sentence_count
    }

    /// Whether the milestone celebration is showing.
    pub fn milestone_visible(&self) -> bool {
        self.milestone_visible
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    /// One-line summary for status bars.
    pub fn status_line(&self) -> String {
        format!(
            "{} | {} | {} | {} points | {} sentences",
            self.prompt(),
            self.state,
            self.formatted_time(),
            self.score(),
            self.sentence_count()
        )
    }

    fn on_tick(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        self.remaining = self.remaining.saturating_sub(self.config.tick_interval);
        if self.remaining.is_zero() {
            self.expire();
        }
    }

    fn on_clear(&mut self) {
        self.clear = None;
        if self.milestone_visible {
            self.milestone_visible = false;
            self.events.push(SessionEvent::MilestoneCleared);
        }
    }

    fn reach_milestone(&mut self, sentence_count: u32) {
        info!(sentence_count, "milestone reached");
        self.milestone_visible = true;
        self.events
            .push(SessionEvent::MilestoneReached { sentence_count });
        if let Some(id) = self.clear.take() {
            self.timers.cancel(id);
        }
        let now = self.clock.now();
        self.clear = Some(
            self.timers
                .once(now, self.config.milestone_display, Task::ClearMilestone),
        );
    }

    fn expire(&mut self) {
        self.cancel_tick();
        self.remaining = Duration::ZERO;
        self.state = SessionState::Expired;
        self.events.push(SessionEvent::TimeExpired);
        info!(
            score = self.last.score,
            sentences = self.last.sentence_count,
            "session expired"
        );
    }

    fn cancel_tick(&mut self) {
        if let Some(id) = self.tick.take() {
            self.timers.cancel(id);
        }
    }
}
