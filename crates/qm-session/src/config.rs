//! Configuration for a timed journaling session.

use std::time::Duration;

/// Configuration for a journaling session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Total writing time.
    pub duration: Duration,
    /// How often the countdown ticks.
    pub tick_interval: Duration,
    /// How long the milestone celebration stays visible.
    pub milestone_display: Duration,
    /// RNG seed for a reproducible prompt draw. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Fixed prompt, bypassing the random draw.
    pub prompt: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(30 * 60),
            tick_interval: Duration::from_secs(1),
            milestone_display: Duration::from_secs(3),
            seed: None,
            prompt: None,
        }
    }
}

impl SessionConfig {
    /// Set the total writing time.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the total writing time in whole minutes.
    pub fn with_minutes(self, minutes: u64) -> Self {
        self.with_duration(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Set the countdown tick interval (at least one millisecond).
    pub fn with_tick_interval(mut self, tick: Duration) -> Self {
        self.tick_interval = tick.max(Duration::from_millis(1));
        self
    }

    /// Set how long the milestone stays visible.
    pub fn with_milestone_display(mut self, display: Duration) -> Self {
        self.milestone_display = display;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a fixed prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}
