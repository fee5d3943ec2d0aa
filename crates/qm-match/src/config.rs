//! Configuration for matchmaking clients.

use std::time::Duration;

/// Configuration for a [`MatchClient`](crate::MatchClient).
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// How often a client re-reads its room.
    pub poll_interval: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl MatchConfig {
    /// Set the poll interval (at least one millisecond).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_polls_twice_a_second() {
        assert_eq!(MatchConfig::default().poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn poll_interval_has_a_floor() {
        let cfg = MatchConfig::default().with_poll_interval(Duration::ZERO);
        assert_eq!(cfg.poll_interval, Duration::from_millis(1));
    }
}
