//! Cancellable one-shot and interval timers over virtual time.
//!
//! A [`Timers`] queue holds task keys, not callbacks. The owner asks for due
//! keys with [`Timers::pop_due`] and dispatches them itself, which keeps all
//! state changes on the owner's thread and lets a cancellation made while
//! handling one key take effect before the next is popped.

use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<K> {
    id: TimerId,
    key: K,
    due: Duration,
    period: Option<Duration>,
}

/// A queue of pending timers keyed by `K`.
#[derive(Debug, Clone)]
pub struct Timers<K> {
    timers: Vec<Timer<K>>,
    next_id: u64,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Clone> Timers<K> {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `key` once, `delay` after `now`.
    pub fn once(&mut self, now: Duration, delay: Duration, key: K) -> TimerId {
        self.insert(now + delay, None, key)
    }

    /// Fire `key` every `period`, first at `now + period`.
    ///
    /// Periods shorter than a millisecond are rounded up to one.
    pub fn every(&mut self, now: Duration, period: Duration, key: K) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(now + period, Some(period), key)
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Whether `id` is still pending.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// When the earliest pending timer is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Take the earliest timer due at or before `now`.
    ///
    /// Interval timers are re-armed one period later, so after a long gap an
    /// interval fires once for every period that elapsed. Ties fire in
    /// scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerId, K)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[index];
        let fired = (timer.id, timer.key.clone());
        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(fired)
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, key: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            key,
            due,
            period,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn drain(timers: &mut Timers<&'static str>, now: Duration) -> Vec<&'static str> {
        std::iter::from_fn(|| timers.pop_due(now).map(|(_, k)| k)).collect()
    }

    #[test]
    fn once_fires_once() {
        let mut t = Timers::new();
        let id = t.once(secs(0), secs(3), "clear");
        assert!(drain(&mut t, secs(2)).is_empty());
        assert!(t.is_scheduled(id));
        assert_eq!(drain(&mut t, secs(3)), ["clear"]);
        assert!(!t.is_scheduled(id));
        assert!(drain(&mut t, secs(10)).is_empty());
    }

    #[test]
    fn interval_catches_up() {
        let mut t = Timers::new();
        t.every(secs(0), secs(1), "tick");
        assert_eq!(drain(&mut t, secs(5)).len(), 5);
        assert!(drain(&mut t, secs(5)).is_empty());
        assert_eq!(drain(&mut t, secs(6)), ["tick"]);
    }

    #[test]
    fn cancel_stops_interval() {
        let mut t = Timers::new();
        let id = t.every(secs(0), secs(1), "tick");
        assert!(t.cancel(id));
        assert!(!t.cancel(id));
        assert!(drain(&mut t, secs(10)).is_empty());
        assert!(t.is_empty());
    }

    #[test]
    fn fires_in_time_order() {
        let mut t = Timers::new();
        t.every(secs(0), secs(2), "poll");
        t.once(secs(0), secs(3), "clear");
        t.every(secs(0), secs(1), "tick");
        assert_eq!(
            drain(&mut t, secs(4)),
            ["tick", "poll", "tick", "clear", "tick", "poll", "tick"]
        );
    }

    #[test]
    fn zero_period_is_rounded_up() {
        let mut t = Timers::new();
        t.every(secs(0), Duration::ZERO, "spin");
        assert_eq!(drain(&mut t, Duration::from_millis(3)).len(), 3);
    }

    #[test]
    fn next_due_and_clear() {
        let mut t = Timers::new();
        assert_eq!(t.next_due(), None);
        t.once(secs(1), secs(4), "a");
        t.every(secs(0), secs(2), "b");
        assert_eq!(t.next_due(), Some(secs(2)));
        assert_eq!(t.len(), 2);
        t.clear();
        assert!(t.is_empty());
    }
}
