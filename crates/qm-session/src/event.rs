//! Notifications raised by a running session.

use std::fmt;

use qm_scoring::ScoreResult;

/// Something the UI should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The text was rescored after an edit.
    TextScored(ScoreResult),
    /// The entry just reached the milestone sentence count.
    MilestoneReached {
        /// Sentence count at the moment the milestone fired.
        sentence_count: u32,
    },
    /// The milestone celebration timed out.
    MilestoneCleared,
    /// The countdown hit zero; the session no longer accepts edits.
    TimeExpired,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextScored(r) => write!(
                f,
                "scored {} points over {} sentences",
                r.score, r.sentence_count
            ),
            Self::MilestoneReached { sentence_count } => {
                write!(f, "milestone reached at {sentence_count} sentences")
            }
            Self::MilestoneCleared => write!(f, "milestone cleared"),
            Self::TimeExpired => write!(f, "time expired"),
        }
    }
}

/// Pending events waiting to be drained by the UI.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SessionEvent>,
}

impl EventQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
