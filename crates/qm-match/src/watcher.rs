//! Polling a room for changes.

use std::sync::Arc;

use tracing::debug;

use qm_core::{Room, RoomId};
use qm_session::{Clock, TimerId, Timers};

use crate::config::MatchConfig;
use crate::matchmaker::Matchmaker;

/// A change observed on a watched room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// The room differs from the last delivered snapshot.
    RoomUpdated(Room),
    /// The room no longer exists. Polling has stopped.
    RoomClosed(RoomId),
}

/// Re-reads one room on a fixed interval and reports changes.
///
/// Identical snapshots are never delivered twice in a row.
pub struct RoomWatcher {
    matchmaker: Arc<Matchmaker>,
    clock: Arc<dyn Clock>,
    room_id: RoomId,
    timers: Timers<()>,
    timer: Option<TimerId>,
    last: Option<Room>,
}

impl std::fmt::Debug for RoomWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomWatcher")
            .field("room_id", &self.room_id)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl RoomWatcher {
    /// Start watching `room_id`.
    ///
    /// `seen` is the snapshot the caller already has. It will not be
    /// reported again.
    pub fn new(
        matchmaker: Arc<Matchmaker>,
        clock: Arc<dyn Clock>,
        room_id: RoomId,
        seen: Option<Room>,
        config: &MatchConfig,
    ) -> Self {
        let mut timers = Timers::new();
        let timer = Some(timers.every(clock.now(), config.poll_interval, ()));
        Self {
            matchmaker,
            clock,
            room_id,
            timers,
            timer,
            last: seen,
        }
    }

    /// The watched room.
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Whether polling is still scheduled.
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// The last delivered snapshot.
    pub fn last(&self) -> Option<&Room> {
        self.last.as_ref()
    }

    /// Run every due poll and return what changed.
    pub fn poll(&mut self) -> Vec<RoomEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();
        while self.timers.pop_due(now).is_some() {
            events.extend(self.check());
        }
        events
    }

    /// Read the room now, regardless of the interval.
    pub fn check(&mut self) -> Option<RoomEvent> {
        if !self.is_active() {
            return None;
        }
        match self.matchmaker.room(self.room_id) {
            Some(room) if self.last.as_ref() == Some(&room) => None,
            Some(room) => {
                debug!(room = %self.room_id, status = %room.status(), "room changed");
                self.last = Some(room.clone());
                Some(RoomEvent::RoomUpdated(room))
            }
            None => {
                debug!(room = %self.room_id, "watched room is gone");
                self.cancel();
                Some(RoomEvent::RoomClosed(self.room_id))
            }
        }
    }

    /// Stop polling.
    pub fn cancel(&mut self) {
        if let Some(id) = self.timer.take() {
            self.timers.cancel(id);
        }
    }
}
