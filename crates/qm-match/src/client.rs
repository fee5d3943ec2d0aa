//! One player's view of matchmaking.

use std::sync::Arc;

use tracing::info;

use qm_core::{Player, Room, RoomId};
use qm_session::Clock;

use crate::config::MatchConfig;
use crate::error::{MatchError, MatchResult};
use crate::matchmaker::Matchmaker;
use crate::watcher::{RoomEvent, RoomWatcher};

/// A player's handle on the matchmaker.
///
/// Holds at most one room at a time and keeps a snapshot of it fresh by
/// polling. Entering a room while in another leaves the old one first.
#[derive(Debug)]
pub struct MatchClient {
    matchmaker: Arc<Matchmaker>,
    clock: Arc<dyn Clock>,
    config: MatchConfig,
    player: Player,
    room: Option<Room>,
    watcher: Option<RoomWatcher>,
}

impl MatchClient {
    /// Create a client for `player`.
    pub fn new(
        matchmaker: Arc<Matchmaker>,
        clock: Arc<dyn Clock>,
        player: Player,
        config: MatchConfig,
    ) -> Self {
        Self {
            matchmaker,
            clock,
            config,
            player,
            room: None,
            watcher: None,
        }
    }

    /// This client's player, with the last score it reported.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The latest snapshot of the current room.
    pub fn current_room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// The other player in the current room.
    pub fn opponent(&self) -> Option<&Player> {
        self.room.as_ref()?.opponent_of(self.player.id)
    }

    /// Open a new room and wait in it.
    pub fn create_room(&mut self) -> MatchResult<&Room> {
        self.leave_room();
        let room = self.matchmaker.create_room(self.player.clone())?;
        Ok(self.enter(room))
    }

    /// Join any open room, or open one.
    pub fn join_random_room(&mut self) -> MatchResult<&Room> {
        self.leave_room();
        let room = self.matchmaker.join_random_room(self.player.clone())?;
        Ok(self.enter(room))
    }

    /// Join a specific room.
    pub fn join_room(&mut self, id: RoomId) -> MatchResult<&Room> {
        if self.room.as_ref().is_some_and(|r| r.id() == id) {
            return Err(MatchError::AlreadyJoined(id));
        }
        let room = self.matchmaker.join_room_by_id(self.player.clone(), id)?;
        self.leave_room();
        Ok(self.enter(room))
    }

    /// Stop polling and forget the current room.
    ///
    /// A room still waiting with only this player in it is discarded.
    pub fn leave_room(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.cancel();
        }
        let Some(room) = self.room.take() else {
            return;
        };
        self.matchmaker
            .discard_if_waiting_alone(room.id(), self.player.id);
        info!(room = %room.id(), player = %self.player.id, "left room");
    }

    /// Report this player's score.
    pub fn update_score(&mut self, score: u32, sentence_count: u32) -> MatchResult<()> {
        let id = self.room_id()?;
        self.matchmaker
            .update_score(id, self.player.id, score, sentence_count)?;
        self.player.score = score;
        self.player.sentence_count = sentence_count;
        Ok(())
    }

    /// Mark this player ready or not.
    pub fn set_ready(&mut self, ready: bool) -> MatchResult<()> {
        let id = self.room_id()?;
        self.matchmaker.set_ready(id, self.player.id, ready)?;
        self.player.is_ready = ready;
        Ok(())
    }

    /// End the game in the current room.
    pub fn end_game(&mut self) -> MatchResult<&Room> {
        let id = self.room_id()?;
        let room = self.matchmaker.end_game(id)?;
        Ok(&*self.room.insert(room))
    }

    /// Run due polls, refresh the snapshot and return what changed.
    pub fn poll(&mut self) -> Vec<RoomEvent> {
        let Some(watcher) = self.watcher.as_mut() else {
            return Vec::new();
        };
        let events = watcher.poll();
        for event in &events {
            match event {
                RoomEvent::RoomUpdated(room) => self.room = Some(room.clone()),
                RoomEvent::RoomClosed(_) => {
                    self.room = None;
                    self.watcher = None;
                }
            }
        }
        events
    }

    fn room_id(&self) -> MatchResult<RoomId> {
        self.room.as_ref().map(Room::id).ok_or(MatchError::NotInRoom)
    }

    fn enter(&mut self, room: Room) -> &Room {
        self.watcher = Some(RoomWatcher::new(
            Arc::clone(&self.matchmaker),
            Arc::clone(&self.clock),
            room.id(),
            Some(room.clone()),
            &self.config,
        ));
        self.room.insert(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm_core::RoomStatus;
    use qm_session::ManualClock;
    use std::time::Duration;

    fn client(mm: &Arc<Matchmaker>, clock: &ManualClock, name: &str) -> MatchClient {
        MatchClient::new(
            Arc::clone(mm),
            Arc::new(clock.clone()),
            Player::new(name),
            MatchConfig::default(),
        )
    }

    #[test]
    fn host_sees_opponent_after_poll() {
        let mm = Arc::new(Matchmaker::new());
        let clock = ManualClock::new();
        let mut alice = client(&mm, &clock, "Alice");
        let mut bob = client(&mm, &clock, "Bob");

        let room_id = alice.create_room().unwrap().id();
        assert!(alice.opponent().is_none());

        let joined = bob.join_room(room_id).unwrap();
        assert_eq!(joined.status(), RoomStatus::InProgress);
        assert_eq!(bob.opponent().map(|p| p.name.as_str()), Some("Alice"));

        clock.advance(Duration::from_millis(500));
        let events = alice.poll();
        assert_eq!(events.len(), 1);
        assert_eq!(alice.opponent().map(|p| p.name.as_str()), Some("Bob"));
        assert_eq!(alice.current_room().map(Room::status), Some(RoomStatus::InProgress));
    }

    #[test]
    fn scores_flow_to_opponent() {
        let mm = Arc::new(Matchmaker::new());
        let clock = ManualClock::new();
        let mut alice = client(&mm, &clock, "Alice");
        let mut bob = client(&mm, &clock, "Bob");
        alice.join_random_room().unwrap();
        bob.join_random_room().unwrap();

        alice.update_score(9, 3).unwrap();
        assert_eq!(alice.player().score, 9);

        clock.advance(Duration::from_millis(500));
        bob.poll();
        assert_eq!(bob.opponent().map(|p| p.score), Some(9));

        let ended = bob.end_game().unwrap();
        assert_eq!(ended.status(), RoomStatus::Completed);
        assert_eq!(ended.winner().map(|p| p.name.as_str()), Some("Alice"));
    }

    #[test]
    fn operations_need_a_room() {
        let mm = Arc::new(Matchmaker::new());
        let mut alice = client(&mm, &ManualClock::new(), "Alice");
        assert_eq!(alice.update_score(1, 1), Err(MatchError::NotInRoom));
        assert_eq!(alice.set_ready(true), Err(MatchError::NotInRoom));
        assert!(matches!(alice.end_game(), Err(MatchError::NotInRoom)));
        assert!(alice.poll().is_empty());
    }

    #[test]
    fn leaving_a_lonely_room_discards_it() {
        let mm = Arc::new(Matchmaker::new());
        let mut alice = client(&mm, &ManualClock::new(), "Alice");
        alice.create_room().unwrap();
        assert_eq!(mm.len(), 1);
        alice.leave_room();
        assert!(alice.current_room().is_none());
        assert!(mm.is_empty());
    }

    #[test]
    fn leaving_with_a_stale_snapshot_keeps_a_joined_room() {
        let mm = Arc::new(Matchmaker::new());
        let clock = ManualClock::new();
        let mut alice = client(&mm, &clock, "Alice");
        let mut bob = client(&mm, &clock, "Bob");
        let id = alice.create_room().unwrap().id();
        bob.join_room(id).unwrap();

        // Alice has not polled, so her snapshot still shows a waiting room.
        assert_eq!(alice.current_room().map(Room::status), Some(RoomStatus::Waiting));
        alice.leave_room();
        assert_eq!(mm.room(id).map(|r| r.status()), Some(RoomStatus::InProgress));
    }

    #[test]
    fn leaving_a_started_room_keeps_it() {
        let mm = Arc::new(Matchmaker::new());
        let clock = ManualClock::new();
        let mut alice = client(&mm, &clock, "Alice");
        let mut bob = client(&mm, &clock, "Bob");
        alice.join_random_room().unwrap();
        bob.join_random_room().unwrap();
        bob.leave_room();
        assert_eq!(mm.len(), 1);
        clock.advance(Duration::from_secs(1));
        assert!(bob.poll().is_empty());
    }

    #[test]
    fn rejoining_own_room_is_refused() {
        let mm = Arc::new(Matchmaker::new());
        let mut alice = client(&mm, &ManualClock::new(), "Alice");
        let id = alice.create_room().unwrap().id();
        assert_eq!(alice.join_room(id).map(|r| r.id()), Err(MatchError::AlreadyJoined(id)));
        assert_eq!(mm.len(), 1);
    }

    #[test]
    fn failed_join_keeps_current_room() {
        let mm = Arc::new(Matchmaker::new());
        let mut alice = client(&mm, &ManualClock::new(), "Alice");
        let id = alice.create_room().unwrap().id();
        let missing = RoomId::new();
        assert_eq!(
            alice.join_room(missing).map(|r| r.id()),
            Err(MatchError::RoomNotFound(missing))
        );
        assert_eq!(alice.current_room().map(Room::id), Some(id));
    }

    #[test]
    fn removed_room_is_dropped_on_poll() {
        let mm = Arc::new(Matchmaker::new());
        let clock = ManualClock::new();
        let mut alice = client(&mm, &clock, "Alice");
        let id = alice.create_room().unwrap().id();
        mm.remove_room(id);
        clock.advance(Duration::from_millis(500));
        assert_eq!(alice.poll(), [RoomEvent::RoomClosed(id)]);
        assert!(alice.current_room().is_none());
    }
}
