//! The shared table of rooms.
//!
//! Rooms live in a `RwLock<HashMap<RoomId, _>>` and each room sits behind
//! its own mutex. Lock order is always table then room. The table lock is held only to look
//! up, insert or remove a room, except in [`Matchmaker::join_random_room`],
//! which holds it for writing so two random joins cannot both open a room.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use qm_core::{Player, PlayerId, Room, RoomId, RoomStatus};

use crate::error::{MatchError, MatchResult};

/// A room plus the order it was opened in. Timestamps can tie.
#[derive(Debug, Clone)]
struct Slot {
    opened: u64,
    room: Arc<Mutex<Room>>,
}

/// In-memory matchmaking service shared by every client.
#[derive(Debug, Default)]
pub struct Matchmaker {
    rooms: RwLock<HashMap<RoomId, Slot>>,
    next_seq: AtomicU64,
    closed: AtomicBool,
}

impl Matchmaker {
    /// An empty matchmaker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a waiting room with `player` in slot 1.
    pub fn create_room(&self, player: Player) -> MatchResult<Room> {
        self.ensure_open()?;
        let room = Room::new(player);
        let slot = self.open_slot(room.clone());
        self.rooms.write().insert(room.id(), slot);
        info!(room = %room.id(), "room created");
        Ok(room)
    }

    /// Seat `player` in the oldest open room they are not already in, or open
    /// a new room if there is none.
    pub fn join_random_room(&self, player: Player) -> MatchResult<Room> {
        self.ensure_open()?;
        let mut rooms = self.rooms.write();

        let oldest = rooms
            .values()
            .filter(|slot| {
                let room = slot.room.lock();
                room.is_open() && !room.contains(player.id)
            })
            .min_by_key(|slot| slot.opened)
            .map(|slot| Arc::clone(&slot.room));

        if let Some(slot) = oldest {
            let mut room = slot.lock();
            if room.add_player(player.clone()) {
                log_join(&room, &player);
                return Ok(room.clone());
            }
        }

        let room = Room::new(player);
        let slot = self.open_slot(room.clone());
        rooms.insert(room.id(), slot);
        info!(room = %room.id(), "no open room, created one");
        Ok(room)
    }

    /// Seat `player` in a specific room.
    pub fn join_room_by_id(&self, player: Player, id: RoomId) -> MatchResult<Room> {
        let slot = self.slot(id)?;
        let mut room = slot.lock();
        if room.is_full() {
            return Err(MatchError::RoomFull(id));
        }
        if room.contains(player.id) {
            return Err(MatchError::AlreadyJoined(id));
        }
        room.add_player(player.clone());
        log_join(&room, &player);
        Ok(room.clone())
    }

    /// Overwrite a participant's score. Non-participants are ignored.
    pub fn update_score(
        &self,
        id: RoomId,
        player: PlayerId,
        score: u32,
        sentence_count: u32,
    ) -> MatchResult<()> {
        let slot = self.slot(id)?;
        if slot.lock().record_score(player, score, sentence_count) {
            debug!(room = %id, %player, score, sentence_count, "score updated");
        } else {
            debug!(room = %id, %player, "score from non-participant ignored");
        }
        Ok(())
    }

    /// Set a participant's ready flag. Non-participants are ignored.
    pub fn set_ready(&self, id: RoomId, player: PlayerId, ready: bool) -> MatchResult<()> {
        let slot = self.slot(id)?;
        slot.lock().set_ready(player, ready);
        Ok(())
    }

    /// End a running game. Ending a completed game again changes nothing.
    pub fn end_game(&self, id: RoomId) -> MatchResult<Room> {
        let slot = self.slot(id)?;
        let mut room = slot.lock();
        match room.status() {
            RoomStatus::Waiting => Err(MatchError::NotStarted(id)),
            RoomStatus::Completed => Ok(room.clone()),
            RoomStatus::InProgress => {
                room.complete();
                info!(room = %id, winner = ?room.winner().map(|p| &p.name), "game completed");
                Ok(room.clone())
            }
        }
    }

    /// The other participant of a room.
    pub fn opponent(&self, id: RoomId, player: PlayerId) -> MatchResult<Option<Player>> {
        let slot = self.slot(id)?;
        let room = slot.lock();
        Ok(room.opponent_of(player).cloned())
    }

    /// The strictly higher scorer of a room, if any.
    pub fn winner(&self, id: RoomId) -> MatchResult<Option<Player>> {
        let slot = self.slot(id)?;
        let room = slot.lock();
        Ok(room.winner().cloned())
    }

    /// Snapshot of a room.
    pub fn room(&self, id: RoomId) -> Option<Room> {
        let slot = self.rooms.read().get(&id).map(|s| Arc::clone(&s.room))?;
        let room = slot.lock().clone();
        Some(room)
    }

    /// Delete a room, returning its last state.
    pub fn remove_room(&self, id: RoomId) -> Option<Room> {
        let slot = self.rooms.write().remove(&id)?;
        let room = slot.room.lock().clone();
        info!(room = %id, "room removed");
        Some(room)
    }

    /// Delete a room only if it is still waiting with `player` as its sole
    /// occupant. Returns whether the room was removed.
    ///
    /// The check and the removal happen under the table write lock, so a
    /// concurrent join either lands first (and the room is kept) or finds the
    /// room gone.
    pub fn discard_if_waiting_alone(&self, id: RoomId, player: PlayerId) -> bool {
        let mut rooms = self.rooms.write();
        let lonely = rooms.get(&id).is_some_and(|slot| {
            let room = slot.room.lock();
            room.status() == RoomStatus::Waiting && room.players().all(|p| p.id == player)
        });
        if lonely {
            rooms.remove(&id);
            info!(room = %id, "abandoned room discarded");
        }
        lonely
    }

    /// Snapshots of every room, oldest first.
    pub fn rooms(&self) -> Vec<Room> {
        let mut slots: Vec<Slot> = self.rooms.read().values().cloned().collect();
        slots.sort_by_key(|slot| slot.opened);
        slots.iter().map(|slot| slot.room.lock().clone()).collect()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.read().len()
    }

    /// Whether there are no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.read().is_empty()
    }

    /// Shut the service down. Every room is dropped and later calls fail with
    /// [`MatchError::ConnectionFailed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.rooms.write().clear();
        info!("matchmaker closed");
    }

    /// Whether [`close`](Self::close) was called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> MatchResult<()> {
        if self.is_closed() {
            return Err(MatchError::ConnectionFailed("matchmaker is closed".into()));
        }
        Ok(())
    }

    fn slot(&self, id: RoomId) -> MatchResult<Arc<Mutex<Room>>> {
        self.ensure_open()?;
        self.rooms
            .read()
            .get(&id)
            .map(|s| Arc::clone(&s.room))
            .ok_or(MatchError::RoomNotFound(id))
    }

    fn open_slot(&self, room: Room) -> Slot {
        Slot {
            opened: self.next_seq.fetch_add(1, Ordering::SeqCst),
            room: Arc::new(Mutex::new(room)),
        }
    }
}

fn log_join(room: &Room, player: &Player) {
    info!(room = %room.id(), player = %player.id, name = %player.name, "player joined");
    if room.status() == RoomStatus::InProgress {
        info!(room = %room.id(), "game started");
    }
}
