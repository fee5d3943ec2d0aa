use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{PlayerId, RoomId};
use crate::player::Player;

/// Lifecycle of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomStatus {
    /// At most one slot is filled.
    Waiting,
    /// Both slots are filled and the game is running.
    InProgress,
    /// The game was explicitly ended.
    Completed,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::InProgress => write!(f, "in progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A two-player room.
///
/// Slot 1 always fills first. The room moves to [`RoomStatus::InProgress`]
/// exactly when slot 2 fills, and to [`RoomStatus::Completed`] only through
/// [`Room::complete`]. Fields are private so those transitions cannot be
/// bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    id: RoomId,
    slot1: Option<Player>,
    slot2: Option<Player>,
    status: RoomStatus,
    created_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Open a waiting room with `host` in slot 1.
    pub fn new(host: Player) -> Self {
        Self::with_id(RoomId::new(), host)
    }

    /// Open a waiting room with a pre-assigned ID.
    pub fn with_id(id: RoomId, host: Player) -> Self {
        Self {
            id,
            slot1: Some(host),
            slot2: None,
            status: RoomStatus::Waiting,
            created_at: Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    /// The room's identifier.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Current lifecycle status.
    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// The player in slot 1.
    pub fn slot1(&self) -> Option<&Player> {
        self.slot1.as_ref()
    }

    /// The player in slot 2.
    pub fn slot2(&self) -> Option<&Player> {
        self.slot2.as_ref()
    }

    /// When the room was opened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the second player joined.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the game was ended.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Both slots are occupied.
    pub fn is_full(&self) -> bool {
        self.slot1.is_some() && self.slot2.is_some()
    }

    /// The room is waiting and has an open slot.
    pub fn is_open(&self) -> bool {
        self.status == RoomStatus::Waiting && !self.is_full()
    }

    /// Whether `id` occupies either slot.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Look up a participant by ID.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().find(|p| p.id == id)
    }

    /// Iterate over the filled slots in slot order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.slot1.iter().chain(self.slot2.iter())
    }

    /// Seat a player in the first open slot.
    ///
    /// Filling slot 2 starts the game. Returns `false` when the room is full.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.slot1.is_none() {
            self.slot1 = Some(player);
            true
        } else if self.slot2.is_none() {
            self.slot2 = Some(player);
            self.status = RoomStatus::InProgress;
            self.started_at = Some(Utc::now());
            true
        } else {
            false
        }
    }

    /// Overwrite a participant's score. Returns `false` if `id` is not seated.
    pub fn record_score(&mut self, id: PlayerId, score: u32, sentence_count: u32) -> bool {
        match self.player_mut(id) {
            Some(p) => {
                p.score = score;
                p.sentence_count = sentence_count;
                true
            }
            None => false,
        }
    }

    /// Set a participant's ready flag. Returns `false` if `id` is not seated.
    pub fn set_ready(&mut self, id: PlayerId, ready: bool) -> bool {
        match self.player_mut(id) {
            Some(p) => {
                p.is_ready = ready;
                true
            }
            None => false,
        }
    }

    /// End a running game.
    ///
    /// Returns `true` if this call moved the room to completed. A completed
    /// room is left untouched, and a waiting room cannot be completed.
    pub fn complete(&mut self) -> bool {
        if self.status != RoomStatus::InProgress {
            return false;
        }
        self.status = RoomStatus::Completed;
        self.ended_at = Some(Utc::now());
        true
    }

    /// The other participant, if `id` is seated and the other slot is filled.
    pub fn opponent_of(&self, id: PlayerId) -> Option<&Player> {
        match (&self.slot1, &self.slot2) {
            (Some(p1), other) if p1.id == id => other.as_ref(),
            (other, Some(p2)) if p2.id == id => other.as_ref(),
            _ => None,
        }
    }

    /// The strictly higher scorer. `None` on a tie or with an empty slot.
    pub fn winner(&self) -> Option<&Player> {
        let (p1, p2) = (self.slot1.as_ref()?, self.slot2.as_ref()?);
        match p1.score.cmp(&p2.score) {
            std::cmp::Ordering::Greater => Some(p1),
            std::cmp::Ordering::Less => Some(p2),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.slot1
            .iter_mut()
            .chain(self.slot2.iter_mut())
            .find(|p| p.id == id)
    }
}
