use serde::{Deserialize, Serialize};

use crate::id::PlayerId;

/// A participant in a two-player room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Latest score reported by the player's session.
    pub score: u32,
    /// Latest sentence count reported by the player's session.
    pub sentence_count: u32,
    /// Whether the player has signalled readiness.
    pub is_ready: bool,
}

impl Player {
    /// Create a player with a random ID and a zeroed score.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::new(), name)
    }

    /// Create a player with a pre-assigned ID.
    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            sentence_count: 0,
            is_ready: false,
        }
    }
}
