use std::fmt;

use serde::{Deserialize, Serialize};

/// How a journaling session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// One player racing the clock.
    Solo,
    /// Two players paired in a room, highest score wins.
    Multiplayer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Multiplayer => write!(f, "multiplayer"),
        }
    }
}
