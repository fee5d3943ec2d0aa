//! Error types for matchmaking.

use qm_core::RoomId;
use thiserror::Error;

/// Result type for matchmaking operations.
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors that can occur while finding or playing a match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No room with this ID exists.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// Both slots are taken.
    #[error("room is full: {0}")]
    RoomFull(RoomId),

    /// The player already sits in this room.
    #[error("already joined room {0}")]
    AlreadyJoined(RoomId),

    /// The game cannot end before both players have joined.
    #[error("game has not started in room {0}")]
    NotStarted(RoomId),

    /// The client is not in a room.
    #[error("not in a room")]
    NotInRoom,

    /// The matchmaker is unreachable.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}
