//! Core types for QuicklyMe: journal entries, players, rooms, and prompts.
//!
//! This crate holds the plain data records shared by the scoring, session,
//! and matchmaking crates. Every record serializes to JSON with camelCase
//! field names so a front end or transport can exchange them as-is.

/// Identifiers for entries, players, and rooms.
pub mod id;
/// The journal entry written during a session.
pub mod journal;
/// Solo or head-to-head play.
pub mod mode;
/// A matchmaking participant.
pub mod player;
/// The fixed prompt list and random selection.
pub mod prompt;
/// Two-slot rooms and their lifecycle.
pub mod room;

/// Re-export identifier types.
pub use id::{EntryId, PlayerId, RoomId};
/// Re-export the journal entry.
pub use journal::JournalEntry;
/// Re-export the game mode.
pub use mode::GameMode;
/// Re-export the player record.
pub use player::Player;
/// Re-export prompt selection.
pub use prompt::{PROMPTS, random_prompt};
/// Re-export room types.
pub use room::{Room, RoomStatus};
