//! Two-player matchmaking for QuicklyMe.
//!
//! A [`Matchmaker`] is shared by `Arc` between every [`MatchClient`]. Clients
//! see other players' changes by polling their room through a
//! [`RoomWatcher`].

pub mod client;
pub mod config;
pub mod error;
pub mod matchmaker;
pub mod watcher;

pub use client::MatchClient;
pub use config::MatchConfig;
pub use error::{MatchError, MatchResult};
pub use matchmaker::Matchmaker;
pub use watcher::{RoomEvent, RoomWatcher};
