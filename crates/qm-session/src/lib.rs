//! Timed journaling sessions for QuicklyMe.
//!
//! A [`SessionController`] counts down the writing time, rescores the entry
//! on every edit and raises [`SessionEvent`]s for the UI. Time comes from an
//! injected [`Clock`], so tests run on a [`ManualClock`].

pub mod clock;
pub mod config;
pub mod event;
pub mod session;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SessionConfig;
pub use event::{EventQueue, SessionEvent};
pub use session::{SessionController, SessionState};
pub use timers::{TimerId, Timers};
