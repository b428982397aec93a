//! Turn flow: the per-turn clock, placement errors, and the operations that
//! drive a `GameSession` from roll to end of turn.

pub mod clock;
pub mod controller;
pub mod error;

pub use clock::{TimeLeft, TurnClock};
pub use error::PlaceError;
