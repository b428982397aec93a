//! Core engine types: players, configuration, RNG, commands, session state.
//!
//! Everything a game needs to exist lives here; the rules that move it
//! forward live in `dice` and `turn`.

pub mod player;
pub mod rng;
pub mod config;
pub mod command;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{
    Color, GameConfig, PlayerConfig, DEFAULT_STONES, DEFAULT_TURN_SECONDS, MAX_PLAYERS,
    SEAT_COLORS,
};
pub use command::{Command, CommandOutcome, IgnoreReason, PlacedStone, TurnRecord};
pub use state::{GameOutcome, GameSession, SessionView, SquareView, TurnPhase};
