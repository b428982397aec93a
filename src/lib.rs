//! # kivi
//!
//! Rule engine and turn state machine for Kivi, a dice-placement board game
//! for up to four players.
//!
//! Each turn a player rolls six dice up to three times, keeps dice between
//! rolls, then places a stone on a square of the 7x7 board whose category the
//! selected dice satisfy. The game ends when a player runs out of stones or
//! the board fills; the highest score wins.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `GameSession` holds all game state. Commands take
//!    `&mut self`, so a turn can never end twice or re-entrantly.
//!
//! 2. **Headless**: No rendering, no wall-clock timers. A UI issues
//!    `Command`s, including clock ticks, and reads `SessionView` snapshots.
//!
//! 3. **Deterministic**: All dice come from a seedable `GameRng`; a seed and a
//!    command log replay a game exactly.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, RNG, commands, session state
//! - `board`: Categories, the fixed layout, squares and stones
//! - `dice`: The roll cycle and the placement predicates
//! - `turn`: Turn clock, placement errors, turn operations
//! - `cpu`: Move search and policies for automated seats

pub mod core;
pub mod board;
pub mod dice;
pub mod turn;
pub mod cpu;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, PlayerConfig, SEAT_COLORS, MAX_PLAYERS,
    Player, PlayerId, PlayerMap,
    GameRng, GameRngState,
    Command, CommandOutcome, IgnoreReason, PlacedStone, TurnRecord,
    GameOutcome, GameSession, SessionView, SquareView, TurnPhase,
};

pub use crate::board::{Board, Category, Square, SquarePos, Tier, BOARD_SIZE, SQUARE_COUNT};

pub use crate::dice::{is_valid_placement, DiceSet, Die, DieMask, DICE_COUNT, MAX_ROLLS};

pub use crate::turn::{PlaceError, TimeLeft, TurnClock};

pub use crate::cpu::{find_move, CpuMove, FirstMatch, MovePolicy};
