//! Commands into the engine and records of what they did.
//!
//! A UI (or the turn clock) never mutates the session directly. It issues
//! `Command`s through `GameSession::apply`, which makes the session a single
//! serialised command stream: a clock tick is just another command.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{Category, SquarePos};

/// A discrete player or clock input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Roll the dice.
    Roll,
    /// Flip the selection of one die (index `0..6`).
    ToggleDie(usize),
    /// Put the tentative stone on a square.
    Place(SquarePos),
    /// Finish the turn, committing any tentative stone.
    EndTurn,
    /// Freeze the clock and block play commands.
    Pause,
    /// Unfreeze.
    Resume,
    /// Time elapsed since the previous tick.
    Tick(Duration),
}

/// Why a well-formed command had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The game is paused.
    Paused,
    /// The game has ended.
    GameOver,
    /// The current seat is driven by the automated policy.
    AutomatedTurn,
    /// The current seat is human; the automated policy may not act.
    HumanTurn,
    /// Nothing has been rolled this turn.
    NotRolled,
    /// All three rolls are spent.
    NoRollsLeft,
    /// The turn cannot end by command before a stone is down.
    NoStonePlaced,
    /// Pause while paused, or resume while running.
    AlreadyInMode,
}

/// Result of a command that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// The command changed the session.
    Applied,
    /// The command was a no-op.
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    /// Whether the command changed the session.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }
}

/// A stone committed at the end of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedStone {
    pub square: SquarePos,
    pub category: Category,
    pub points: u32,
}

/// One finished turn, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,
    pub player: PlayerId,
    /// `None` when the turn ended without a stone (pass or timeout).
    pub placed: Option<PlacedStone>,
    /// The clock ran out before the player ended the turn.
    pub timed_out: bool,
}
