//! Move policies for automated seats.
//!
//! A policy sees the board and the freshly rolled dice and picks a move.
//! `GameSession::play_automated_turn_with` accepts any policy; the session's
//! own `play_automated_turn` uses `FirstMatch`.

use crate::board::Board;
use crate::dice::DiceSet;

use super::search::{find_move, CpuMove};

/// Chooses an automated move.
pub trait MovePolicy: Send + Sync {
    /// The move to make, or `None` to pass.
    fn choose(&self, board: &Board, dice: &DiceSet) -> Option<CpuMove>;
}

/// Smallest dice subset, then first square in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl MovePolicy for FirstMatch {
    fn choose(&self, board: &Board, dice: &DiceSet) -> Option<CpuMove> {
        find_move(board, dice)
    }
}
