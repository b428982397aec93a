//! Game session: the single owned root of all game state.
//!
//! ## GameSession
//!
//! - Player roster with scores and remaining stones
//! - Board with committed stones
//! - Current turn: dice, tentative stone, clock
//! - Pause flag, turn history, terminal outcome
//! - Dice RNG
//!
//! Everything the UI renders is readable here or through one consistent
//! `SessionView` snapshot. All mutation goes through the turn operations in
//! `crate::turn`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::command::TurnRecord;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, Category, SquarePos};
use crate::dice::{is_valid_placement, DiceSet, Die, DICE_COUNT};
use crate::turn::{TimeLeft, TurnClock};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No roll yet this turn.
    AwaitingRoll,
    /// Rolled; no tentative stone.
    AwaitingPlacement,
    /// A tentative stone is down; the turn can be ended.
    AwaitingEndTurn,
    /// Terminal.
    GameOver,
}

/// Final result, available once the game has ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `(name, score)` per seat, in seat order.
    pub final_scores: Vec<(String, u32)>,
    /// Highest score; ties go to the earliest seat.
    pub winner: PlayerId,
}

/// One square as a UI draws it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareView {
    pub pos: SquarePos,
    pub category: Category,
    pub occupied: bool,
    /// The current player's tentative stone is here.
    pub pending: bool,
}

/// Consistent snapshot of everything the UI can query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub current_player: PlayerId,
    pub players: Vec<Player>,
    pub squares: Vec<SquareView>,
    pub dice: [Die; DICE_COUNT],
    pub roll_count: u8,
    pub time_left: TimeLeft,
    pub paused: bool,
    pub phase: TurnPhase,
    pub outcome: Option<GameOutcome>,
}

/// The game.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) current: PlayerId,
    pub(crate) board: Board,
    pub(crate) dice: DiceSet,
    /// Tentative stone for the current turn; never on an occupied square.
    pub(crate) pending: Option<SquarePos>,
    pub(crate) clock: TurnClock,
    pub(crate) paused: bool,
    /// 1-based number of the turn in progress.
    pub(crate) turn_number: u32,
    pub(crate) history: Vector<TurnRecord>,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) rng: GameRng,
}

impl GameSession {
    // === Players ===

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whose turn it is. After the game ends this is the seat that would have
    /// moved next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// All seats in turn order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    // === Board and dice ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.dice.roll_count()
    }

    /// Square holding the tentative stone, if any.
    #[must_use]
    pub fn pending(&self) -> Option<SquarePos> {
        self.pending
    }

    #[must_use]
    pub fn is_pending_at(&self, pos: SquarePos) -> bool {
        self.pending == Some(pos)
    }

    /// Squares the current selection could take: empty or holding the
    /// tentative stone, and satisfied by the selected faces.
    ///
    /// Empty before the first roll or with nothing selected.
    #[must_use]
    pub fn valid_squares(&self) -> Vec<SquarePos> {
        let faces = self.dice.selected_faces();
        if !self.dice.is_rolled() || faces.is_empty() {
            return Vec::new();
        }
        self.board
            .iter()
            .filter(|(pos, square)| !square.occupied || self.is_pending_at(*pos))
            .filter(|(_, square)| is_valid_placement(square.category, &faces))
            .map(|(pos, _)| pos)
            .collect()
    }

    // === Turn state ===

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.outcome.is_some() {
            TurnPhase::GameOver
        } else if !self.dice.is_rolled() {
            TurnPhase::AwaitingRoll
        } else if self.pending.is_none() {
            TurnPhase::AwaitingPlacement
        } else {
            TurnPhase::AwaitingEndTurn
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Whether the roll control should be enabled.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        !self.paused && !self.is_game_over() && self.dice.can_roll()
    }

    /// Whether the end-turn control should be enabled.
    #[must_use]
    pub fn can_end_turn(&self) -> bool {
        !self.paused && !self.is_game_over() && self.pending.is_some()
    }

    /// Remaining time in the current turn.
    #[must_use]
    pub fn time_left(&self) -> TimeLeft {
        self.clock.time_left()
    }

    #[must_use]
    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Finished turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Seed of the dice stream; replaying with it reproduces the game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether the current seat is waiting on the automated policy.
    #[must_use]
    pub fn needs_automated_move(&self) -> bool {
        !self.paused && !self.is_game_over() && !self.players[self.current].is_human
    }

    /// Snapshot of every query at once.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            current_player: self.current,
            players: self.players.values().cloned().collect(),
            squares: self
                .board
                .iter()
                .map(|(pos, square)| SquareView {
                    pos,
                    category: square.category,
                    occupied: square.occupied,
                    pending: self.is_pending_at(pos),
                })
                .collect(),
            dice: *self.dice.dice(),
            roll_count: self.dice.roll_count(),
            time_left: self.clock.time_left(),
            paused: self.paused,
            phase: self.phase(),
            outcome: self.outcome.clone(),
        }
    }
}
