//! The 7x7 board: fixed categories plus committed stones.
//!
//! Squares never change category. `occupied` flips from false to true once,
//! when a turn ends with a stone on the square, and never reverts. Tentative
//! stones live in the turn state, not here.

pub mod category;
pub mod square;

pub use category::{Category, Tier, LAYOUT};
pub use square::{Square, SquareOutOfRange, SquarePos};

use serde::{Deserialize, Serialize};

/// Squares per side.
pub const BOARD_SIZE: usize = 7;

/// Total squares.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board laid out from `LAYOUT` with no stones.
    #[must_use]
    pub fn new() -> Self {
        Self {
            squares: LAYOUT.iter().copied().map(Square::new).collect(),
        }
    }

    /// The square at `pos`.
    #[must_use]
    pub fn square(&self, pos: SquarePos) -> &Square {
        &self.squares[pos.index()]
    }

    /// Category of the square at `pos`.
    #[must_use]
    pub fn category(&self, pos: SquarePos) -> Category {
        self.square(pos).category
    }

    /// Whether a stone is committed at `pos`.
    #[must_use]
    pub fn is_occupied(&self, pos: SquarePos) -> bool {
        self.square(pos).occupied
    }

    /// Commit a stone at `pos`.
    ///
    /// # Panics
    /// Panics if the square already holds a stone.
    pub fn occupy(&mut self, pos: SquarePos) {
        let square = &mut self.squares[pos.index()];
        assert!(!square.occupied, "square {} is already occupied", pos);
        square.occupied = true;
    }

    /// True when every square holds a stone.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| s.occupied)
    }

    /// Number of squares holding a stone.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.occupied).count()
    }

    /// Empty squares in row-major order.
    pub fn unoccupied(&self) -> impl Iterator<Item = SquarePos> + '_ {
        self.iter()
            .filter(|(_, square)| !square.occupied)
            .map(|(pos, _)| pos)
    }

    /// All squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (SquarePos, &Square)> {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, square)| (SquarePos::from_index(i), square))
    }
}
