//! Board coordinates and squares.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::{BOARD_SIZE, SQUARE_COUNT};

/// Row/column address of a square, both in `0..7`.
///
/// Only constructible on the board: deserialization rejects off-board
/// coordinates with `SquareOutOfRange`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquarePos")]
pub struct SquarePos {
    row: u8,
    col: u8,
}

/// Unchecked wire form of `SquarePos`.
#[derive(Deserialize)]
struct RawSquarePos {
    row: u8,
    col: u8,
}

/// A row or column outside the 7x7 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("square ({row}, {col}) is off the board")]
pub struct SquareOutOfRange {
    pub row: u8,
    pub col: u8,
}

impl std::error::Error for SquareOutOfRange {}

impl TryFrom<RawSquarePos> for SquarePos {
    type Error = SquareOutOfRange;

    fn try_from(raw: RawSquarePos) -> Result<Self, Self::Error> {
        Self::checked(raw.row, raw.col).ok_or(SquareOutOfRange {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl SquarePos {
    /// Create a position.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the board.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "square ({}, {}) is off the board",
            row,
            col
        );
        Self { row, col }
    }

    /// Create a position, or `None` if it is off the board.
    #[must_use]
    pub fn checked(row: u8, col: u8) -> Option<Self> {
        ((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Position of the `index`-th square in row-major order.
    ///
    /// # Panics
    /// Panics if `index >= 49`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < SQUARE_COUNT, "square index {} out of range", index);
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..49`.
    #[must_use]
    pub fn index(self) -> usize {
        debug_assert!(
            (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE,
            "square ({}, {}) is off the board",
            self.row,
            self.col
        );
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// All 49 positions in row-major order.
    pub fn all() -> impl Iterator<Item = SquarePos> {
        (0..SQUARE_COUNT).map(Self::from_index)
    }
}

impl std::fmt::Display for SquarePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One square: a fixed category and whether a stone has been committed on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub category: Category,
    pub occupied: bool,
}

impl Square {
    /// An empty square of the given category.
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            occupied: false,
        }
    }

    /// Points a stone here is worth.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.category.points()
    }
}
