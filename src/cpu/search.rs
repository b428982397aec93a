//! Exhaustive first-match move search.
//!
//! Subset sizes are tried smallest first from two dice upward. Within a size,
//! subsets come in lexicographic order of die indices (include-first
//! depth-first enumeration) and squares in row-major order. The first
//! (subset, square) pair that satisfies the square's category wins.
//!
//! Single dice are never tried even though a lone die can satisfy a low-sum
//! square; the automated player always commits at least two dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, SquarePos};
use crate::dice::{is_valid_placement, DiceSet, DieMask, DICE_COUNT};

/// Smallest subset the search considers.
pub const MIN_SUBSET: usize = 2;

/// A complete move: which dice to select and where to place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuMove {
    pub dice: DieMask,
    pub square: SquarePos,
}

/// All `k`-dice subsets in lexicographic order.
///
/// # Panics
/// Panics if `k > 6`.
#[must_use]
pub fn subsets_of_size(k: usize) -> Vec<DieMask> {
    assert!(k <= DICE_COUNT, "cannot choose {} of {} dice", k, DICE_COUNT);

    let mut out = Vec::new();
    // (next index to consider, mask so far)
    let mut stack: SmallVec<[(usize, u8); 16]> = SmallVec::new();
    stack.push((0, 0));

    while let Some((start, mask)) = stack.pop() {
        let chosen = mask.count_ones() as usize;
        if chosen == k {
            out.push(DieMask(mask));
            continue;
        }
        let needed = k - chosen;
        // Reverse push so the lowest index pops first.
        for i in (start..=DICE_COUNT - needed).rev() {
            stack.push((i + 1, mask | 1 << i));
        }
    }
    out
}

/// First legal move for the current dice, or `None` when nothing fits.
///
/// Returns `None` before the first roll.
#[must_use]
pub fn find_move(board: &Board, dice: &DiceSet) -> Option<CpuMove> {
    if !dice.is_rolled() {
        return None;
    }

    (MIN_SUBSET..=DICE_COUNT)
        .flat_map(subsets_of_size)
        .find_map(|mask| {
            let faces = dice.faces_of(mask);
            board
                .unoccupied()
                .find(|&pos| is_valid_placement(board.category(pos), &faces))
                .map(|square| CpuMove { dice: mask, square })
        })
}
