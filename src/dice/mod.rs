//! Dice: the placement predicates and the per-turn roll cycle.

pub mod roll;
pub mod rules;

pub use roll::{DiceSet, Die, DieMask, Faces, DICE_COUNT, MAX_ROLLS};
pub use rules::{is_valid_placement, FaceCounts};
