//! The six dice and their three-roll cycle.
//!
//! ```text
//! NotRolled(0) -> FirstRoll(1) -> Reroll(2) -> FinalRoll(3)
//! ```
//!
//! The first roll throws all six dice and clears selections. A later roll
//! with nothing selected also throws everything; otherwise only unselected
//! dice are thrown and selected faces stay put. Nothing rolls after the third.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;

/// Dice per turn.
pub const DICE_COUNT: usize = 6;

/// Rolls allowed per turn.
pub const MAX_ROLLS: u8 = 3;

/// Faces of a selection; never more than six.
pub type Faces = SmallVec<[u8; DICE_COUNT]>;

/// One die: its face (`None` before the first roll) and selection flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub face: Option<u8>,
    pub selected: bool,
}

/// A subset of the six dice, bit `i` set when die `i` is included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieMask(pub u8);

impl DieMask {
    /// No dice.
    pub const EMPTY: DieMask = DieMask(0);

    /// Mask over the given die indices.
    #[must_use]
    pub fn of(indices: &[usize]) -> Self {
        Self(indices.iter().fold(0u8, |mask, &i| {
            assert!(i < DICE_COUNT, "die index {} out of range", i);
            mask | 1 << i
        }))
    }

    /// Whether die `index` is in the subset.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Number of dice in the subset.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// True for the empty subset.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices in the subset, ascending.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..DICE_COUNT).filter(move |&i| self.contains(i))
    }
}

/// The six dice plus the roll counter for the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
    roll_count: u8,
}

impl DiceSet {
    /// Unrolled dice at the start of a turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dice showing fixed faces, none selected, as if rolled `roll_count` times.
    ///
    /// Used to replay recorded turns and to analyse positions.
    ///
    /// # Panics
    /// Panics if a face is outside `1..=6` or `roll_count` is not in `1..=3`.
    #[must_use]
    pub fn from_faces(faces: [u8; DICE_COUNT], roll_count: u8) -> Self {
        assert!(
            (1..=MAX_ROLLS).contains(&roll_count),
            "roll count {} out of range",
            roll_count
        );
        let mut dice = [Die::default(); DICE_COUNT];
        for (die, face) in dice.iter_mut().zip(faces) {
            assert!((1..=6).contains(&face), "die face {} out of range", face);
            die.face = Some(face);
        }
        Self { dice, roll_count }
    }

    /// Rolls taken so far this turn.
    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    /// Whether another roll is allowed.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.roll_count < MAX_ROLLS
    }

    /// Whether the dice have been thrown this turn.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.roll_count > 0
    }

    /// All six dice.
    #[must_use]
    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    /// Die at `index`.
    ///
    /// # Panics
    /// Panics if `index >= 6`.
    #[must_use]
    pub fn die(&self, index: usize) -> Die {
        assert!(index < DICE_COUNT, "die index {} out of range", index);
        self.dice[index]
    }

    /// Roll according to the cycle rules. Returns `false` once the rolls are spent.
    pub fn roll(&mut self, rng: &mut GameRng) -> bool {
        if !self.can_roll() {
            return false;
        }

        if self.roll_count == 0 || !self.any_selected() {
            for die in &mut self.dice {
                die.face = Some(rng.roll_die());
                die.selected = false;
            }
        } else {
            for die in self.dice.iter_mut().filter(|d| !d.selected) {
                die.face = Some(rng.roll_die());
            }
        }

        self.roll_count += 1;
        true
    }

    /// Flip the selection of die `index`. Returns `false` before the first roll.
    ///
    /// # Panics
    /// Panics if `index >= 6`.
    pub fn toggle(&mut self, index: usize) -> bool {
        assert!(index < DICE_COUNT, "die index {} out of range", index);
        if !self.is_rolled() {
            return false;
        }
        self.dice[index].selected = !self.dice[index].selected;
        true
    }

    /// Select exactly the dice in `mask`.
    pub fn select_only(&mut self, mask: DieMask) {
        for (i, die) in self.dice.iter_mut().enumerate() {
            die.selected = mask.contains(i);
        }
    }

    /// Whether any die is selected.
    #[must_use]
    pub fn any_selected(&self) -> bool {
        self.dice.iter().any(|d| d.selected)
    }

    /// The current selection as a mask.
    #[must_use]
    pub fn selection(&self) -> DieMask {
        DieMask(
            self.dice
                .iter()
                .enumerate()
                .filter(|(_, d)| d.selected)
                .fold(0u8, |mask, (i, _)| mask | 1 << i),
        )
    }

    /// Faces of the selected dice, in die order.
    #[must_use]
    pub fn selected_faces(&self) -> Faces {
        self.faces_of(self.selection())
    }

    /// Faces of the dice in `mask`, in die order. Unrolled dice are skipped.
    #[must_use]
    pub fn faces_of(&self, mask: DieMask) -> Faces {
        mask.indices().filter_map(|i| self.dice[i].face).collect()
    }

    /// Back to the unrolled start-of-turn state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
