//! Placement predicates: does a multiset of selected die faces satisfy a category?
//!
//! Every check is a "contains at least" test. Extra dice that play no part in
//! the shape are allowed, so `[1, 2, 3, 4, 5]` satisfies `=1,3,5`.
//!
//! Multi-group shapes (`AAA/BB`, `AAAA/BB`) assign roles by scanning faces
//! 1 through 6: a face whose count reaches the big-group size takes that role
//! and is never considered for the pair. `[3, 3, 3, 5, 5, 5]` is therefore
//! not `AAA/BB`.

use crate::board::Category;

/// Face value counts for a selection, indexed by face (slot 0 unused).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; 7]);

impl FaceCounts {
    /// Tally the given faces.
    ///
    /// # Panics
    /// Panics if a face is outside `1..=6`.
    #[must_use]
    pub fn of(faces: &[u8]) -> Self {
        let mut counts = [0u8; 7];
        for &face in faces {
            assert!((1..=6).contains(&face), "die face {} out of range", face);
            counts[face as usize] += 1;
        }
        Self(counts)
    }

    /// How many dice show `face`.
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        self.0[face as usize]
    }

    /// Number of distinct faces shown at least `n` times.
    #[must_use]
    pub fn groups_of_at_least(&self, n: u8) -> usize {
        self.0[1..].iter().filter(|&&c| c >= n).count()
    }

    /// Whether every face in `faces` appears at least once.
    #[must_use]
    pub fn contains_all(&self, faces: &[u8]) -> bool {
        faces.iter().all(|&face| self.count(face) > 0)
    }

    /// A group of `big` plus a pair on a different face, roles taken in face order.
    fn group_and_pair(&self, big: u8) -> bool {
        let mut has_group = false;
        let mut has_pair = false;
        for &c in &self.0[1..] {
            if c >= big {
                has_group = true;
            } else if c >= 2 {
                has_pair = true;
            }
        }
        has_group && has_pair
    }
}

/// Whether `faces` may be placed on a square of `category`.
///
/// Order of `faces` does not matter. An empty selection is never valid.
#[must_use]
pub fn is_valid_placement(category: Category, faces: &[u8]) -> bool {
    if faces.is_empty() {
        return false;
    }

    let counts = FaceCounts::of(faces);
    match category {
        Category::ThreeOfAKind => counts.groups_of_at_least(3) >= 1,
        Category::FourOfAKind => counts.groups_of_at_least(4) >= 1,
        Category::TwoPairs => counts.groups_of_at_least(2) >= 2,
        Category::ThreePairs => counts.groups_of_at_least(2) >= 3,
        Category::FullHouse => counts.group_and_pair(3),
        Category::FourAndPair => counts.group_and_pair(4),
        Category::TwoTriples => counts.groups_of_at_least(3) >= 2,
        Category::SmallRun => counts.contains_all(&[1, 2, 3, 4]),
        Category::LargeRun => counts.contains_all(&[1, 2, 3, 4, 5]),
        Category::Odds => counts.contains_all(&[1, 3, 5]),
        Category::Evens => counts.contains_all(&[2, 4, 6]),
        Category::LowSum => sum(faces) <= 12,
        Category::HighSum => sum(faces) >= 30,
    }
}

fn sum(faces: &[u8]) -> u32 {
    faces.iter().map(|&f| u32::from(f)).sum()
}
