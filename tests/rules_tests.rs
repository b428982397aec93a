//! Placement predicate and point table tests.
//!
//! Each category is checked against hand-picked selections, and proptest
//! checks that the predicate ignores the order of the selected faces.

use proptest::prelude::*;
use strum::IntoEnumIterator;

use kivi::board::LAYOUT;
use kivi::{is_valid_placement, Category};

/// Every square on the board scores 0..=3.
#[test]
fn test_layout_points_in_range() {
    for category in LAYOUT {
        assert!(category.points() <= 3, "{}", category);
    }
}

#[test]
fn test_three_of_a_kind() {
    assert!(is_valid_placement(Category::ThreeOfAKind, &[3, 3, 3, 1, 5]));
    assert!(!is_valid_placement(Category::ThreeOfAKind, &[3, 3, 1, 5, 6]));
}

#[test]
fn test_low_sum() {
    assert!(is_valid_placement(Category::LowSum, &[2, 3, 4]));
    assert!(is_valid_placement(Category::LowSum, &[6, 6]));
    assert!(!is_valid_placement(Category::LowSum, &[6, 6, 6]));
}

#[test]
fn test_high_sum() {
    assert!(is_valid_placement(Category::HighSum, &[6, 6, 6, 6, 6]));
    assert!(is_valid_placement(Category::HighSum, &[5, 5, 5, 5, 5, 5]));
    assert!(!is_valid_placement(Category::HighSum, &[6, 6, 6, 6, 5]));
}

/// Fixed-set categories allow extra dice.
#[test]
fn test_fixed_sets_allow_extras() {
    assert!(is_valid_placement(Category::Odds, &[1, 3, 5, 5]));
    assert!(is_valid_placement(Category::Odds, &[1, 2, 3, 5]));
    assert!(is_valid_placement(Category::Odds, &[1, 2, 3, 4, 5]));
    assert!(!is_valid_placement(Category::Odds, &[1, 3, 3]));

    assert!(is_valid_placement(Category::Evens, &[2, 4, 6]));
    assert!(is_valid_placement(Category::Evens, &[6, 4, 1, 2]));
    assert!(!is_valid_placement(Category::Evens, &[2, 4, 4, 5]));
}

#[test]
fn test_runs() {
    assert!(is_valid_placement(Category::SmallRun, &[4, 3, 2, 1]));
    assert!(is_valid_placement(Category::SmallRun, &[1, 2, 3, 4, 4, 6]));
    assert!(!is_valid_placement(Category::SmallRun, &[2, 3, 4, 5]));

    assert!(is_valid_placement(Category::LargeRun, &[1, 2, 3, 4, 5]));
    assert!(!is_valid_placement(Category::LargeRun, &[2, 3, 4, 5, 6]));
}

#[test]
fn test_pair_shapes() {
    assert!(is_valid_placement(Category::TwoPairs, &[2, 2, 5, 5]));
    assert!(is_valid_placement(Category::TwoPairs, &[2, 2, 2, 5, 5]));
    assert!(!is_valid_placement(Category::TwoPairs, &[2, 2, 2, 2]));

    assert!(is_valid_placement(Category::ThreePairs, &[1, 1, 4, 4, 6, 6]));
    assert!(!is_valid_placement(Category::ThreePairs, &[1, 1, 4, 4, 6]));
}

#[test]
fn test_group_shapes() {
    assert!(is_valid_placement(Category::FourOfAKind, &[4, 4, 4, 4]));
    assert!(!is_valid_placement(Category::FourOfAKind, &[4, 4, 4, 1]));

    assert!(is_valid_placement(Category::FullHouse, &[2, 2, 2, 6, 6]));
    assert!(is_valid_placement(Category::FourAndPair, &[3, 3, 3, 3, 1, 1]));
    assert!(!is_valid_placement(Category::FourAndPair, &[3, 3, 3, 3, 1, 2]));

    assert!(is_valid_placement(Category::TwoTriples, &[1, 1, 1, 6, 6, 6]));
    assert!(!is_valid_placement(Category::TwoTriples, &[1, 1, 1, 6, 6]));
}

/// Each face takes at most one role: two triples are not a full house.
#[test]
fn test_greedy_role_scan() {
    assert!(!is_valid_placement(Category::FullHouse, &[3, 3, 3, 5, 5, 5]));
    assert!(is_valid_placement(Category::FullHouse, &[3, 3, 3, 3, 5, 5]));
}

#[test]
fn test_empty_selection_matches_nothing() {
    for category in Category::iter() {
        assert!(!is_valid_placement(category, &[]), "{}", category);
    }
}

fn selection() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 1..=6)
}

proptest! {
    #[test]
    fn prop_order_independent(faces in selection(), seed in any::<u64>()) {
        let mut shuffled = faces.clone();
        // Deterministic rotation plus reversal covers reordering without an RNG.
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        for category in Category::iter() {
            prop_assert_eq!(
                is_valid_placement(category, &faces),
                is_valid_placement(category, &shuffled),
                "{} {:?} vs {:?}", category, faces, shuffled
            );
        }
    }

    #[test]
    fn prop_adding_dice_keeps_count_shapes(faces in selection(), extra in 1u8..=6) {
        prop_assume!(faces.len() < 6);
        let mut more = faces.clone();
        more.push(extra);

        // Containment and group counts can only grow with more dice.
        for category in [
            Category::ThreeOfAKind,
            Category::FourOfAKind,
            Category::TwoPairs,
            Category::ThreePairs,
            Category::TwoTriples,
            Category::SmallRun,
            Category::LargeRun,
            Category::Odds,
            Category::Evens,
            Category::HighSum,
        ] {
            if is_valid_placement(category, &faces) {
                prop_assert!(is_valid_placement(category, &more), "{} {:?}", category, more);
            }
        }
    }
}
