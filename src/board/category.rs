//! Square categories and the fixed board layout.
//!
//! Every square carries one of thirteen placement rules. The label strings
//! are the ones printed on the physical board and round-trip through
//! `Display`/`FromStr`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::SQUARE_COUNT;

/// Placement rule attached to a board square.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Category {
    /// At least three dice showing the same face.
    #[strum(serialize = "AAA")]
    ThreeOfAKind,
    /// At least four dice showing the same face.
    #[strum(serialize = "AAAA")]
    FourOfAKind,
    /// Two different faces, each at least a pair.
    #[strum(serialize = "AA/BB")]
    TwoPairs,
    /// Three different faces, each at least a pair.
    #[strum(serialize = "AA/BB/CC")]
    ThreePairs,
    /// A triple plus a pair of another face.
    #[strum(serialize = "AAA/BB")]
    FullHouse,
    /// Four of a kind plus a pair of another face.
    #[strum(serialize = "AAAA/BB")]
    FourAndPair,
    /// Two different faces, each at least a triple.
    #[strum(serialize = "AAA/BBB")]
    TwoTriples,
    /// Contains 1, 2, 3 and 4.
    #[strum(serialize = "ABCD")]
    SmallRun,
    /// Contains 1, 2, 3, 4 and 5.
    #[strum(serialize = "ABCDE")]
    LargeRun,
    /// Contains 1, 3 and 5.
    #[strum(serialize = "=1,3,5")]
    Odds,
    /// Contains 2, 4 and 6.
    #[strum(serialize = "=2,4,6")]
    Evens,
    /// Selected dice sum to 12 or less.
    #[strum(serialize = "≤12")]
    LowSum,
    /// Selected dice sum to 30 or more.
    #[strum(serialize = "≥30")]
    HighSum,
}

/// Display weight of a square, derived from its point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// 0 or 1 points.
    Plain,
    /// 2 points.
    Accent,
    /// 3 points.
    Strong,
}

impl Category {
    /// Points scored for committing a stone on this category.
    ///
    /// Three-group shapes and four-plus-pair score 3; four of a kind, the
    /// long run and the sum bounds score 2; the remaining counted shapes
    /// score 1. The fixed-set matches carry no points.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Category::TwoPairs
            | Category::ThreeOfAKind
            | Category::SmallRun
            | Category::FullHouse => 1,
            Category::FourOfAKind | Category::LargeRun | Category::LowSum | Category::HighSum => 2,
            Category::ThreePairs | Category::TwoTriples | Category::FourAndPair => 3,
            Category::Odds | Category::Evens => 0,
        }
    }

    /// Display weight for UIs.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self.points() {
            0 | 1 => Tier::Plain,
            2 => Tier::Accent,
            _ => Tier::Strong,
        }
    }
}

/// Row-major category of every square on the 7x7 board.
#[rustfmt::skip]
pub const LAYOUT: [Category; SQUARE_COUNT] = {
    use Category::*;
    [
        TwoPairs, LargeRun, LowSum, ThreeOfAKind, Odds, Evens, ThreeOfAKind,
        Evens, FourAndPair, ThreeOfAKind, ThreePairs, SmallRun, TwoTriples, HighSum,
        SmallRun, FourOfAKind, HighSum, LargeRun, FourAndPair, Odds, FullHouse,
        LowSum, FullHouse, Evens, TwoTriples, LowSum, TwoPairs, LargeRun,
        ThreeOfAKind, LargeRun, ThreePairs, Odds, FourOfAKind, HighSum, TwoPairs,
        Odds, TwoTriples, SmallRun, FourAndPair, FullHouse, ThreePairs, LowSum,
        SmallRun, HighSum, FourOfAKind, TwoPairs, Odds, FourOfAKind, FullHouse,
    ]
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_thirteen_categories() {
        assert_eq!(Category::iter().count(), 13);
    }

    #[test]
    fn test_points_in_range() {
        for category in LAYOUT {
            assert!(category.points() <= 3, "{} out of range", category);
        }
    }

    #[test]
    fn test_point_table() {
        assert_eq!(Category::ThreeOfAKind.points(), 1);
        assert_eq!(Category::TwoPairs.points(), 1);
        assert_eq!(Category::SmallRun.points(), 1);
        assert_eq!(Category::FullHouse.points(), 1);
        assert_eq!(Category::FourOfAKind.points(), 2);
        assert_eq!(Category::LargeRun.points(), 2);
        assert_eq!(Category::LowSum.points(), 2);
        assert_eq!(Category::HighSum.points(), 2);
        assert_eq!(Category::ThreePairs.points(), 3);
        assert_eq!(Category::TwoTriples.points(), 3);
        assert_eq!(Category::FourAndPair.points(), 3);
        assert_eq!(Category::Odds.points(), 0);
        assert_eq!(Category::Evens.points(), 0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Category::Odds.tier(), Tier::Plain);
        assert_eq!(Category::ThreeOfAKind.tier(), Tier::Plain);
        assert_eq!(Category::HighSum.tier(), Tier::Accent);
        assert_eq!(Category::TwoTriples.tier(), Tier::Strong);
    }

    #[test]
    fn test_labels_roundtrip() {
        for category in Category::iter() {
            let label = category.to_string();
            assert_eq!(Category::from_str(&label).unwrap(), category);
        }
        assert_eq!(Category::LowSum.to_string(), "≤12");
        assert_eq!(Category::FourAndPair.to_string(), "AAAA/BB");
        assert!(Category::from_str("AAAAA").is_err());
    }

    #[test]
    fn test_layout_corners() {
        assert_eq!(LAYOUT[0], Category::TwoPairs);
        assert_eq!(LAYOUT[6], Category::ThreeOfAKind);
        assert_eq!(LAYOUT[42], Category::SmallRun);
        assert_eq!(LAYOUT[48], Category::FullHouse);
    }

    #[test]
    fn test_every_category_on_board() {
        for category in Category::iter() {
            assert!(LAYOUT.contains(&category), "{} missing from layout", category);
        }
    }
}
