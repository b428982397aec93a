//! Automated players: the move search and the policies built on it.

pub mod policy;
pub mod search;

pub use policy::{FirstMatch, MovePolicy};
pub use search::{find_move, subsets_of_size, CpuMove, MIN_SUBSET};
