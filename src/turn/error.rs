//! Placement rejections.

use serde::{Deserialize, Serialize};

/// Why a placement attempt was rejected. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum PlaceError {
    /// A stone is already committed on the square.
    #[display("This square is already occupied")]
    AlreadyOccupied,

    /// No dice are selected.
    #[display("Select dice first")]
    NoDiceSelected,

    /// The selected faces do not satisfy the square's category.
    #[display("This combination doesn't match the square requirements")]
    InvalidCombination,
}

impl std::error::Error for PlaceError {}
