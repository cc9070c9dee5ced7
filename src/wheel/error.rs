//! Error taxonomy for wheel operations
//!
//! Every variant here is a rejected request, not a crash: validation
//! failures surface to the user and leave state untouched.

use thiserror::Error;

use crate::consts::{MAX_ITEMS, MIN_ITEMS_TO_SPIN};

/// Errors returned by roster and spin operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    /// Spin requested with too few items on the wheel
    #[error("add at least {MIN_ITEMS_TO_SPIN} items to spin the wheel")]
    NotEnoughItems,

    /// Add requested with a name that is empty after trimming
    #[error("item name cannot be empty")]
    EmptyName,

    /// Add requested while the roster is at capacity
    #[error("the wheel holds at most {MAX_ITEMS} items")]
    RosterFull,

    /// Index-based operation outside the roster bounds
    #[error("no item at index {index} (roster has {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Color string is not a `#RRGGBB` value
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}
