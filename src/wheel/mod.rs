//! Deterministic wheel core
//!
//! All selection logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected by the caller
//! - Elapsed-time ticks only, no wall clock
//! - No rendering or platform dependencies

pub mod color;
pub mod error;
pub mod geometry;
pub mod roster;
pub mod spin;

pub use color::Color;
pub use error::WheelError;
pub use geometry::{SegmentLayout, WheelLayout};
pub use roster::{Item, Roster};
pub use spin::{SpinEngine, SpinPhase, SpinResult};
