//! spinnn - A randomized-selection spinner wheel
//!
//! Core modules:
//! - `wheel`: Deterministic wheel core (geometry, spin engine, roster, colors)
//! - `history`: Persisted spin history ledger
//! - `app`: Application state struct wiring the core together
//!
//! The DOM presentation shell lives in `main.rs` and only runs on wasm32.

pub mod app;
pub mod history;
pub mod wheel;

pub use app::App;
pub use history::SpinHistory;
pub use wheel::{Color, Roster, SpinEngine, WheelError, WheelLayout};

use glam::Vec2;

/// Wheel configuration constants
pub mod consts {
    /// Maximum number of roster items
    pub const MAX_ITEMS: usize = 12;
    /// Minimum roster size required to spin
    pub const MIN_ITEMS_TO_SPIN: usize = 2;
    /// Maximum persisted history entries
    pub const MAX_HISTORY: usize = 50;

    /// Spin animation duration (matches the CSS transition on the wheel)
    pub const SPIN_DURATION_MS: f32 = 5000.0;
    /// Full-rotation draw bounds (inclusive) for a convincing multi-turn spin
    pub const MIN_FULL_ROTATIONS: u32 = 5;
    pub const MAX_FULL_ROTATIONS: u32 = 10;

    /// Wheel radius in CSS pixels (500px wheel surface)
    pub const WHEEL_RADIUS: f32 = 250.0;
    /// Radial distance of label anchors from the wheel center
    pub const LABEL_RADIUS: f32 = 200.0;
}

/// Convert a clockwise-from-top wheel angle (degrees) to screen coordinates
/// relative to the wheel center, at the given radius.
///
/// Screen Y grows downward, so 0 degrees maps to (0, -r) and 90 degrees
/// (3 o'clock) maps to (r, 0).
#[inline]
pub fn wheel_angle_to_screen(angle_deg: f32, radius: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(radius * rad.sin(), -radius * rad.cos())
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid of a float just below zero can round up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}
