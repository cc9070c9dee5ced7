//! Application state
//!
//! One owning struct for everything the session mutates: roster, spin
//! engine, history, RNG, and the draft item in the settings form. All
//! mutation goes through the named operations below; the DOM shell never
//! touches fields directly. Platform-free so the whole flow is testable
//! natively.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::history::SpinHistory;
use crate::wheel::{Color, Roster, SpinEngine, SpinResult, WheelError, WheelLayout};

/// Default roster shipped on first load
const DEFAULT_ITEMS: [(&str, Color); 3] = [
    ("Item 1", Color::new(0xff, 0x63, 0x84)),
    ("Item 2", Color::new(0x36, 0xa2, 0xeb)),
    ("Item 3", Color::new(0xff, 0xce, 0x56)),
];

/// Initial suggested color for the add-item form
const INITIAL_DRAFT_COLOR: Color = Color::new(0x4b, 0xc0, 0xc0);

/// Complete session state
#[derive(Debug)]
pub struct App {
    roster: Roster,
    engine: SpinEngine,
    history: SpinHistory,
    rng: Pcg32,
    /// Suggested color for the next item; refreshed after every add
    draft_color: Color,
}

impl App {
    /// Create a session with the default roster and previously persisted
    /// history. The seed drives both spin draws and color suggestions.
    pub fn new(seed: u64) -> Self {
        let mut roster = Roster::new();
        for (name, color) in DEFAULT_ITEMS {
            // Defaults always fit the bounds
            let _ = roster.add(name, color);
        }
        Self {
            roster,
            engine: SpinEngine::new(),
            history: SpinHistory::load(),
            rng: Pcg32::seed_from_u64(seed),
            draft_color: INITIAL_DRAFT_COLOR,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &SpinHistory {
        &self.history
    }

    pub fn draft_color(&self) -> Color {
        self.draft_color
    }

    pub fn rotation_deg(&self) -> f32 {
        self.engine.rotation_deg()
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    pub fn winner(&self) -> Option<&str> {
        self.engine.winner()
    }

    /// Wheel geometry for the current roster; `None` while the roster is empty
    pub fn layout(&self) -> Option<WheelLayout> {
        WheelLayout::for_items(self.roster.items())
    }

    /// Add an item and suggest a fresh color for the next one
    pub fn add_item(&mut self, name: &str, color: Color) -> Result<(), WheelError> {
        self.roster.add(name, color)?;
        self.draft_color = Color::random(&mut self.rng);
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<(), WheelError> {
        self.roster.remove(index).map(|_| ())
    }

    pub fn rename_item(&mut self, index: usize, name: &str) -> Result<(), WheelError> {
        self.roster.rename(index, name)
    }

    pub fn recolor_item(&mut self, index: usize, color: Color) -> Result<(), WheelError> {
        self.roster.recolor(index, color)
    }

    /// Start a spin against the current roster
    pub fn spin(&mut self) -> Result<(), WheelError> {
        self.engine.spin(&self.roster, &mut self.rng)
    }

    /// Advance the spin timer; returns the outcome on the completing tick.
    /// The caller records it via [`App::commit_result`] with a timestamp.
    pub fn tick(&mut self, dt_ms: f32) -> Option<SpinResult> {
        self.engine.tick(dt_ms)
    }

    /// Record a completed spin in the ledger and persist it
    pub fn commit_result(&mut self, result: &SpinResult, date: String) {
        self.history.record(&result.winner, date);
        self.history.save();
    }

    /// Zero the wheel and clear the winner (no-op mid-spin)
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}
