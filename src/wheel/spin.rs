//! Spin engine
//!
//! Decides the outcome of one spin and the rotation that visually justifies
//! it. The decision is made instantly at spin time; the reveal is deferred
//! until the fixed animation duration has elapsed, driven by `tick` with
//! caller-supplied elapsed time. No wall clock here, so tests can complete
//! a spin without waiting.
//!
//! Phases: Idle -> Spinning -> Idle (winner set) -> reset or next spin.

use rand::Rng;

use super::error::WheelError;
use super::roster::{Item, Roster};
use crate::consts::{MAX_FULL_ROTATIONS, MIN_FULL_ROTATIONS, MIN_ITEMS_TO_SPIN, SPIN_DURATION_MS};
use crate::normalize_deg;

/// Current engine phase
#[derive(Debug, Clone, PartialEq)]
pub enum SpinPhase {
    Idle,
    /// Mid-spin: reveal pending. The roster is snapshotted at spin start so
    /// edits made while the wheel turns cannot shift or orphan the winner.
    Spinning {
        remaining_ms: f32,
        snapshot: Vec<Item>,
    },
}

/// Outcome of a completed spin
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    /// Winning item name, resolved against the spin-start snapshot
    pub winner: String,
    /// Roster index of the winner within that snapshot
    pub index: usize,
}

/// Spin state: cumulative rotation, phase, and last winner
#[derive(Debug, Clone, PartialEq)]
pub struct SpinEngine {
    rotation_deg: f32,
    phase: SpinPhase,
    winner: Option<String>,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinEngine {
    pub fn new() -> Self {
        Self {
            rotation_deg: 0.0,
            phase: SpinPhase::Idle,
            winner: None,
        }
    }

    /// Total degrees the wheel has turned this session. Monotonically
    /// non-decreasing except through `reset`, so the CSS transform animates
    /// continuously across spins instead of snapping backwards.
    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Winner of the most recent completed spin, if any
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Start a spin. Needs at least two items; a request while already
    /// spinning is silently ignored (one spin in flight at most).
    pub fn spin(&mut self, roster: &Roster, rng: &mut impl Rng) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Ok(());
        }
        let n = roster.len();
        if n < MIN_ITEMS_TO_SPIN {
            return Err(WheelError::NotEnoughItems);
        }

        let winning_segment = rng.random_range(0..n as u32);
        let full_rotations = rng.random_range(MIN_FULL_ROTATIONS..=MAX_FULL_ROTATIONS);
        self.rotation_deg += added_rotation(winning_segment, full_rotations, n);
        self.winner = None;
        self.phase = SpinPhase::Spinning {
            remaining_ms: SPIN_DURATION_MS,
            snapshot: roster.items().to_vec(),
        };
        Ok(())
    }

    /// Advance the spin timer by `dt_ms`. Returns the result exactly once,
    /// on the tick where the animation duration elapses.
    pub fn tick(&mut self, dt_ms: f32) -> Option<SpinResult> {
        let SpinPhase::Spinning {
            remaining_ms,
            snapshot,
        } = &mut self.phase
        else {
            return None;
        };

        *remaining_ms -= dt_ms;
        if *remaining_ms > 0.0 {
            return None;
        }

        // Decode the winner from the final cumulative rotation, not the
        // pre-spin one: the pointer is stationary at the top while the
        // wheel rotates clockwise underneath it.
        let index = winning_index(self.rotation_deg, snapshot.len());
        let winner = snapshot[index].name.clone();
        self.winner = Some(winner.clone());
        self.phase = SpinPhase::Idle;
        Some(SpinResult { winner, index })
    }

    /// Zero the rotation and clear the winner. Ignored mid-spin; the reveal
    /// cannot be cancelled once a spin has started.
    pub fn reset(&mut self) {
        if self.is_spinning() {
            return;
        }
        self.rotation_deg = 0.0;
        self.winner = None;
    }
}

/// Degrees added by one spin: whole rotations plus the drawn segment offset
pub fn added_rotation(winning_segment: u32, full_rotations: u32, n: usize) -> f32 {
    let degrees_per_segment = 360.0 / n as f32;
    full_rotations as f32 * 360.0 + winning_segment as f32 * degrees_per_segment
}

/// Index of the segment under the top pointer after the wheel has rotated
/// clockwise by `rotation_deg`. Always in [0, n).
///
/// The inversion (n - 1 - k) is deliberate: segment indices grow clockwise,
/// but rotating the wheel clockwise carries lower-indexed segments past the
/// pointer first.
pub fn winning_index(rotation_deg: f32, n: usize) -> usize {
    debug_assert!(n > 0);
    let degrees_per_segment = 360.0 / n as f32;
    let k = (normalize_deg(rotation_deg) / degrees_per_segment) as usize;
    n - 1 - k.min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::color::Color;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn roster(n: usize) -> Roster {
        let mut roster = Roster::new();
        for i in 0..n {
            roster
                .add(&format!("Item {}", i + 1), Color::new(0xff, 0x63, 0x84))
                .unwrap();
        }
        roster
    }

    /// Worked scenario: roster of 3, winning_segment=1, full_rotations=5
    /// => added 1920 degrees, 1920 mod 360 = 120,
    /// index 3 - 1 - floor(120/120) = 1.
    #[test]
    fn test_worked_scenario_three_items() {
        let added = added_rotation(1, 5, 3);
        assert_eq!(added, 1920.0);
        assert_eq!(winning_index(added, 3), 1);
    }

    #[test]
    fn test_winning_index_zero_rotation() {
        // No rotation: the pointer sits at the boundary of the last segment
        assert_eq!(winning_index(0.0, 3), 2);
        assert_eq!(winning_index(0.0, 1), 0);
    }

    #[test]
    fn test_spin_rejected_below_two_items() {
        let mut engine = SpinEngine::new();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            engine.spin(&roster(1), &mut rng),
            Err(WheelError::NotEnoughItems)
        );
        assert_eq!(engine.rotation_deg(), 0.0);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut engine = SpinEngine::new();
        let mut rng = Pcg32::seed_from_u64(2);
        engine.spin(&roster(3), &mut rng).unwrap();
        let rotation = engine.rotation_deg();
        engine.spin(&roster(3), &mut rng).unwrap();
        assert_eq!(engine.rotation_deg(), rotation);
    }

    #[test]
    fn test_tick_reveals_winner_once() {
        let mut engine = SpinEngine::new();
        let mut rng = Pcg32::seed_from_u64(3);
        engine.spin(&roster(4), &mut rng).unwrap();

        assert!(engine.tick(1000.0).is_none());
        assert!(engine.is_spinning());
        assert!(engine.winner().is_none());

        let result = engine.tick(4000.0).expect("spin should complete");
        assert!(result.index < 4);
        assert_eq!(engine.winner(), Some(result.winner.as_str()));
        assert!(!engine.is_spinning());
        assert!(engine.tick(1000.0).is_none());
    }

    #[test]
    fn test_winner_resolved_against_snapshot() {
        let mut engine = SpinEngine::new();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut live = roster(3);
        engine.spin(&live, &mut rng).unwrap();

        // Gut the live roster mid-spin; the reveal must not care
        live.remove(2).unwrap();
        live.remove(1).unwrap();

        let result = engine.tick(SPIN_DURATION_MS).unwrap();
        assert!(result.index < 3);
        assert!(result.winner.starts_with("Item "));
    }

    #[test]
    fn test_rotation_accumulates_across_spins() {
        let mut engine = SpinEngine::new();
        let mut rng = Pcg32::seed_from_u64(5);
        let roster = roster(5);
        let mut last = 0.0;
        for _ in 0..10 {
            engine.spin(&roster, &mut rng).unwrap();
            assert!(engine.rotation_deg() >= last + 5.0 * 360.0);
            last = engine.rotation_deg();
            engine.tick(SPIN_DURATION_MS).unwrap();
        }
    }

    #[test]
    fn test_reset_ignored_mid_spin() {
        let mut engine = SpinEngine::new();
        let mut rng = Pcg32::seed_from_u64(6);
        engine.spin(&roster(2), &mut rng).unwrap();
        engine.reset();
        assert!(engine.is_spinning());
        assert!(engine.rotation_deg() > 0.0);

        engine.tick(SPIN_DURATION_MS).unwrap();
        engine.reset();
        assert_eq!(engine.rotation_deg(), 0.0);
        assert!(engine.winner().is_none());
    }

    proptest! {
        /// The decoded index is always a valid roster position
        #[test]
        fn prop_winning_index_in_range(rotation in 0.0f32..1_000_000.0, n in 1usize..=12) {
            let index = winning_index(rotation, n);
            prop_assert!(index < n);
        }

        /// Drawing through the engine always lands on a segment boundary
        /// multiple and a valid winner
        #[test]
        fn prop_spin_decodes_valid_winner(seed in 0u64..500, n in 2usize..=12) {
            let mut engine = SpinEngine::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            engine.spin(&roster(n), &mut rng).unwrap();
            let result = engine.tick(SPIN_DURATION_MS).unwrap();
            prop_assert!(result.index < n);
            prop_assert_eq!(result.winner, format!("Item {}", result.index + 1));
        }
    }
}
