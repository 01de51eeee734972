//! Dice: deterministic random rolls and scripted rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same roll sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: [`LoadedDice`] replays a fixed sequence for tests and replays
//!
//! ```
//! use ludo_engine::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! for _ in 0..20 {
//!     let roll = a.roll_die();
//!     assert!((1..=6).contains(&roll));
//!     assert_eq!(roll, b.roll_die());
//! }
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Anything that can produce a die roll in `1..=6`.
pub trait DiceSource {
    /// Roll once.
    fn roll_die(&mut self) -> u8;
}

/// Deterministic RNG for dice rolls.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that replay a fixed script, then fall back to an RNG.
///
/// ```
/// use ludo_engine::core::{DiceSource, LoadedDice};
///
/// let mut dice = LoadedDice::new([6, 3]);
/// assert_eq!(dice.roll_die(), 6);
/// assert_eq!(dice.roll_die(), 3);
/// assert!((1..=6).contains(&dice.roll_die()));
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDice {
    script: VecDeque<u8>,
    fallback: GameRng,
}

impl LoadedDice {
    /// Script the given values. Values outside `1..=6` are clamped.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: values.into_iter().map(|v| v.clamp(1, DIE_FACES)).collect(),
            fallback: GameRng::new(0),
        }
    }

    /// Queue another scripted value.
    pub fn push(&mut self, value: u8) {
        self.script.push_back(value.clamp(1, DIE_FACES));
    }

    /// Scripted values not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for LoadedDice {
    fn roll_die(&mut self) -> u8 {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.roll_die())
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_all_faces_appear() {
        let mut rng = GameRng::new(42);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let roll = rng.roll_die();
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_loaded_dice_clamps_and_falls_back() {
        let mut dice = LoadedDice::new([0, 9]);
        assert_eq!(dice.roll_die(), 1);
        assert_eq!(dice.roll_die(), 6);
        assert_eq!(dice.remaining(), 0);

        dice.push(4);
        assert_eq!(dice.roll_die(), 4);
        assert!((1..=6).contains(&dice.roll_die()));
    }
}
