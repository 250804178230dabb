//! RNG oracle for deterministic random number generation.
//!
//! Every roll in a combat session (weapon d20s, damage samples, Emergency
//! Power outcomes, retreat checks, enemy attacks, salvage) is drawn through
//! [`RngOracle`]. Given the same session seed the same fight replays exactly.

#[cfg(feature = "std")]
use std::sync::atomic::{AtomicUsize, Ordering};

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for percentage checks such as retreat and scavenging.
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: each call derives its output from the seed alone, so callers
/// mix a fresh seed per roll with [`compute_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Compute a deterministic seed for a single roll.
///
/// * `session_seed` - Base seed chosen when the encounter starts
/// * `nonce` - Turn number
/// * `actor_id` - Which side (or phase) is rolling, see [`Dice`]
/// * `context` - Index of the roll within that phase
pub fn compute_seed(session_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

// ============================================================================
// Dice
// ============================================================================

/// A stream of rolls for one phase of one turn.
///
/// Each draw advances an internal counter that is folded into the seed, so
/// every roll inside the phase is independent while the whole phase stays
/// reproducible.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
    actor: u32,
    draws: u32,
}

impl<'a> Dice<'a> {
    /// Player action phase.
    pub const PLAYER: u32 = 0;
    /// Enemy attack phase.
    pub const ENEMY: u32 = 1;
    /// End-of-turn bookkeeping (regen, scavenging, salvage).
    pub const UPKEEP: u32 = 2;

    pub fn new(rng: &'a dyn RngOracle, seed: u64, nonce: u64, actor: u32) -> Self {
        Self {
            rng,
            seed,
            nonce,
            actor,
            draws: 0,
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, self.actor, self.draws);
        self.draws = self.draws.wrapping_add(1);
        seed
    }

    /// Uniform integer in `[1, 20]`.
    pub fn d20(&mut self) -> u32 {
        let seed = self.next_seed();
        self.rng.roll_die(seed, 20)
    }

    /// Uniform integer in `[min, max]`.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.range(seed, min, max)
    }

    /// True with probability `chance` percent.
    pub fn percent(&mut self, chance: u32) -> bool {
        let seed = self.next_seed();
        self.rng.roll_d100(seed) <= chance
    }

    /// Number of rolls drawn so far.
    pub fn draws(&self) -> u32 {
        self.draws
    }
}

// ============================================================================
// Scripted RNG
// ============================================================================

/// RNG that replays a fixed list of results, then falls back to [`PcgRng`].
///
/// Each scripted value is returned as-is from `roll_die`, `range` and
/// `roll_d100`, clamped into the requested bounds. Useful for pinning exact
/// dice in tests and demos.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct ScriptedRng {
    script: Vec<u32>,
    cursor: AtomicUsize,
}

#[cfg(feature = "std")]
impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    fn next_scripted(&self) -> Option<u32> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.script.get(index).copied()
    }

    /// Number of scripted values not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script
            .len()
            .saturating_sub(self.cursor.load(Ordering::Relaxed))
    }
}

#[cfg(feature = "std")]
impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        self.next_scripted()
            .unwrap_or_else(|| PcgRng.next_u32(seed))
    }

    fn roll_d100(&self, seed: u64) -> u32 {
        self.roll_die(seed, 100)
    }

    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        match self.next_scripted() {
            Some(value) => value.clamp(1, sides.max(1)),
            None => PcgRng.roll_die(seed, sides),
        }
    }

    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        match self.next_scripted() {
            Some(value) => value.clamp(min, max.max(min)),
            None => PcgRng.range(seed, min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn dice_stay_in_bounds() {
        let rng = PcgRng;
        for nonce in 0..200 {
            let mut dice = Dice::new(&rng, 7, nonce, Dice::PLAYER);
            let d = dice.d20();
            assert!((1..=20).contains(&d));
            let r = dice.range(12, 30);
            assert!((12..=30).contains(&r));
            assert_eq!(dice.draws(), 2);
        }
    }

    #[test]
    fn dice_replay_with_same_seed() {
        let rng = PcgRng;
        let mut a = Dice::new(&rng, 99, 3, Dice::ENEMY);
        let mut b = Dice::new(&rng, 99, 3, Dice::ENEMY);
        let rolls_a: Vec<u32> = (0..8).map(|_| a.d20()).collect();
        let rolls_b: Vec<u32> = (0..8).map(|_| b.d20()).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn scripted_rng_clamps_and_falls_back() {
        let rng = ScriptedRng::new([25, 5, 0]);
        assert_eq!(rng.roll_die(0, 20), 20);
        assert_eq!(rng.range(0, 12, 30), 12);
        assert_eq!(rng.roll_d100(0), 1);
        assert_eq!(rng.remaining(), 0);

        let fallback = rng.roll_die(5, 20);
        assert_eq!(fallback, PcgRng.roll_die(5, 20));
    }

    #[test]
    fn percent_frequency_is_fair() {
        let rng = PcgRng;
        let trials = 10_000u64;
        let hits = (0..trials)
            .filter(|&nonce| Dice::new(&rng, 0xC0FFEE, nonce, Dice::PLAYER).percent(50))
            .count();
        let ratio = hits as f64 / trials as f64;
        assert!((0.47..=0.53).contains(&ratio), "ratio {ratio}");
    }
}
