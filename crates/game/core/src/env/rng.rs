//! RNG oracle for deterministic random number generation.
//!
//! Every random decision of the game (question shuffling, the university
//! poll, the cards draw) goes through a trait object so the engine stays
//! seedable and replayable.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Tests rely on this
//! to pin exact lifeline outcomes.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. It is stateless: the caller supplies the state as a seed
/// derived through [`compute_seed`].
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Purpose of a roll. Keeps independent rolls of the same action apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollContext {
    /// Ordering of the question sequence.
    Shuffle = 1,
    /// Share of the university poll given to the correct option.
    PollShare = 2,
    /// Split of the remaining poll share among the wrong options.
    PollSpread = 3,
    /// Wrong options picked by the cards lifeline.
    CardPick = 4,
}

impl RollContext {
    /// Packs the context with a per-roll index (low 16 bits).
    pub const fn with_index(self, index: u32) -> u32 {
        ((self as u32) << 16) | (index & 0xffff)
    }
}

/// Compute deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Action sequence number (increments each action)
/// * `context` - Distinguishes multiple rolls in the same action, see [`RollContext::with_index`]
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style multipliers
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Fisher-Yates shuffle driven by the oracle.
pub fn shuffle<T, R>(rng: &R, seed: u64, items: &mut [T])
where
    R: RngOracle + ?Sized,
{
    for upper in (1..items.len()).rev() {
        let roll = rng.next_u32(compute_seed(
            seed,
            upper as u64,
            RollContext::Shuffle.with_index(0),
        ));
        let pick = roll as usize % (upper + 1);
        items.swap(upper, pick);
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
    fn range_stays_inclusive() {
        let rng = PcgRng;
        for seed in 0..500 {
            let value = rng.range(compute_seed(seed, 0, 0), 40, 70);
            assert!((40..=70).contains(&value));
        }
        assert_eq!(rng.range(1, 5, 5), 5);
        assert_eq!(rng.range(1, 9, 3), 9);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let rng = PcgRng;
        let mut items: Vec<u32> = (0..15).collect();
        shuffle(&rng, 99, &mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..15).collect::<Vec<_>>());

        let mut again: Vec<u32> = (0..15).collect();
        shuffle(&rng, 99, &mut again);
        assert_eq!(items, again);
    }

    #[test]
    fn contexts_produce_distinct_seeds() {
        let a = compute_seed(1, 1, RollContext::PollShare.with_index(0));
        let b = compute_seed(1, 1, RollContext::PollSpread.with_index(0));
        let c = compute_seed(1, 1, RollContext::PollSpread.with_index(1));
        assert_ne!(a, b);
        assert_ne!(b, c);
    }
}
