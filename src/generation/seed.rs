//! Injectable seed sources.
//!
//! Every noise draw takes an explicit `u32` seed. A `SeedSource` hands those
//! out, so callers choose between a counting stream from a fixed base (tests,
//! reproductions) and a seeded ChaCha stream (normal generation). Either way
//! consecutive draws differ, so layers sharing an amount stay uncorrelated.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeds are drawn from this half-open range.
pub const SEED_RANGE: Range<u32> = 0..10_000;

/// Supplies one seed per noise draw.
pub trait SeedSource {
    fn next_seed(&mut self) -> u32;
}

/// Counts up from a fixed base: `base, base + 1, ...`, wrapping inside
/// [`SEED_RANGE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u32 {
        let seed = self.0 % SEED_RANGE.end;
        self.0 = (seed + 1) % SEED_RANGE.end;
        seed
    }
}

/// Deterministic seed stream backed by `ChaCha8Rng`.
#[derive(Clone, Debug)]
pub struct SeedGenerator {
    rng: ChaCha8Rng,
}

impl SeedGenerator {
    /// Stream that replays identically for the same `seed`.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl SeedSource for SeedGenerator {
    fn next_seed(&mut self) -> u32 {
        self.rng.gen_range(SEED_RANGE)
    }
}

impl<S: SeedSource + ?Sized> SeedSource for &mut S {
    fn next_seed(&mut self) -> u32 {
        (**self).next_seed()
    }
}
