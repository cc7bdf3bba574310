//! Random source construction.
//!
//! Strategies are generic over any [`rand::Rng`]; these helpers build the
//! default [`StdRng`] from an optional seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded standard generator.
///
/// The same seed always yields the same sequence, which makes a whole
/// search run reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local generator.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Creates a generator from an optional seed, falling back to entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(entropy_seed))
}

/// A generator that returns one fixed word forever, so uniform `f64` draws
/// land on an exact value.
#[cfg(test)]
pub(crate) struct FixedDraw(pub(crate) u64);

#[cfg(test)]
impl FixedDraw {
    /// Yields `draw` from every `random::<f64>()` call when `draw` is a
    /// multiple of `2^-53` in `[0, 1)`.
    pub(crate) fn at(draw: f64) -> Self {
        Self(((draw * (1u64 << 53) as f64) as u64) << 11)
    }
}

#[cfg(test)]
impl rand::RngCore for FixedDraw {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for (byte, source) in dst.iter_mut().zip(self.0.to_le_bytes().iter().cycle()) {
            *byte = *source;
        }
    }
}
