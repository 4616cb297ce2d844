//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected so question selection is repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Draws an index in `0..len` with a single uniform draw.
///
/// Returns `None` when `len` is zero.
pub fn draw_index(rng: &mut dyn DeterministicRng, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let max = u32::try_from(last).unwrap_or(u32::MAX);
    let drawn = rng.next_u32_range(0, max) as usize;
    Some(drawn.min(last))
}

/// Production RNG backed by `StdRng`, seeded from the operating system.
#[derive(Debug)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
