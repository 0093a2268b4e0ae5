use crate::abstract_trait::DigitSource;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// [`DigitSource`] backed by a `rand` generator.
pub struct RngDigitSource<R> {
    rng: R,
}

impl<R: Rng> RngDigitSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDigitSource<StdRng> {
    /// Seeded from the operating system; differs on every run.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DigitSource for RngDigitSource<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.random_range(0..10)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
