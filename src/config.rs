//! Benchmark configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{BenchError, Result};

/// Accumulator width used by the reference multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    /// Accumulate in f32, like the matrices themselves.
    #[default]
    Single,
    /// Accumulate in f64, converting back to f32 on store.
    Double,
}

/// Parameters of a single benchmark run. Immutable once the run starts.
///
/// `dimension` and `repetitions` must both be at least 1; [`validate`]
/// rejects anything else before a single byte is allocated or timed.
///
/// [`validate`]: BenchConfig::validate
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    /// Side length of the square input matrices.
    pub dimension: usize,
    /// How many times each multiply is invoked back-to-back.
    pub repetitions: usize,
    /// Seed for the input matrices. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Accumulator width for the reference multiply.
    pub accumulation: Accumulation,
}

impl BenchConfig {
    /// Config with the given dimension and repetition count, unseeded,
    /// single-precision accumulation.
    pub fn new(dimension: usize, repetitions: usize) -> Self {
        Self {
            dimension,
            repetitions,
            seed: None,
            accumulation: Accumulation::Single,
        }
    }

    /// Reject non-positive dimension or repetition count.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(BenchError::InvalidConfiguration(
                "matrix dimension must be at least 1".into(),
            ));
        }
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfiguration(
                "repetition count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Generator for the input matrices: seeded when a seed was supplied,
    /// OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
