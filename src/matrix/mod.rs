//! Square dense matrices and the naive multiply implementations.
//!
//! The naive loops provide the correctness and timing baseline that the
//! optimized backends are compared against.

pub mod naive_ijk;
pub mod naive_ikj;

use rand::Rng;

use crate::error::{BenchError, Result};

/// A square, row-major, dense f32 matrix.
///
/// The buffer always holds exactly `n * n` elements; constructors are the
/// only way to build one, so the invariant cannot be broken from outside.
/// For `n` large enough that `n * n` exceeds addressable memory the
/// reservation fails with [`BenchError::Allocation`]; no attempt is made
/// to handle `usize` overflow of the product itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// An n×n matrix of zeros.
    ///
    /// Fails with `InvalidConfiguration` for `n == 0` and with
    /// `Allocation` if the buffer cannot be reserved. Nothing is
    /// allocated on the error paths.
    pub fn zeroed(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(BenchError::InvalidConfiguration(
                "matrix dimension must be at least 1".into(),
            ));
        }
        let len = n * n;
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0.0);
        Ok(Self { n, data })
    }

    /// An n×n matrix filled with values uniformly distributed in [0,1).
    ///
    /// Deterministic for a given generator state: the same seeded RNG
    /// produces the same matrix.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let mut m = Self::zeroed(n)?;
        for v in &mut m.data {
            *v = rng.random();
        }
        Ok(m)
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeroed(n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Side length of the matrix.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
