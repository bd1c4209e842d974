//! Portable scalar backend.

use super::Backend;
use crate::matrix::naive_ikj::matmul_naive_ikj;

/// Scalar i-k-j backend.
///
/// The loop reorder alone beats the i-j-k reference by a wide margin on
/// large matrices, and it runs on every architecture. This is the backend
/// of last resort when no SIMD path is available.
pub struct ScalarBackend;

impl Backend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
        matmul_naive_ikj(a, b, c, n);
    }
}
