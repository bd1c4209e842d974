//! Optimized-multiply backends.
//!
//! The harness times the naive reference against one of these. A backend is
//! a black box to the harness: any implementation qualifies as long as its
//! result agrees element-wise with the reference within 1e-3 relative error
//! for inputs in [0,1).
//!
//! Available implementations:
//! - `ScalarBackend`: portable i-k-j scalar loop
//! - `SimdBackend`: AVX2+FMA kernel, scalar fallback elsewhere

pub mod scalar;
pub mod simd;

pub use scalar::ScalarBackend;
pub use simd::SimdBackend;

/// An optimized dense multiply: C = A·B over square row-major f32 matrices.
///
/// Implementations must be functionally equivalent to the naive reference
/// and must not spawn threads; the harness relies on the timed region
/// staying sequential.
pub trait Backend {
    /// Short label used in timing output.
    fn name(&self) -> &'static str;

    /// Computes C = A·B. All slices hold `n * n` elements, row-major.
    ///
    /// # Panics
    ///
    /// Panics if any slice is shorter than `n * n`.
    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], n: usize);
}

/// Picks the fastest backend available on this CPU (AVX2 > scalar).
pub fn auto() -> Box<dyn Backend> {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return Box::new(SimdBackend);
        }
    }
    Box::new(ScalarBackend)
}
