//! AVX2 f32 backend.
//!
//! A straightforward SIMD multiply without cache blocking: 4 rows × 8
//! columns of C are kept in AVX2 registers while the inner loop walks the
//! shared dimension. Blocking and packing would go further, but this is
//! already an order of magnitude ahead of the naive reference.

use super::Backend;
use crate::matrix::naive_ikj::matmul_naive_ikj;

/// AVX2+FMA backend with runtime feature detection.
///
/// Falls back to the scalar i-k-j loop when the CPU lacks AVX2/FMA or the
/// target is not x86_64.
pub struct SimdBackend;

impl Backend for SimdBackend {
    fn name(&self) -> &'static str {
        "simd"
    }

    fn multiply(&self, a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
        assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
        assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
        assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
                unsafe { matmul_simd_f32(a, b, c, n) };
                return;
            }
        }

        matmul_naive_ikj(a, b, c, n);
    }
}

/// 4×8 SIMD multiply: C = A·B, overwrite semantics.
///
/// Each 4×8 tile of C lives in four AVX2 registers. For every step along
/// the shared dimension, one row of B is loaded once and four broadcast
/// values of A are FMA'd into the accumulators. Rows and columns past the
/// last full tile fall back to scalar loops.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `a`, `b`, `c` each hold `n * n` contiguous f32 values
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn matmul_simd_f32(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    use std::arch::x86_64::*;

    let row_main = (n / 4) * 4;
    let col_main = (n / 8) * 8;

    for i in (0..row_main).step_by(4) {
        for j in (0..col_main).step_by(8) {
            let mut c0 = _mm256_setzero_ps();
            let mut c1 = _mm256_setzero_ps();
            let mut c2 = _mm256_setzero_ps();
            let mut c3 = _mm256_setzero_ps();

            for p in 0..n {
                let b_vec = _mm256_loadu_ps(b.as_ptr().add(p * n + j));

                let a0 = _mm256_set1_ps(a[i * n + p]);
                let a1 = _mm256_set1_ps(a[(i + 1) * n + p]);
                let a2 = _mm256_set1_ps(a[(i + 2) * n + p]);
                let a3 = _mm256_set1_ps(a[(i + 3) * n + p]);

                c0 = _mm256_fmadd_ps(a0, b_vec, c0);
                c1 = _mm256_fmadd_ps(a1, b_vec, c1);
                c2 = _mm256_fmadd_ps(a2, b_vec, c2);
                c3 = _mm256_fmadd_ps(a3, b_vec, c3);
            }

            _mm256_storeu_ps(c.as_mut_ptr().add(i * n + j), c0);
            _mm256_storeu_ps(c.as_mut_ptr().add((i + 1) * n + j), c1);
            _mm256_storeu_ps(c.as_mut_ptr().add((i + 2) * n + j), c2);
            _mm256_storeu_ps(c.as_mut_ptr().add((i + 3) * n + j), c3);
        }

        // Columns past the last full 8-wide tile, for this row band.
        for r in i..i + 4 {
            for j in col_main..n {
                let mut sum = 0.0f32;
                for p in 0..n {
                    sum += a[r * n + p] * b[p * n + j];
                }
                c[r * n + j] = sum;
            }
        }
    }

    // Rows past the last full 4-row band.
    for i in row_main..n {
        for j in 0..n {
            let mut sum = 0.0f32;
            for p in 0..n {
                sum += a[i * n + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
