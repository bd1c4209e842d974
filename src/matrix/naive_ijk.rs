/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop definition, `C[i,j] = Σ_k A[i,k]·B[k,j]`.
/// It's slow because the innermost loop accesses B with stride `n`
/// (column-wise), causing cache misses on every iteration.
///
/// This is the reference the optimized backends are measured against.
/// Accumulation happens in f32; C is overwritten (C = A·B), and the only
/// side effect is writing C.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten
/// * `n` - Side length of all three matrices
///
/// # Panics
///
/// Panics if any slice is shorter than `n * n`.
pub fn matmul_naive_ijk(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0f32;
            for p in 0..n {
                sum += a[i * n + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// Same loop order as [`matmul_naive_ijk`], accumulating in f64.
///
/// The wider accumulator absorbs rounding during the inner sum; the result
/// is converted back to f32 on store. Useful when comparing backends whose
/// summation order differs from the reference.
pub fn matmul_naive_ijk_wide(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0f64;
            for p in 0..n {
                sum += f64::from(a[i * n + p]) * f64::from(b[p * n + j]);
            }
            c[i * n + j] = sum as f32;
        }
    }
}
