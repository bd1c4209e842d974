//! Benchmark harness: timing, the run driver, and the report.
//!
//! A run generates two random matrices, times the naive reference over the
//! configured repetition count, times the optimized backend over the same
//! count, and collects everything into a printable [`Report`].

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::backend::Backend;
use crate::config::{Accumulation, BenchConfig};
use crate::error::{BenchError, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::{matmul_naive_ijk, matmul_naive_ijk_wide};

/// One measured phase: label, total elapsed time, repetition count.
/// Immutable once recorded.
#[derive(Debug, Clone)]
pub struct TimingSample {
    label: String,
    elapsed: Duration,
    repetitions: usize,
}

impl TimingSample {
    /// Label of the measured phase.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Total elapsed wall-clock time across all repetitions.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// How many times the measured function ran.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Total elapsed time in milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Average elapsed time per invocation, in milliseconds.
    pub fn per_call_ms(&self) -> f64 {
        self.total_ms() / self.repetitions as f64
    }

    /// Throughput in GFLOPS for an n×n multiply (2·n³ flops per call).
    pub fn gflops(&self, n: usize) -> f64 {
        let flops = 2.0 * (n as f64).powi(3) * self.repetitions as f64;
        flops / self.elapsed.as_secs_f64() / 1e9
    }
}

/// Invokes `f` exactly `repetitions` times back-to-back and records the
/// wall-clock time from immediately before the first call to immediately
/// after the last.
///
/// `Instant` is a monotonic clock, so the measurement is immune to
/// system-time adjustments. Rejects `repetitions == 0` before invoking `f`.
pub fn timed_run<F: FnMut()>(label: &str, repetitions: usize, mut f: F) -> Result<TimingSample> {
    if repetitions == 0 {
        return Err(BenchError::InvalidConfiguration(
            "repetition count must be at least 1".into(),
        ));
    }

    let start = Instant::now();
    for _ in 0..repetitions {
        f();
    }
    let elapsed = start.elapsed();

    Ok(TimingSample {
        label: label.to_string(),
        elapsed,
        repetitions,
    })
}

/// Everything a finished run produced: the timing samples plus one
/// verification scalar per result matrix.
///
/// The scalars are read through [`black_box`] so the optimizer cannot
/// discard the multiplies whose outputs are otherwise unused. `Display`
/// renders the report in the format the binary prints.
#[derive(Debug)]
pub struct Report {
    dimension: usize,
    repetitions: usize,
    samples: Vec<TimingSample>,
    checks: Vec<(String, f32)>,
}

impl Report {
    /// Side length of the multiplied matrices.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Repetition count both phases ran with.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Timing samples in measurement order: reference first, backend second.
    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    /// Verification scalars (`C[0]`), one per phase.
    pub fn checks(&self) -> &[(String, f32)] {
        &self.checks
    }

    /// How many times faster the second phase was than the first.
    pub fn speedup(&self) -> Option<f64> {
        let base = self.samples.first()?;
        let other = self.samples.get(1)?;
        if other.total_ms() > 0.0 {
            Some(base.total_ms() / other.total_ms())
        } else {
            None
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Matrix: {}×{}, {} repetition(s)",
            self.dimension, self.dimension, self.repetitions
        )?;
        for s in &self.samples {
            writeln!(
                f,
                "Elapsed ({}): {:.3} ms  ({:.3} ms/call, {:.2} GFLOPS)",
                s.label(),
                s.total_ms(),
                s.per_call_ms(),
                s.gflops(self.dimension)
            )?;
        }
        if let (Some(speedup), Some(base)) = (self.speedup(), self.samples.first()) {
            writeln!(f, "Speedup: {:.1}× over {}", speedup, base.label())?;
        }
        for (label, value) in &self.checks {
            writeln!(f, "Check ({label}): {value:.6}")?;
        }
        Ok(())
    }
}

/// Runs the full benchmark: validate, generate, time the reference, time
/// the backend, collect the report.
///
/// Both input matrices come from one generator, A filled first. The whole
/// run is single-threaded and strictly sequential; nothing is retried and
/// no partial results are produced on error.
pub fn run(config: &BenchConfig, backend: &dyn Backend) -> Result<Report> {
    config.validate()?;

    let n = config.dimension;
    let mut rng = config.rng();
    let a = Matrix::random(n, &mut rng)?;
    let b = Matrix::random(n, &mut rng)?;
    let mut c_ref = Matrix::zeroed(n)?;
    let mut c_opt = Matrix::zeroed(n)?;

    let reference_fn: fn(&[f32], &[f32], &mut [f32], usize) = match config.accumulation {
        Accumulation::Single => matmul_naive_ijk,
        Accumulation::Double => matmul_naive_ijk_wide,
    };

    let reference = timed_run("naive", config.repetitions, || {
        reference_fn(a.as_slice(), b.as_slice(), c_ref.as_mut_slice(), n)
    })?;

    let optimized = timed_run(backend.name(), config.repetitions, || {
        backend.multiply(a.as_slice(), b.as_slice(), c_opt.as_mut_slice(), n)
    })?;

    let checks = vec![
        ("naive".to_string(), black_box(c_ref.as_slice()[0])),
        (backend.name().to_string(), black_box(c_opt.as_slice()[0])),
    ];

    Ok(Report {
        dimension: n,
        repetitions: config.repetitions,
        samples: vec![reference, optimized],
        checks,
    })
}
