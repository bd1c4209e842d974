//! Micro-benchmark comparing naive matrix multiplication against
//! optimized backends.
//!
//! The harness generates two square f32 matrices with values in [0,1),
//! times the textbook triple-loop multiply over a configurable repetition
//! count, times an optimized backend over the same count, and reports
//! absolute and per-call timings plus a verification scalar from each
//! result so the compiler cannot discard the work.
//!
//! The optimized side is a capability, not a dependency: anything
//! implementing [`backend::Backend`] can be benchmarked, as long as its
//! result agrees with the reference within floating-point tolerance. Two
//! implementations ship with the crate - a portable scalar loop and an
//! AVX2+FMA kernel with runtime feature detection.
//!
//! ## Usage
//!
//! ```
//! use matbench::backend::ScalarBackend;
//! use matbench::{BenchConfig, harness};
//!
//! let mut config = BenchConfig::new(64, 1);
//! config.seed = Some(42);
//!
//! let report = harness::run(&config, &ScalarBackend).unwrap();
//! print!("{report}");
//! ```
//!
//! Everything is single-threaded by design: the point is to measure raw
//! sequential throughput, and incidental parallelism would invalidate the
//! comparison.

pub mod backend;
pub mod config;
pub mod error;
pub mod harness;
pub mod matrix;

pub use backend::{Backend, ScalarBackend, SimdBackend};
pub use config::{Accumulation, BenchConfig};
pub use error::{BenchError, Result};
pub use harness::{Report, TimingSample, timed_run};
pub use matrix::Matrix;
pub use matrix::naive_ijk::{matmul_naive_ijk, matmul_naive_ijk_wide};
pub use matrix::naive_ikj::matmul_naive_ikj;
