use std::cell::Cell;

use matbench::backend::{self, ScalarBackend};
use matbench::{BenchConfig, BenchError, Matrix, harness, matmul_naive_ikj, timed_run};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================
// Configuration validation
// ============================================================

#[test]
fn test_run_rejects_zero_dimension() {
    let config = BenchConfig::new(0, 1);
    let err = harness::run(&config, &ScalarBackend).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfiguration(_)));
}

#[test]
fn test_run_rejects_zero_repetitions() {
    let config = BenchConfig::new(16, 0);
    let err = harness::run(&config, &ScalarBackend).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfiguration(_)));
}

#[test]
fn test_zero_dimension_matrix_rejected_before_allocation() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = Matrix::random(0, &mut rng).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfiguration(_)));

    let err = Matrix::zeroed(0).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfiguration(_)));
}

// ============================================================
// timed_run
// ============================================================

#[test]
fn test_timed_run_rejects_zero_reps_without_invoking() {
    let calls = Cell::new(0u32);
    let err = timed_run("noop", 0, || calls.set(calls.get() + 1)).unwrap_err();

    assert!(matches!(err, BenchError::InvalidConfiguration(_)));
    assert_eq!(calls.get(), 0, "closure must not run before validation");
}

#[test]
fn test_timed_run_invokes_exactly_n_times() {
    let calls = Cell::new(0u32);
    let sample = timed_run("count", 5, || calls.set(calls.get() + 1)).unwrap();

    assert_eq!(calls.get(), 5);
    assert_eq!(sample.repetitions(), 5);
    assert_eq!(sample.label(), "count");
    assert!(sample.total_ms() >= 0.0);

    let expected_per_call = sample.total_ms() / 5.0;
    assert!((sample.per_call_ms() - expected_per_call).abs() < 1e-9);
}

#[test]
fn test_timed_run_scales_roughly_linearly() {
    let n = 128;
    let mut rng = StdRng::seed_from_u64(11);
    let a = Matrix::random(n, &mut rng).unwrap();
    let b = Matrix::random(n, &mut rng).unwrap();
    let mut c = Matrix::zeroed(n).unwrap();

    let one = timed_run("x1", 1, || {
        matmul_naive_ikj(a.as_slice(), b.as_slice(), c.as_mut_slice(), n)
    })
    .unwrap();
    let eight = timed_run("x8", 8, || {
        matmul_naive_ikj(a.as_slice(), b.as_slice(), c.as_mut_slice(), n)
    })
    .unwrap();

    // Wide bounds absorb scheduling noise; the point is that total time
    // grows with the repetition count instead of staying flat.
    let ratio = eight.total_ms() / one.total_ms();
    assert!(
        (2.0..64.0).contains(&ratio),
        "8 reps took {ratio}x the time of 1 rep"
    );
}

// ============================================================
// Full runs
// ============================================================

#[test]
fn test_run_reports_two_positive_timings() {
    let mut config = BenchConfig::new(64, 2);
    config.seed = Some(5);

    let report = harness::run(&config, &ScalarBackend).unwrap();

    assert_eq!(report.dimension(), 64);
    assert_eq!(report.repetitions(), 2);
    assert_eq!(report.samples().len(), 2);
    assert_eq!(report.samples()[0].label(), "naive");
    assert_eq!(report.samples()[1].label(), "scalar");
    for sample in report.samples() {
        assert!(sample.total_ms() > 0.0);
    }
    assert!(report.speedup().is_some());
}

#[test]
fn test_run_is_deterministic_for_fixed_seed() {
    let mut config = BenchConfig::new(16, 1);
    config.seed = Some(42);

    let first = harness::run(&config, &ScalarBackend).unwrap();
    let second = harness::run(&config, &ScalarBackend).unwrap();

    assert_eq!(first.checks(), second.checks());
}

#[test]
fn test_unseeded_run_completes() {
    let config = BenchConfig::new(8, 1);
    let report = harness::run(&config, &ScalarBackend).unwrap();
    assert_eq!(report.samples().len(), 2);
}

#[test]
fn test_report_format() {
    let mut config = BenchConfig::new(16, 1);
    config.seed = Some(3);

    let report = harness::run(&config, &ScalarBackend).unwrap();
    let text = report.to_string();

    assert!(text.contains("Matrix: 16×16, 1 repetition(s)"));
    assert!(text.contains("Elapsed (naive):"));
    assert!(text.contains("Elapsed (scalar):"));
    assert!(text.contains("Check (naive):"));
    assert!(text.contains("Check (scalar):"));
    assert!(text.contains("ms"));
}

#[test]
fn test_auto_backend_runs() {
    let mut config = BenchConfig::new(32, 1);
    config.seed = Some(13);

    let report = harness::run(&config, backend::auto().as_ref()).unwrap();
    assert_eq!(report.samples().len(), 2);
}

// Full-scale scenario from the original program: N=512, 100 reps.
// Takes minutes with the naive loop, so it only runs on request
// (cargo test -- --ignored).
#[test]
#[ignore]
fn test_full_scale_run_completes() {
    let mut config = BenchConfig::new(512, 100);
    config.seed = Some(1);

    let report = harness::run(&config, backend::auto().as_ref()).unwrap();

    assert_eq!(report.samples().len(), 2);
    for sample in report.samples() {
        assert!(sample.total_ms() > 0.0);
    }
}
