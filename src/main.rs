//! Benchmark runner comparing the naive multiply against an optimized
//! backend.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use matbench::backend::{self, Backend, ScalarBackend, SimdBackend};
use matbench::{Accumulation, BenchConfig, harness};

#[derive(Parser)]
#[command(
    name = "matbench",
    about = "Times a naive matrix multiply against an optimized backend"
)]
struct Opt {
    /// Matrix dimension (n×n).
    #[arg(short = 'n', long, default_value_t = 512)]
    size: usize,

    /// How many times each multiply is invoked back-to-back.
    #[arg(short, long, default_value_t = 1)]
    reps: usize,

    /// Seed for the input matrices; drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Optimized-multiply implementation to benchmark against.
    #[arg(long, value_enum, default_value = "auto")]
    backend: BackendArg,

    /// Accumulate the naive multiply in f64 instead of f32.
    #[arg(long)]
    wide_accumulate: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum BackendArg {
    /// Fastest backend available on this CPU.
    Auto,
    /// AVX2+FMA kernel (scalar fallback if unsupported).
    Simd,
    /// Portable scalar i-k-j loop.
    Scalar,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    let mut config = BenchConfig::new(opt.size, opt.reps);
    config.seed = opt.seed;
    if opt.wide_accumulate {
        config.accumulation = Accumulation::Double;
    }

    let backend: Box<dyn Backend> = match opt.backend {
        BackendArg::Auto => backend::auto(),
        BackendArg::Simd => Box::new(SimdBackend),
        BackendArg::Scalar => Box::new(ScalarBackend),
    };

    println!("=== Matrix Multiplication Benchmark ===\n");
    #[cfg(target_arch = "x86_64")]
    println!(
        "CPU features: AVX2={}, FMA={}\n",
        is_x86_feature_detected!("avx2"),
        is_x86_feature_detected!("fma")
    );

    let report = harness::run(&config, backend.as_ref())?;
    print!("{report}");

    Ok(())
}
