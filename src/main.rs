//! Benchmarks element-wise transform strategies over the default sweep:
//! sizes {10k, 100k, 1M}, seed 42, values in [0, 1), thread counts
//! {1, 2, 4, 8, 16, 32}, and the fast/slow sample operators.
//!
//! Run with: cargo run --release

use transform_bench::ops::default_operators;
use transform_bench::sweep::{run_sweep, SweepConfig};

fn main() {
    run_sweep(&SweepConfig::default(), &default_operators());
}
