//! Sweep driver: runs every strategy over every operator and dataset size
//! and reports the timings on the console.

use crate::data::generate_data;
use crate::ops::{Operator, OperatorDescriptor};
use crate::strategy::{
    transform_fixed_threads, transform_sequential, transform_with_policy, Policy,
};
use crate::timing::measure;

/// Everything the sweep iterates over. Passed in explicitly so the driver
/// can be exercised with small synthetic lists in tests.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub low: f64,
    pub high: f64,
    pub thread_counts: Vec<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10_000, 100_000, 1_000_000],
            seed: 42,
            low: 0.0,
            high: 1.0,
            thread_counts: vec![1, 2, 4, 8, 16, 32],
        }
    }
}

/// Runs the manual fixed-thread strategy once per candidate thread count,
/// in list order, returning `(k, seconds)` pairs in the same order.
pub fn sweep_thread_counts<F>(data: &[f64], op: F, thread_counts: &[usize]) -> Vec<(usize, f64)>
where
    F: Fn(f64) -> f64 + Sync,
{
    thread_counts
        .iter()
        .map(|&k| {
            let (_result, secs) = measure(|| transform_fixed_threads(data, &op, k));
            (k, secs)
        })
        .collect()
}

/// Picks the candidate with the minimum time. Updates strictly (`<`), so on
/// a tie the first candidate in list order wins. Empty input yields `None`.
pub fn best_thread_count(timings: &[(usize, f64)]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for &(k, secs) in timings {
        match best {
            Some((_, min)) if secs < min => best = Some((k, secs)),
            None => best = Some((k, secs)),
            _ => {}
        }
    }
    best
}

/// Runs the full sweep and prints the report for every size and operator.
pub fn run_sweep(config: &SweepConfig, ops: &[OperatorDescriptor]) {
    let num_cores = num_cpus::get();
    println!("Number of processor threads: {}\n", num_cores);

    for &size in &config.sizes {
        let data = generate_data(size, config.seed, config.low, config.high);
        println!("Data size: {}", size);
        report_all_transforms(&data, ops, &config.thread_counts, num_cores);
    }
}

fn report_all_transforms(
    data: &[f64],
    ops: &[OperatorDescriptor],
    thread_counts: &[usize],
    num_cores: usize,
) {
    for desc in ops {
        println!("Operation: {}", desc.name);

        let (_, secs) = measure(|| transform_sequential(data, desc.op));
        println!("Sequential transform (no policy): {} seconds", secs);

        let (_, secs) = measure(|| transform_with_policy(data, desc.op, Policy::Seq));
        println!("Transform with seq policy: {} seconds", secs);

        let (_, secs) = measure(|| transform_with_policy(data, desc.op, Policy::Par));
        println!("Transform with par policy: {} seconds", secs);

        let (_, secs) = measure(|| transform_with_policy(data, desc.op, Policy::ParUnseq));
        println!("Transform with par_unseq policy: {} seconds", secs);

        println!("Custom parallel transform:");
        report_thread_count_sweep(data, desc.op, thread_counts, num_cores);

        println!("-------------------------------------");
    }
}

fn report_thread_count_sweep(
    data: &[f64],
    op: Operator,
    thread_counts: &[usize],
    num_cores: usize,
) {
    println!("{:<10}{:<15}", "K", "Time (seconds)");

    let timings = sweep_thread_counts(data, op, thread_counts);
    for &(k, secs) in &timings {
        println!("{:<10}{:<15}", k, secs);
    }

    if let Some((best_k, _)) = best_thread_count(&timings) {
        println!("Best K: {}", best_k);
        println!(
            "Relation to processor threads: {} / {} = {}\n",
            best_k,
            num_cores,
            best_k as f64 / num_cores as f64
        );
    }
}
