//! Wall-clock benchmarking of element-wise transforms under different
//! execution strategies: a raw sequential loop, three runtime-selected
//! policies (sequential, parallel, chunked-vectorizable parallel), and a
//! manual fixed-thread-count partitioning scheme.
//!
//! Run the default sweep with: cargo run --release

pub mod data;
pub mod ops;
pub mod strategy;
pub mod sweep;
pub mod timing;

pub use data::generate_data;
pub use ops::{default_operators, Operator, OperatorDescriptor};
pub use strategy::{
    chunk_ranges, transform_fixed_threads, transform_sequential, transform_with_policy, Policy,
};
pub use sweep::{best_thread_count, run_sweep, sweep_thread_counts, SweepConfig};
pub use timing::measure;
