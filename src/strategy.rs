//! Transform strategies.
//!
//! Four interchangeable ways to apply a pure unary operator element-wise
//! over a slice. They are functionally identical; only the parallelization
//! differs, which is the whole point of the benchmark.

use rayon::prelude::*;
use std::ops::Range;
use std::thread;

/// Chunk width for the vectorizable-parallel policy. Large enough for the
/// inner loop to vectorize, small enough that the smallest benchmarked
/// dataset still splits across all workers.
const UNSEQ_CHUNK: usize = 4096;

/// Runtime-selected execution policy for [`transform_with_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Sequential application through the policy interface. Functionally
    /// the baseline; measures the overhead of the abstraction itself.
    Seq,
    /// Rayon work-stealing parallel iteration; partitioning and worker
    /// count are left to the runtime.
    Par,
    /// Parallel over fixed-width chunks with a tight sequential inner loop,
    /// so independent operator calls within a worker can be interleaved or
    /// vectorized. Only safe because operators are pure.
    ParUnseq,
}

/// Baseline: applies `op` across `input` in index order with no policy
/// abstraction at all.
pub fn transform_sequential<F>(input: &[f64], op: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    input.iter().map(|&x| op(x)).collect()
}

/// Applies `op` across `input` under the given policy. Every output slot is
/// written exactly once before this returns.
pub fn transform_with_policy<F>(input: &[f64], op: F, policy: Policy) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    match policy {
        Policy::Seq => input.iter().map(|&x| op(x)).collect(),
        Policy::Par => input.par_iter().map(|&x| op(x)).collect(),
        Policy::ParUnseq => {
            let mut output = vec![0.0; input.len()];
            output
                .par_chunks_mut(UNSEQ_CHUNK)
                .zip(input.par_chunks(UNSEQ_CHUNK))
                .for_each(|(out, chunk)| {
                    for (slot, &x) in out.iter_mut().zip(chunk) {
                        *slot = op(x);
                    }
                });
            output
        }
    }
}

/// Splits `[0, len)` into `k` contiguous non-overlapping ranges whose sizes
/// differ by at most 1; the first `len % k` ranges get one extra element.
/// `k` is clamped to at least 1. `k > len` is legal and yields empty ranges.
pub fn chunk_ranges(len: usize, k: usize) -> Vec<Range<usize>> {
    let k = k.max(1);
    let base = len / k;
    let remainder = len % k;

    let mut ranges = Vec::with_capacity(k);
    let mut start = 0;
    for i in 0..k {
        let size = base + usize::from(i < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Manual fixed-partition strategy: spawns exactly `k` worker threads, one
/// per chunk, and joins them all before returning.
///
/// Each worker gets a read-only view of its input sub-range and exclusive
/// ownership of its output sub-range, carved off with `split_at_mut`, so
/// the disjointness of the writes is enforced by the borrow checker rather
/// than by convention. Workers with empty ranges return immediately.
pub fn transform_fixed_threads<F>(input: &[f64], op: F, k: usize) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    let mut output = vec![0.0; input.len()];
    let op = &op;

    thread::scope(|s| {
        let mut rest: &mut [f64] = &mut output;
        for range in chunk_ranges(input.len(), k) {
            let len = range.len();
            let chunk_in = &input[range];
            // Take the remainder out of `rest` so the carved-off chunk can
            // stay lent to its worker while the loop keeps splitting.
            let (chunk_out, tail) = std::mem::take(&mut rest).split_at_mut(len);
            rest = tail;

            s.spawn(move || {
                for (slot, &x) in chunk_out.iter_mut().zip(chunk_in) {
                    *slot = op(x);
                }
            });
        }
    }); // All k workers have joined here; the output is fully populated.

    output
}
