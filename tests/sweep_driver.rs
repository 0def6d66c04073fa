//! End-to-end checks of the generator, strategies, and driver pieces with
//! small synthetic configurations.

use transform_bench::{
    best_thread_count, chunk_ranges, generate_data, sweep_thread_counts,
    transform_fixed_threads, transform_sequential, transform_with_policy, Policy,
};

fn fast_op(x: f64) -> f64 {
    x + 1.0
}

#[test]
fn generated_data_plus_one_sequentially() {
    let input = generate_data(5, 42, 0.0, 1.0);
    let output = transform_sequential(&input, fast_op);

    assert_eq!(output.len(), 5);
    for (out, inp) in output.iter().zip(&input) {
        assert_eq!(*out, inp + 1.0);
    }
}

#[test]
fn ten_elements_in_three_chunks() {
    let input = generate_data(10, 42, 0.0, 1.0);
    let ranges = chunk_ranges(input.len(), 3);

    let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
    assert_eq!(sizes, vec![4, 3, 3]);

    let output = transform_fixed_threads(&input, fast_op, 3);
    for r in ranges {
        for i in r {
            assert_eq!(output[i], fast_op(input[i]));
        }
    }
}

#[test]
fn every_strategy_computes_the_same_result() {
    let input = generate_data(10_000, 42, 0.0, 1.0);
    let baseline = transform_sequential(&input, fast_op);

    for policy in [Policy::Seq, Policy::Par, Policy::ParUnseq] {
        assert_eq!(transform_with_policy(&input, fast_op, policy), baseline);
    }
    for k in [1, 2, 4, 8, 16, 32] {
        assert_eq!(transform_fixed_threads(&input, fast_op, k), baseline);
    }
}

#[test]
fn oversubscribed_sweep_runs_to_completion() {
    // K far beyond N: most workers get empty ranges and return at once.
    let input = generate_data(10, 42, 0.0, 1.0);
    let timings = sweep_thread_counts(&input, fast_op, &[1, 100]);

    assert_eq!(timings.len(), 2);
    assert!(timings.iter().all(|&(_, secs)| secs >= 0.0));

    let (best_k, best_secs) = best_thread_count(&timings).unwrap();
    assert!(best_k == 1 || best_k == 100);
    assert!(best_secs >= 0.0);
}
