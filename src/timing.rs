//! Wall-clock timing harness.

use std::time::Instant;

/// Runs `f` and returns its result together with the elapsed wall-clock
/// time in fractional seconds, sampled from the monotonic clock immediately
/// before and after the call.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn elapsed_is_never_negative() {
        let ((), secs) = measure(|| {});
        assert!(secs >= 0.0);
    }

    #[test]
    fn returns_the_closure_result() {
        let (value, secs) = measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(secs >= 0.0);
    }

    #[test]
    fn measures_at_least_the_sleep_time() {
        let ((), secs) = measure(|| thread::sleep(Duration::from_millis(20)));
        assert!(secs >= 0.02);
    }
}
