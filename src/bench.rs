use std::hint::black_box;
use std::time::Instant;

use log::info;

use crate::TimingSample;

/// Time `iterations` sequential calls of `lookup(record_type)`.
///
/// The clock is [`Instant`], which is monotonic. Each result passes through
/// [`black_box`] so the repeated calls cannot be elided; the last one is kept
/// in the returned sample. Misses are not errors and do not stop the loop.
pub fn benchmark<F>(lookup: F, record_type: &str, iterations: u64) -> TimingSample
where
    F: Fn(&str) -> Option<i64>,
{
    let mut last = None;
    let start = Instant::now();
    for _ in 0..iterations {
        last = black_box(lookup(black_box(record_type)));
    }
    let elapsed = start.elapsed();
    TimingSample::new(iterations, elapsed, last)
}

/// Run `warmup` untimed calls, then [`benchmark()`].
pub fn benchmark_with_warmup<F>(
    lookup: F,
    record_type: &str,
    iterations: u64,
    warmup: u64,
) -> TimingSample
where
    F: Fn(&str) -> Option<i64>,
{
    for _ in 0..warmup {
        let _ = black_box(lookup(black_box(record_type)));
    }
    let sample = benchmark(lookup, record_type, iterations);
    info!("'{record_type}': {sample}");
    sample
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn calls_lookup_exactly_n_times() {
        let calls = Cell::new(0_u64);
        let sample = benchmark(
            |_| {
                calls.set(calls.get() + 1);
                Some(1)
            },
            "A",
            250,
        );
        assert_eq!(calls.get(), 250);
        assert_eq!(sample.iterations(), 250);
        assert_eq!(sample.last(), Some(1));
    }

    #[test]
    fn zero_iterations_never_calls_lookup() {
        let calls = Cell::new(0_u64);
        let sample = benchmark(
            |_| {
                calls.set(calls.get() + 1);
                Some(1)
            },
            "A",
            0,
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(sample.last(), None);
    }

    #[test]
    fn misses_do_not_stop_the_loop() {
        let calls = Cell::new(0_u64);
        let sample = benchmark(
            |_| {
                calls.set(calls.get() + 1);
                None
            },
            "NS",
            10,
        );
        assert_eq!(calls.get(), 10);
        assert_eq!(sample.last(), None);
    }

    #[test]
    fn passes_record_type_through() {
        let sample = benchmark(|t| if t == "MX" { Some(3600) } else { None }, "MX", 3);
        assert_eq!(sample.last(), Some(3600));
    }

    #[test]
    fn warmup_calls_are_not_counted() {
        let calls = Cell::new(0_u64);
        let sample = benchmark_with_warmup(
            |_| {
                calls.set(calls.get() + 1);
                Some(1)
            },
            "A",
            5,
            7,
        );
        assert_eq!(calls.get(), 12);
        assert_eq!(sample.iterations(), 5);
    }
}
