use std::fmt;
use std::time::Duration;

/// Wall-clock measurement of `iterations` back-to-back lookups.
///
/// Produced by [`benchmark()`](crate::benchmark). Only the aggregate is
/// recorded; per-call distribution is not observable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct TimingSample {
    iterations: u64,
    elapsed: Duration,
    last: Option<i64>,
}

impl TimingSample {
    pub(crate) fn new(iterations: u64, elapsed: Duration, last: Option<i64>) -> Self {
        Self {
            iterations,
            elapsed,
            last,
        }
    }

    /// Number of timed lookups.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Elapsed time for the whole loop.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Result of the final timed lookup.
    #[must_use]
    pub fn last(&self) -> Option<i64> {
        self.last
    }

    /// Total elapsed time in milliseconds.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Average time per lookup in microseconds. `0.0` when no lookups ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1_000_000.0 / self.iterations as f64
    }
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} iterations in {:.2} ms ({:.4} µs/op)",
            self.iterations,
            self.total_ms(),
            self.avg_us()
        )
    }
}
