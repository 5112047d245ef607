use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::layout::Layout;
use super::timing::TimingSample;

const RULE: &str = "============================================================";

/// Outcome of benchmarking one layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct ApproachReport {
    layout: Layout,
    ttl: Option<i64>,
    total_ms: f64,
    avg_us: f64,
    #[serde(skip)]
    elapsed: Duration,
}

impl ApproachReport {
    /// `ttl` is the result of an untimed lookup made before the timed loop.
    pub fn new(layout: Layout, ttl: Option<i64>, sample: &TimingSample) -> Self {
        Self {
            layout,
            ttl,
            total_ms: sample.total_ms(),
            avg_us: sample.avg_us(),
            elapsed: sample.elapsed(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// TTL retrieved by the untimed lookup; `None` if the record type was not found.
    #[must_use]
    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }

    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    #[must_use]
    pub fn avg_us(&self) -> f64 {
        self.avg_us
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f, "{title} Approach:")?;
        match self.ttl {
            Some(ttl) => writeln!(f, "  TTL Retrieved: {ttl}")?,
            None => writeln!(f, "  TTL Retrieved: not found")?,
        }
        writeln!(f, "  Total Time: {:.2} ms", self.total_ms)?;
        writeln!(f, "  Avg Time: {:.4} µs/op", self.avg_us)
    }
}

/// Side-by-side comparison of the array and object layouts for one record type.
///
/// Returned by [`compare()`](crate::compare). The [`Display`](fmt::Display)
/// impl renders the human-readable summary; serializing yields the same
/// numbers as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct BenchmarkReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    object_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ldh_name: Option<String>,
    record_type: String,
    iterations: u64,
    array: ApproachReport,
    object: ApproachReport,
    speedup: Option<f64>,
}

impl BenchmarkReport {
    pub fn new(
        record_type: impl Into<String>,
        iterations: u64,
        array: ApproachReport,
        object: ApproachReport,
    ) -> Self {
        let speedup = speedup(array.elapsed, object.elapsed);
        Self {
            object_class_name: None,
            ldh_name: None,
            record_type: record_type.into(),
            iterations,
            array,
            object,
            speedup,
        }
    }

    /// Attach the RDAP header fields of the documents under test.
    pub fn with_subject(mut self, object_class_name: Option<&str>, ldh_name: Option<&str>) -> Self {
        self.object_class_name = object_class_name.map(str::to_owned);
        self.ldh_name = ldh_name.map(str::to_owned);
        self
    }

    /// RDAP `objectClassName` of the documents, if they carry one.
    #[must_use]
    pub fn object_class_name(&self) -> Option<&str> {
        self.object_class_name.as_deref()
    }

    /// RDAP `ldhName` of the documents, if they carry one.
    #[must_use]
    pub fn ldh_name(&self) -> Option<&str> {
        self.ldh_name.as_deref()
    }

    #[must_use]
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub fn array(&self) -> &ApproachReport {
        &self.array
    }

    #[must_use]
    pub fn object(&self) -> &ApproachReport {
        &self.object
    }

    /// Array elapsed time divided by object elapsed time.
    /// `None` if the object loop took no measurable time.
    #[must_use]
    pub fn speedup(&self) -> Option<f64> {
        self.speedup
    }
}

fn speedup(array: Duration, object: Duration) -> Option<f64> {
    if object.is_zero() {
        return None;
    }
    Some(array.as_secs_f64() / object.as_secs_f64())
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "RUST PERFORMANCE TEST")?;
        writeln!(f, "{RULE}")?;
        if let Some(class) = &self.object_class_name {
            writeln!(f, "Object Class: {class}")?;
        }
        if let Some(name) = &self.ldh_name {
            writeln!(f, "LDH Name: {name}")?;
        }
        writeln!(f, "Record Type: {}", self.record_type)?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f)?;
        self.array.write_section(f, "Array")?;
        writeln!(f)?;
        self.object.write_section(f, "Object")?;
        writeln!(f)?;
        match self.speedup {
            Some(s) => writeln!(f, "Speedup: {s:.2}x (object is {s:.2}x faster)")?,
            None => writeln!(f, "Speedup: n/a (object time too small to measure)")?,
        }
        writeln!(f, "{RULE}")
    }
}
