use std::path::{Path, PathBuf};

/// Default location of the array-form document.
pub const DEFAULT_ARRAY_PATH: &str = "/data/array_data.json";
/// Default location of the object-form document.
pub const DEFAULT_OBJECT_PATH: &str = "/data/object_data.json";
/// Default record type under test.
pub const DEFAULT_RECORD_TYPE: &str = "A";
/// Default number of timed lookups per approach.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Parameters for a benchmark run.
///
/// # Example
///
/// ```
/// use ttlbench::BenchConfig;
///
/// let config = BenchConfig::new()
///     .with_record_type("MX")
///     .with_iterations(1_000);
/// assert_eq!(config.record_type(), "MX");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    array_path: PathBuf,
    object_path: PathBuf,
    record_type: String,
    iterations: u64,
    warmup: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            array_path: PathBuf::from(DEFAULT_ARRAY_PATH),
            object_path: PathBuf::from(DEFAULT_OBJECT_PATH),
            record_type: DEFAULT_RECORD_TYPE.to_owned(),
            iterations: DEFAULT_ITERATIONS,
            warmup: 0,
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_array_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.array_path = path.into();
        self
    }

    #[must_use]
    pub fn with_object_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.object_path = path.into();
        self
    }

    #[must_use]
    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Untimed lookups to run before each timed loop.
    #[must_use]
    pub fn with_warmup(mut self, warmup: u64) -> Self {
        self.warmup = warmup;
        self
    }

    #[must_use]
    pub fn array_path(&self) -> &Path {
        &self.array_path
    }

    #[must_use]
    pub fn object_path(&self) -> &Path {
        &self.object_path
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
    pub fn warmup(&self) -> u64 {
        self.warmup
    }
}
