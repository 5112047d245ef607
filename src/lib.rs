mod bench;
mod compare;
mod consistency;
mod error;
pub mod lookup;
mod types;

pub use bench::{benchmark, benchmark_with_warmup};
pub use compare::compare;
pub use consistency::check_consistency;
pub use error::TtlBenchError;
pub use types::{
    ApproachReport, BenchConfig, BenchmarkReport, ConsistencyError, Document, Layout, LoadError,
    LookupFn, TimingSample, DEFAULT_ARRAY_PATH, DEFAULT_ITERATIONS, DEFAULT_OBJECT_PATH,
    DEFAULT_RECORD_TYPE, TTL_TABLE_KEY,
};

/// Load both documents named by `config`.
///
/// The array form is loaded first; if the object form then fails, the array
/// document is dropped before the error is returned.
///
/// # Errors
///
/// Returns [`LoadError`] for the first document that cannot be read or parsed.
pub fn load_documents(config: &BenchConfig) -> Result<(Document, Document), LoadError> {
    let array = Document::from_file(config.array_path())?;
    let object = Document::from_file(config.object_path())?;
    Ok((array, object))
}
