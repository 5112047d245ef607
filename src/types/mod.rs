mod config;
mod document;
mod error;
mod layout;
mod report;
mod timing;

pub use config::{
    BenchConfig, DEFAULT_ARRAY_PATH, DEFAULT_ITERATIONS, DEFAULT_OBJECT_PATH, DEFAULT_RECORD_TYPE,
};
pub use document::{Document, TTL_TABLE_KEY};
pub use error::{ConsistencyError, LoadError};
pub use layout::{Layout, LookupFn};
pub use report::{ApproachReport, BenchmarkReport};
pub use timing::TimingSample;
