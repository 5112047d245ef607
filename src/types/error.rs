use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a TTL document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Disagreement between the array-form and object-form documents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("ttl mismatch for '{record_type}': array form has {}, object form has {}", show(array), show(object))]
    Mismatch {
        record_type: String,
        array: Option<i64>,
        object: Option<i64>,
    },

    #[error("record type '{record_type}' is missing from the array form")]
    MissingInArray { record_type: String },

    #[error("record type '{record_type}' is missing from the object form")]
    MissingInObject { record_type: String },

    #[error("document has no '{key}' table")]
    MissingTable { key: &'static str },
}

fn show(ttl: &Option<i64>) -> String {
    ttl.map_or_else(|| "no value".to_owned(), |v| v.to_string())
}
