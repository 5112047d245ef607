use std::path::Path;

use log::debug;
use serde_json::Value;

use super::error::LoadError;
use super::layout::Layout;

/// Top-level key holding the TTL table in both document forms.
pub const TTL_TABLE_KEY: &str = "ttl0_data";

/// An immutable, already-parsed TTL document.
///
/// The tree is produced by `serde_json` and never mutated after load. Lookups
/// borrow the root via [`root()`](Self::root).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already-parsed tree.
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if the input is not valid JSON.
    pub fn from_json(input: &str) -> Result<Self, LoadError> {
        let root = serde_json::from_str(input)?;
        Ok(Self { root })
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Parse`] if its contents are not valid JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let root = serde_json::from_str(&input).map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })?;
        let doc = Self { root };
        debug!(
            "loaded {} ({} bytes, layout {:?})",
            path.display(),
            input.len(),
            doc.layout()
        );
        Ok(doc)
    }

    /// The parsed tree.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The TTL table node, if present.
    #[must_use]
    pub fn ttl_table(&self) -> Option<&Value> {
        self.root.get(TTL_TABLE_KEY)
    }

    /// Which encoding the TTL table uses, judged by its node kind.
    /// Returns `None` if the table is absent or is neither an array nor an object.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        match self.ttl_table()? {
            Value::Array(_) => Some(Layout::Array),
            Value::Object(_) => Some(Layout::Object),
            _ => None,
        }
    }

    /// The RDAP `objectClassName` field, if present.
    #[must_use]
    pub fn object_class_name(&self) -> Option<&str> {
        self.root.get("objectClassName").and_then(Value::as_str)
    }

    /// The RDAP `ldhName` field, if present.
    #[must_use]
    pub fn ldh_name(&self) -> Option<&str> {
        self.root.get("ldhName").and_then(Value::as_str)
    }
}
