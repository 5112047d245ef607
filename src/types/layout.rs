use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A lookup strategy: given a document root and a record type, return its TTL.
pub type LookupFn = fn(&Value, &str) -> Option<i64>;

/// The two encodings of the TTL table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A sequence of `{ "types": [...], "value": n }` entries.
    Array,
    /// A mapping from record type to `{ "value": n }`.
    Object,
}

impl Layout {
    /// The lookup strategy for documents in this layout.
    #[must_use]
    pub fn strategy(self) -> LookupFn {
        match self {
            Layout::Array => crate::lookup::ttl_from_array,
            Layout::Object => crate::lookup::ttl_from_object,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Layout::Array => "array",
            Layout::Object => "object",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
