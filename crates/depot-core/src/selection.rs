//! Selection specifications and batch outcomes.

use serde::{Deserialize, Serialize};

/// Which entries the next bulk operation should target.
///
/// Deserializes from either the JSON string `"all"` or a JSON array of
/// entry names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionSpec {
    /// Every entry in the managed directory at selection time.
    All(AllToken),
    /// An explicit ordered list of entry names, stored verbatim.
    Entries(Vec<String>),
}

impl SelectionSpec {
    /// The `"all"` selection.
    pub fn all() -> Self {
        Self::All(AllToken::All)
    }

    /// An explicit selection of the given names.
    pub fn entries<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Entries(names.into_iter().map(Into::into).collect())
    }
}

/// The literal `"all"` selector keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllToken {
    #[serde(rename = "all")]
    All,
}

/// A per-entry failure from a bulk operation.
///
/// Entries absent from a returned failure list succeeded. The serialized
/// field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFailure {
    /// Name of the entry that failed.
    pub file: String,
    /// Human-readable error message.
    pub error: String,
}

impl EntryFailure {
    /// Record a failure for an entry.
    pub fn new(file: impl Into<String>, error: impl ToString) -> Self {
        Self {
            file: file.into(),
            error: error.to_string(),
        }
    }
}

impl std::fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file, self.error)
    }
}
