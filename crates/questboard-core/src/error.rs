//! Error types for QuestBoard

use thiserror::Error;

/// Main error type for QuestBoard operations
///
/// Per-document load failures are not errors at this level; they are carried
/// inside a load batch and dropped by the aggregator. `QuestError` covers the
/// faults outside that path: bad catalogs, unknown categories, and I/O on the
/// data directory itself.
#[derive(Error, Debug)]
pub enum QuestError {
    /// Category id is not present in the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Catalog configuration is structurally invalid
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using QuestError
pub type QuestResult<T> = Result<T, QuestError>;
