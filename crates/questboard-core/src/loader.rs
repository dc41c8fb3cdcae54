//! Concurrent quest document loading
//!
//! Every document in a category is fetched independently; a failed read or a
//! malformed document marks that one item as failed and never aborts its
//! siblings. The join completes only once every fetch has settled. There is
//! no retry, no timeout, and no cancellation.

use std::path::Path;

use futures::future::join_all;
use thiserror::Error;
use tracing::warn;

use crate::catalog::CategoryEntry;
use crate::types::Quest;

/// Why one document failed to load
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read (missing, unreadable)
    #[error("could not read document: {0}")]
    Transport(#[source] std::io::Error),

    /// The file was read but is not a valid quest document
    #[error("could not parse document: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A single failed document, with the filename it was configured under
#[derive(Debug)]
pub struct LoadFailure {
    pub file: String,
    pub error: LoadError,
}

/// Result of loading every configured document for one category
#[derive(Debug)]
pub enum LoadBatch {
    /// The category has no files configured; distinct from every file failing
    NothingConfigured,
    /// One outcome per configured file, in catalog order
    Fetched(Vec<Result<Quest, LoadFailure>>),
}

/// Load every document configured for `entry`, rooted at `root`.
///
/// All reads run concurrently and the batch is returned only once each has
/// settled.
pub async fn load_category(root: &Path, entry: &CategoryEntry) -> LoadBatch {
    if entry.files.is_empty() {
        return LoadBatch::NothingConfigured;
    }

    let fetches = entry.files.iter().map(|file| {
        let path = root.join(&entry.base_path).join(file);
        async move {
            match load_document(&path).await {
                Ok(quest) => Ok(quest),
                Err(error) => {
                    warn!("Could not load {}: {}", file, error);
                    Err(LoadFailure {
                        file: file.clone(),
                        error,
                    })
                }
            }
        }
    });

    LoadBatch::Fetched(join_all(fetches).await)
}

async fn load_document(path: &Path) -> Result<Quest, LoadError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(LoadError::Transport)?;
    serde_json::from_str(&contents).map_err(LoadError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_files(files: &[&str]) -> CategoryEntry {
        CategoryEntry {
            id: "test".to_string(),
            label: "Test".to_string(),
            base_path: "data/test".to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_file_list_is_nothing_configured() {
        // Never touches the filesystem
        let entry = entry_with_files(&[]);
        let batch = load_category(Path::new("/nonexistent"), &entry).await;
        assert!(matches!(batch, LoadBatch::NothingConfigured));
    }

    #[tokio::test]
    async fn test_missing_files_become_per_item_failures() {
        let entry = entry_with_files(&["01.json", "02.json"]);
        let batch = load_category(Path::new("/nonexistent"), &entry).await;
        let LoadBatch::Fetched(outcomes) = batch else {
            panic!("expected fetched batch");
        };
        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            let failure = outcome.as_ref().unwrap_err();
            assert!(matches!(failure.error, LoadError::Transport(_)));
        }
        assert_eq!(outcomes[0].as_ref().unwrap_err().file, "01.json");
    }
}
