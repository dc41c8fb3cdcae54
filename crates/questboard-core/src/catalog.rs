//! Category catalog
//!
//! Which quest documents belong to which category, and where they live under
//! the data directory. The catalog is configuration, never discovered: either
//! the built-in table or a `catalog.json` at the data-directory root.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{QuestError, QuestResult};

/// One configured category: an ordered list of document filenames under a
/// base path
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    /// Stable identifier, e.g. "free-bounty"
    pub id: String,
    /// Tab label shown to the user
    pub label: String,
    /// Directory holding this category's documents, relative to the data root
    pub base_path: String,
    /// Document filenames, in configured order
    #[serde(default)]
    pub files: Vec<String>,
}

/// Ordered set of categories
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<CategoryEntry>,
}

impl Catalog {
    /// The built-in catalog: free and event bounties plus the three
    /// progression tiers (which ship without documents yet)
    pub fn builtin() -> Self {
        let entry = |id: &str, label: &str, files: &[&str]| CategoryEntry {
            id: id.to_string(),
            label: label.to_string(),
            base_path: format!("data/{}", id),
            files: files.iter().map(|f| f.to_string()).collect(),
        };

        Self {
            categories: vec![
                entry("free-bounty", "Free Bounty", &["01.json", "18.json"]),
                entry("event-bounty", "Event Bounty", &["01.json"]),
                entry("bronze-prog", "Bronze Progression", &[]),
                entry("silver-prog", "Silver Progression", &[]),
                entry("gold-prog", "Gold Progression", &[]),
            ],
        }
    }

    /// Parse a catalog from JSON and validate it.
    ///
    /// A catalog with no categories or with duplicate ids is rejected; a bad
    /// override file should fail loudly at startup, not half-work.
    pub fn from_json(json: &str) -> QuestResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.categories.is_empty() {
            return Err(QuestError::Catalog("catalog has no categories".to_string()));
        }
        let mut seen = HashSet::new();
        for entry in &catalog.categories {
            if !seen.insert(entry.id.clone()) {
                return Err(QuestError::Catalog(format!(
                    "duplicate category id: {}",
                    entry.id
                )));
            }
        }
        Ok(catalog)
    }

    /// All categories, in configured order
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// Look up one category by id
    pub fn category(&self, id: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|entry| entry.id == id)
    }

    /// The category selected on startup (the first configured one)
    pub fn default_category(&self) -> &CategoryEntry {
        &self.categories[0]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
