//! The quest board
//!
//! `QuestBoard` ties a catalog to a data directory and runs the full
//! load-aggregate-map pipeline for one category at a time.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::aggregate::{aggregate, EmptyReason};
use crate::card::CardView;
use crate::catalog::Catalog;
use crate::error::{QuestError, QuestResult};
use crate::loader::load_category;

/// What one category switch produced
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryView {
    /// At least one quest survived, in display order
    Quests(Vec<CardView>),
    /// Nothing to display, with the reason
    Empty(EmptyReason),
}

/// A data directory of quest documents plus the catalog describing it
#[derive(Debug)]
pub struct QuestBoard {
    root: PathBuf,
    catalog: Catalog,
}

impl QuestBoard {
    /// Open a board rooted at `root`.
    ///
    /// A `catalog.json` at the root replaces the built-in catalog; a
    /// malformed one is a startup error rather than a silent fallback.
    pub async fn open(root: impl Into<PathBuf>) -> QuestResult<Self> {
        let root = root.into();
        let catalog_path = root.join("catalog.json");
        let catalog = match tokio::fs::read_to_string(&catalog_path).await {
            Ok(json) => Catalog::from_json(&json)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Catalog::builtin(),
            Err(err) => return Err(err.into()),
        };
        info!(
            "Quest board opened at {:?} with {} categories",
            root,
            catalog.categories().len()
        );
        Ok(Self { root, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load one category and map the surviving quests into card view models.
    ///
    /// Per-document failures are absorbed into the empty/populated outcome;
    /// only an unknown category id is an error here.
    pub async fn category_view(&self, category: &str) -> QuestResult<CategoryView> {
        let entry = self
            .catalog
            .category(category)
            .ok_or_else(|| QuestError::UnknownCategory(category.to_string()))?;

        let batch = load_category(&self.root, entry).await;
        match aggregate(batch) {
            Ok(quests) => {
                info!("Loaded {} quests for category {}", quests.len(), category);
                Ok(CategoryView::Quests(
                    quests.iter().map(CardView::from_quest).collect(),
                ))
            }
            Err(reason) => Ok(CategoryView::Empty(reason)),
        }
    }
}
