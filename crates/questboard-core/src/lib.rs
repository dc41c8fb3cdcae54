//! QuestBoard Core Library
//!
//! Loading, aggregation, and view-model mapping for static quest-definition
//! documents.
//!
//! ## Overview
//!
//! Quest documents are read-only JSON files grouped into categories by a
//! configured catalog. For one category, every document is fetched
//! concurrently; individual failures are tolerated, survivors are sorted by
//! id with a stable order, and each quest is mapped into a display-agnostic
//! card view model. A request-token tracker lets a caller ignore the result
//! of a load that has been superseded by a newer one.
//!
//! ## Quick Start
//!
//! ```ignore
//! use questboard_core::{CategoryView, QuestBoard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let board = QuestBoard::open("~/.local/share/questboard").await?;
//!
//!     match board.category_view("free-bounty").await? {
//!         CategoryView::Quests(cards) => {
//!             for card in cards {
//!                 println!("{} {} {}", card.quest_id, card.name, card.difficulty);
//!             }
//!         }
//!         CategoryView::Empty(reason) => println!("nothing to show: {:?}", reason),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod board;
pub mod card;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod requests;
pub mod types;

// Re-exports
pub use aggregate::{aggregate, EmptyReason};
pub use board::{CategoryView, QuestBoard};
pub use card::{
    difficulty_glyphs, CardView, ClaimSection, CurrencyBlock, LabeledList, RequirementsView,
    RewardSection, WeaponTimeView,
};
pub use catalog::{Catalog, CategoryEntry};
pub use error::{QuestError, QuestResult};
pub use loader::{load_category, LoadBatch, LoadError, LoadFailure};
pub use requests::{RequestToken, RequestTracker};
pub use types::*;
