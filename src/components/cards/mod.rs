//! Quest card components.
//!
//! A card is a header (always visible, click to toggle) over a collapsible
//! body of detail sections mapped from the core view model.

mod card_header;
mod detail_sections;
mod quest_card;

pub use card_header::CardHeader;
pub use detail_sections::{ClaimSections, CurrencyBlocks, RequirementsSection, RewardSections};
pub use quest_card::QuestCard;
