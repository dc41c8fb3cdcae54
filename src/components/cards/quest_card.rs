//! Quest Card Component
//!
//! Expandable card for one quest: header with difficulty stars, collapsible
//! body with rewards, currency, requirements, and claim instructions.

use dioxus::prelude::*;
use questboard_core::CardView;

use super::{CardHeader, ClaimSections, CurrencyBlocks, RequirementsSection, RewardSections};

/// One expandable quest card
///
/// # Examples
///
/// ```rust
/// rsx! {
///     QuestCard {
///         card: card_view,
///     }
/// }
/// ```
#[component]
pub fn QuestCard(
    /// Card view model mapped from the quest document
    card: CardView,
) -> Element {
    // Expand state is presentation only; collapsing loses nothing
    let mut expanded = use_signal(|| false);

    let body_class = if expanded() {
        "quest-body expanded"
    } else {
        "quest-body"
    };
    let chevron = if expanded() { "▲" } else { "▼" };

    rsx! {
        div {
            class: "quest-card",
            "data-quest-id": "{card.quest_id}",

            CardHeader {
                quest_id: card.quest_id.clone(),
                name: card.name.clone(),
                subtitle: card.subtitle.clone(),
                image_url: card.image_url.clone(),
                difficulty: card.difficulty.clone(),
                chevron: chevron.to_string(),
                on_toggle: move |_| expanded.set(!expanded()),
            }

            div { class: "{body_class}",
                div { class: "quest-body-content",
                    RewardSections { sections: card.rewards.clone() }
                    CurrencyBlocks { blocks: card.currencies.clone() }
                    RequirementsSection { requirements: card.requirements.clone() }
                    ClaimSections { sections: card.claim.clone() }
                }
            }
        }
    }
}
