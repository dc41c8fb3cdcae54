//! The quest board - category tabs over an expandable card list.
//!
//! Owns the display state machine: every category switch enters Loading,
//! then lands in Populated or a message state. Each switch begins a new
//! request token; a load that finishes after being superseded is dropped.

use dioxus::prelude::*;
use questboard_core::{CardView, CategoryView, EmptyReason, RequestTracker};

use crate::components::{CategoryTabs, QuestCard};
use crate::context::{use_board, use_board_ready};

/// Display states for the quest area
#[derive(Clone, PartialEq)]
enum BoardState {
    Loading,
    Populated(Vec<CardView>),
    Message(String),
}

/// User-visible text for a category that produced nothing
fn empty_message(reason: EmptyReason) -> &'static str {
    match reason {
        EmptyReason::NothingConfigured => "No quests are available for this category yet.",
        EmptyReason::AllFailed => "No quests could be loaded for this category.",
    }
}

const UNEXPECTED_MESSAGE: &str = "Something went wrong while loading quests.";

/// Main board view component.
#[component]
pub fn Board() -> Element {
    // Get shared board from context (initialized in App)
    let board = use_board();
    let board_ready = use_board_ready();

    // Local UI state
    let mut categories: Signal<Vec<(String, String)>> = use_signal(Vec::new);
    let mut active_category: Signal<Option<String>> = use_signal(|| None);
    let mut state: Signal<BoardState> = use_signal(|| BoardState::Loading);
    let mut requests: Signal<RequestTracker> = use_signal(RequestTracker::new);

    // Handler for switching category; also used for the initial load
    let mut select_category = move |category: String| {
        let token = requests.write().begin();
        active_category.set(Some(category.clone()));
        state.set(BoardState::Loading);

        spawn(async move {
            let shared = board();
            let guard = shared.read().await;
            let Some(ref b) = *guard else {
                return;
            };
            let result = b.category_view(&category).await;

            // A newer request owns the display now
            if !requests.read().is_current(token) {
                tracing::debug!("Dropping stale load for category {}", category);
                return;
            }

            match result {
                Ok(CategoryView::Quests(cards)) => state.set(BoardState::Populated(cards)),
                Ok(CategoryView::Empty(reason)) => {
                    state.set(BoardState::Message(empty_message(reason).to_string()))
                }
                Err(e) => {
                    tracing::error!("Failed to load category {}: {}", category, e);
                    state.set(BoardState::Message(UNEXPECTED_MESSAGE.to_string()));
                }
            }
        });
    };

    // Read the catalog and load the default category once the board is ready
    use_effect(move || {
        if board_ready() {
            spawn(async move {
                let shared = board();
                let guard = shared.read().await;
                let Some(ref b) = *guard else {
                    return;
                };
                let tabs: Vec<(String, String)> = b
                    .catalog()
                    .categories()
                    .iter()
                    .map(|entry| (entry.id.clone(), entry.label.clone()))
                    .collect();
                let initial = b.catalog().default_category().id.clone();
                drop(guard);

                categories.set(tabs);
                select_category(initial);
            });
        }
    });

    let content = match state() {
        BoardState::Loading => rsx! {
            div { class: "board-loading",
                div { class: "loading-spinner" }
                "Loading quests..."
            }
        },
        BoardState::Populated(cards) => rsx! {
            div { class: "quest-list",
                for card in cards.iter() {
                    QuestCard { key: "{card.quest_id}", card: card.clone() }
                }
            }
        },
        BoardState::Message(message) => rsx! {
            div { class: "board-message", "{message}" }
        },
    };

    rsx! {
        div { class: "board",
            header { class: "board-header",
                h1 { "Quest Board" }
                p { class: "board-tagline", "Bounties, progressions, and how to claim them" }
            }

            CategoryTabs {
                categories: categories(),
                active: active_category(),
                on_select: select_category,
            }

            main { class: "quest-area", {content} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_messages_are_distinct() {
        let configured = empty_message(EmptyReason::NothingConfigured);
        let failed = empty_message(EmptyReason::AllFailed);
        assert_ne!(configured, failed);
        assert_ne!(configured, UNEXPECTED_MESSAGE);
        assert_ne!(failed, UNEXPECTED_MESSAGE);
    }
}
