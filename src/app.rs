use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, SharedBoard};
use crate::pages::Board;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the board context, then renders the single
/// board view.
#[component]
pub fn App() -> Element {
    // Initialize shared board state
    let board: Signal<SharedBoard> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut board_ready: Signal<bool> = use_signal(|| false);

    // Provide board context to all child components
    use_context_provider(|| board);
    use_context_provider(|| board_ready);

    // Open the board on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            match questboard_core::QuestBoard::open(data_dir).await {
                Ok(opened) => {
                    let shared = board();
                    let mut guard = shared.write().await;
                    *guard = Some(opened);
                    drop(guard);
                    board_ready.set(true);
                    tracing::info!("Quest board ready");
                }
                Err(e) => {
                    tracing::error!("Failed to open quest board: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Board {}
    }
}
