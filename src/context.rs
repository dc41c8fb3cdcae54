//! Board context provider for QuestBoard.
//!
//! Provides the QuestBoard instance to all components via use_context.

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use questboard_core::QuestBoard;
use tokio::sync::RwLock;

/// Shared board type for context.
///
/// The board is wrapped in Arc<RwLock<>> so components can read it
/// concurrently while it is initialized once on the UI task.
pub type SharedBoard = Arc<RwLock<Option<QuestBoard>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the QuestBoard from context.
///
/// # Example
///
/// ```ignore
/// let board = use_board();
///
/// if let Some(ref b) = *board().read().await {
///     let view = b.category_view("free-bounty").await?;
/// }
/// ```
pub fn use_board() -> Signal<SharedBoard> {
    use_context::<Signal<SharedBoard>>()
}

/// Hook to check if the board is initialized.
///
/// Returns a reactive signal that updates when board state changes.
pub fn use_board_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
