//! Page components for QuestBoard.

mod board;

pub use board::Board;
