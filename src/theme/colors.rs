//! Color constants for the quest board palette.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_BLACK: &str = "#0a0a0a";
pub const VOID_LIGHTER: &str = "#0e0e12";
pub const VOID_BORDER: &str = "#1a1a1a";

// === GOLD (Titles, Difficulty, Currency) ===
pub const GOLD: &str = "#d4af37";
pub const GOLD_GLOW: &str = "rgba(212, 175, 55, 0.3)";

// === CYAN (Tabs, Links, Accents) ===
pub const CYAN: &str = "#00d4aa";
pub const CYAN_GLOW: &str = "rgba(0, 212, 170, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f5";
pub const TEXT_SECONDARY: &str = "rgba(245, 245, 245, 0.7)";
pub const TEXT_MUTED: &str = "rgba(245, 245, 245, 0.5)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff3366";
pub const WARNING: &str = "#ff9f00";
