//! Color constants for the terminal-portfolio palette.
//!
//! Dark developer-terminal aesthetic: near-black backgrounds, gray chrome,
//! signal colors reserved for status.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_BLACK: &str = "#000000";
pub const VOID_PANEL: &str = "#0d1117";
pub const VOID_BORDER: &str = "#1f2937";

// === STATUS ===
pub const GREEN: &str = "#4ade80";
pub const RED: &str = "#f87171";
pub const YELLOW: &str = "#eab308";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f5";
pub const TEXT_SECONDARY: &str = "#9ca3af";
pub const TEXT_MUTED: &str = "#6b7280";

// === ACCENT ===
pub const PROMPT_GREEN: &str = "#4ade80";
pub const SKELETON_GRAY: &str = "#4b5563";
