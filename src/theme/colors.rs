//! Color constants shared between Rust-rendered assets and the stylesheet.
//!
//! Warm paper palette; keep in sync with the `:root` block in `styles.rs`.

// === SURFACES ===
pub const PAPER: &str = "#fbf8f3";

// === INK ===
pub const INK: &str = "#1f1a14";
