//! Color constants from the post-composer export.
//!
//! Flat light palette; the same values back the CSS custom properties in
//! `styles.rs`.

#![allow(dead_code)]

// === SURFACES ===
pub const SHEET_SURFACE: &str = "#ffffff";
pub const CANVAS: &str = "#eef1f4";

// === BADGE ===
pub const BADGE_FILL: &str = "#eef3f8";

// === INK ===
pub const ICON_INK: &str = "#56687a";
pub const LABEL_INK: &str = "#5b5f66";

// === CHROME ===
pub const HANDLE_GREY: &str = "#d9dde2";
pub const INDICATOR_INK: &str = "#22262b";
