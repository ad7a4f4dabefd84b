//! Decorative device chrome.
//!
//! The drag handle and home indicator are static bars carried over from
//! the export; neither has content or behavior, so both are hidden from
//! assistive tech.

use dioxus::prelude::*;

/// The grabber bar at the top center of a sheet.
#[component]
pub fn DragHandle() -> Element {
    rsx! {
        div { class: "drag-handle", "aria-hidden": "true" }
    }
}

/// The home-indicator bar at the bottom edge of a mobile screen canvas.
#[component]
pub fn HomeIndicator() -> Element {
    rsx! {
        div { class: "home-indicator", "aria-hidden": "true" }
    }
}
