//! Composer screen - the post-composer export's attachment picker.
//!
//! A screen-sized canvas with the sheet anchored to its top edge, the way
//! the export frames it, and the home indicator at the bottom.

use dioxus::prelude::*;
use postsheet_ui::{attachment_tiles, HomeIndicator, Sheet, TileGrid};

/// The attachment-picker screen.
///
/// Static markup throughout: no tap handling, no sheet dragging, one
/// visual state.
#[component]
pub fn Composer() -> Element {
    rsx! {
        main { class: "composer-screen",
            Sheet {
                TileGrid { tiles: attachment_tiles() }
            }
            HomeIndicator {}
        }
    }
}
