use dioxus::prelude::*;

use crate::pages::Composer;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and mounts the composer screen. There is no
/// routing: the preview has exactly one screen and one visual state.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Composer {}
    }
}
