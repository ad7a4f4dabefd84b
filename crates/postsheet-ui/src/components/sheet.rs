//! Sheet Component
//!
//! The rounded-top surface that presents the attachment grid, modeled on
//! the mobile bottom-sheet pattern.

use dioxus::prelude::*;

use crate::components::chrome::DragHandle;

/// Properties for the Sheet component
#[derive(Props, Clone, PartialEq)]
pub struct SheetProps {
    /// Sheet content, normally a `TileGrid`
    pub children: Element,
}

/// Fixed-size rounded-top container with a grabber at its top center.
///
/// The sheet has exactly one visual state and carries no position of its
/// own; the host canvas decides where it sits. The grab handle is purely
/// decorative, the export has no drag behavior.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Sheet {
///         TileGrid { tiles: attachment_tiles() }
///     }
/// }
/// ```
#[component]
pub fn Sheet(props: SheetProps) -> Element {
    rsx! {
        section { class: "sheet",
            DragHandle {}
            div { class: "sheet-content",
                {props.children}
            }
        }
    }
}
