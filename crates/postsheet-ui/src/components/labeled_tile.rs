//! Labeled Tile Component
//!
//! One attachment option: an icon badge stacked over a caption. Hidden
//! tiles keep their slot in the wrap grid but render fully transparent.

use dioxus::prelude::*;

use crate::components::icon_badge::IconBadge;
use crate::tiles::{TileSpec, TILE_WIDTH};

/// Properties for the LabeledTile component
#[derive(Props, Clone, PartialEq)]
pub struct LabeledTileProps {
    /// The spec this tile renders
    pub spec: TileSpec,
}

/// Renders one `TileSpec` as a fixed-width slot.
///
/// # Design Notes
///
/// - The slot width is fixed so rows align regardless of caption length
/// - `visible == false` keeps the slot at zero opacity, the export's trick
///   for squaring off the last wrap row
/// - Invisible tiles are `aria-hidden`: they are spacing, not content
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LabeledTile { spec: TileSpec::new("Poll", IconName::Poll) }
/// }
/// ```
#[component]
pub fn LabeledTile(props: LabeledTileProps) -> Element {
    let spec = &props.spec;

    rsx! {
        div {
            class: if spec.visible { "tile" } else { "tile tile--hidden" },
            style: "width: {TILE_WIDTH}px;",
            "aria-hidden": if spec.visible { "false" } else { "true" },
            IconBadge { icon: spec.icon }
            span { class: "tile-label", "{spec.label}" }
        }
    }
}

/// An empty, invisible slot that pads the grid's final wrap row.
///
/// The explicit alternative to hiding a duplicate real tile: it reserves
/// exactly one slot width and draws nothing.
#[component]
pub fn SpacerTile() -> Element {
    rsx! {
        div {
            class: "tile tile--hidden",
            style: "width: {TILE_WIDTH}px;",
            "aria-hidden": "true",
        }
    }
}
