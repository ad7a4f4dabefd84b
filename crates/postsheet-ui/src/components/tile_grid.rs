//! Tile Grid Component
//!
//! Centered, wrapping flex arrangement of attachment tiles.

use dioxus::prelude::*;

use crate::components::labeled_tile::{LabeledTile, SpacerTile};
use crate::tiles::{TileSpec, GRID_GAP};

/// Properties for the TileGrid component
#[derive(Props, Clone, PartialEq)]
pub struct TileGridProps {
    /// Tiles in display order (left-to-right, wrapping top-to-bottom)
    pub tiles: Vec<TileSpec>,
    /// Empty spacer slots appended after the tiles to square off the
    /// final wrap row
    #[props(default = 0)]
    pub fillers: usize,
}

/// Renders each spec as a `LabeledTile`, in input order, with a fixed
/// inter-tile gap.
///
/// Purely a display grid: no selection, no tap handling, no pagination.
/// Every spec gets exactly one slot whether or not it is visible.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TileGrid { tiles: attachment_tiles() }
/// }
///
/// // Five real tiles squared off to two rows of three:
/// rsx! {
///     TileGrid { tiles: five_tiles, fillers: 1 }
/// }
/// ```
#[component]
pub fn TileGrid(props: TileGridProps) -> Element {
    rsx! {
        div {
            class: "tile-grid",
            style: "gap: {GRID_GAP}px;",
            for spec in props.tiles.iter() {
                LabeledTile { spec: spec.clone() }
            }
            for _ in 0..props.fillers {
                SpacerTile {}
            }
        }
    }
}
