//! Property-based tests for the tile grid renderer.
//!
//! Uses proptest to verify the grid's slot-accounting invariants over
//! arbitrary tile sequences, rendered headless with dioxus-ssr.

use dioxus::prelude::*;
use postsheet_ui::{IconName, TileGrid, TileSpec};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate plain ASCII captions that survive HTML text nodes unescaped
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ]{0,18}").expect("valid regex")
}

/// Pick any glyph from the canonical set
fn icon_strategy() -> impl Strategy<Value = IconName> {
    prop::sample::select(IconName::all().to_vec())
}

/// Generate one spec, visible or hidden
fn tile_strategy() -> impl Strategy<Value = TileSpec> {
    (label_strategy(), icon_strategy(), any::<bool>()).prop_map(|(label, icon, visible)| {
        let tile = TileSpec::new(label, icon);
        if visible {
            tile
        } else {
            tile.hidden()
        }
    })
}

/// Generate a tile sequence of bounded length
fn tiles_strategy(max: usize) -> impl Strategy<Value = Vec<TileSpec>> {
    prop::collection::vec(tile_strategy(), 0..max)
}

fn render_grid(tiles: Vec<TileSpec>, fillers: usize) -> String {
    dioxus_ssr::render_element(rsx! {
        TileGrid { tiles: tiles, fillers: fillers }
    })
}

fn slot_count(html: &str) -> usize {
    html.matches("class=\"tile\"").count() + html.matches("class=\"tile tile--hidden\"").count()
}

fn rendered_labels(html: &str) -> Vec<String> {
    html.split("class=\"tile-label\">")
        .skip(1)
        .map(|rest| rest.split('<').next().unwrap_or("").to_string())
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every spec gets exactly one slot, whether or not it is visible
    #[test]
    fn slot_count_matches_sequence_length(tiles in tiles_strategy(16)) {
        let expected = tiles.len();
        let html = render_grid(tiles, 0);
        prop_assert_eq!(slot_count(&html), expected);
    }

    /// Hidden specs surface as exactly as many hidden slots
    #[test]
    fn hidden_slot_count_matches_hidden_specs(tiles in tiles_strategy(16)) {
        let expected = tiles.iter().filter(|t| !t.visible).count();
        let html = render_grid(tiles, 0);
        prop_assert_eq!(html.matches("tile--hidden").count(), expected);
    }

    /// Captions come out in input order, duplicates included
    #[test]
    fn captions_preserve_input_order(tiles in tiles_strategy(16)) {
        let expected: Vec<String> = tiles.iter().map(|t| t.label.clone()).collect();
        let html = render_grid(tiles, 0);
        prop_assert_eq!(rendered_labels(&html), expected);
    }

    /// Rendering is pure: the same sequence gives the same markup
    #[test]
    fn rendering_is_deterministic(tiles in tiles_strategy(12)) {
        let first = render_grid(tiles.clone(), 0);
        let second = render_grid(tiles, 0);
        prop_assert_eq!(first, second);
    }

    /// Fillers extend the slot count without adding captions
    #[test]
    fn fillers_extend_slot_count(tiles in tiles_strategy(8), fillers in 0..6usize) {
        let tile_count = tiles.len();
        let html = render_grid(tiles, fillers);
        prop_assert_eq!(slot_count(&html), tile_count + fillers);
        prop_assert_eq!(rendered_labels(&html).len(), tile_count);
    }
}
