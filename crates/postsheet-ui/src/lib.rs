//! Postsheet UI Components
//!
//! Dioxus components for the post-composer attachment sheet. The design
//! export drew every attachment option with its own near-identical layout
//! function; this crate replaces that with one `TileSpec` table and a
//! single data-driven renderer.
//!
//! ## Layout model
//!
//! Every `TileSpec` occupies exactly one fixed-width slot in the wrapping
//! grid, in input order. A spec marked hidden keeps its slot at zero
//! opacity, while `SpacerTile` reserves a slot with nothing in it at all.
//! Both exist so the final wrap row stays aligned when the tile count
//! doesn't divide the row width.
//!
//! ## Example
//!
//! ```rust,ignore
//! use postsheet_ui::{attachment_tiles, Sheet, TileGrid};
//!
//! rsx! {
//!     Sheet {
//!         TileGrid { tiles: attachment_tiles() }
//!     }
//! }
//! ```

pub mod components;
pub mod icons;
pub mod tiles;

pub use components::*;
pub use icons::{Glyph, Icon, IconName, GLYPH_SIZE};
pub use tiles::{attachment_tiles, TileSpec, GRID_GAP, TILE_WIDTH};
