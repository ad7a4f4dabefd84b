//! Attachment sheet components.
//!
//! Leaf-first: `IconBadge` draws one glyph in a circle, `LabeledTile`
//! stacks a badge over a caption, `TileGrid` lays specs out as a wrapping
//! row, `Sheet` frames the grid under a grab handle.

mod chrome;
mod icon_badge;
mod labeled_tile;
mod sheet;
mod tile_grid;

pub use chrome::*;
pub use icon_badge::*;
pub use labeled_tile::*;
pub use sheet::*;
pub use tile_grid::*;
