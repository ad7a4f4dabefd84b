//! Tile specifications for the attachment sheet grid.
//!
//! The design export drew each attachment option with its own copy-pasted
//! layout function. Here one plain data table describes the grid and a
//! single renderer walks it.

use crate::icons::IconName;

/// Width in pixels of one tile slot.
///
/// Hidden tiles and spacers reserve the same width, so wrap rows stay
/// aligned no matter which slots are visible.
pub const TILE_WIDTH: u32 = 72;

/// Gap in pixels between tile slots in the grid.
pub const GRID_GAP: u32 = 16;

/// One slot in the attachment grid: a captioned icon badge.
///
/// Order within a sequence is display order (left-to-right, wrapping
/// top-to-bottom). Specs never change after construction; the grid is
/// compiled into the view once.
#[derive(Clone, PartialEq, Debug)]
pub struct TileSpec {
    /// Caption shown under the icon badge
    pub label: String,
    /// Glyph drawn inside the badge
    pub icon: IconName,
    /// Whether the tile is visually presented. An invisible tile still
    /// occupies its slot in the wrap grid.
    pub visible: bool,
}

impl TileSpec {
    /// A visible tile with the given caption and glyph.
    pub fn new(label: impl Into<String>, icon: IconName) -> Self {
        Self {
            label: label.into(),
            icon,
            visible: true,
        }
    }

    /// Marks the tile present-but-invisible: it keeps its layout slot but
    /// renders at zero opacity.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// The fixed sequence from the post-composer export: seven attachment
/// options plus one hidden duplicate that pads the second wrap row.
///
/// The trailing duplicate is how the export balanced its grid; new grids
/// should prefer `TileGrid`'s `fillers` prop and keep their tile list to
/// real entries.
pub fn attachment_tiles() -> Vec<TileSpec> {
    vec![
        TileSpec::new("Media", IconName::Media),
        TileSpec::new("Job", IconName::Job),
        TileSpec::new("Event", IconName::Event),
        TileSpec::new("Document", IconName::Document),
        TileSpec::new("Services", IconName::Services),
        TileSpec::new("Poll", IconName::Poll),
        TileSpec::new("Celebrate", IconName::Celebrate),
        TileSpec::new("Celebrate", IconName::Celebrate).hidden(),
    ]
}
