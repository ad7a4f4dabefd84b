//! Screens for the Postsheet preview.

mod composer;

pub use composer::Composer;
