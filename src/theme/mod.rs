//! Theme for the Postsheet preview.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
