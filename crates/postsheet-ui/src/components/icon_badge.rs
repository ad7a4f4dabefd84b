//! Icon Badge Component
//!
//! The filled circle behind each attachment glyph.

use dioxus::prelude::*;

use crate::icons::{Icon, IconName};

/// Default badge diameter in pixels.
pub const BADGE_DIAMETER: u32 = 48;

/// Properties for the IconBadge component
#[derive(Props, Clone, PartialEq)]
pub struct IconBadgeProps {
    /// Glyph centered inside the badge
    pub icon: IconName,
    /// Badge diameter in pixels
    #[props(default = BADGE_DIAMETER)]
    pub diameter: u32,
}

/// A filled circular badge centered on one glyph.
///
/// The diameter is fixed per instance; the stylesheet supplies fill and
/// glyph color through the `icon-badge` class.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconBadge { icon: IconName::Poll }
/// }
/// ```
#[component]
pub fn IconBadge(props: IconBadgeProps) -> Element {
    let d = props.diameter;

    rsx! {
        div {
            class: "icon-badge",
            style: "width: {d}px; height: {d}px;",
            Icon { name: props.icon }
        }
    }
}
