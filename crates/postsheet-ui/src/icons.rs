//! Icon glyphs for the attachment sheet.
//!
//! Inline Lucide-style SVGs (<https://lucide.dev>), one per attachment kind.
//! All glyphs use stroke="currentColor" so the surrounding badge decides
//! their color.

use dioxus::prelude::*;

/// Default glyph edge length in pixels.
pub const GLYPH_SIZE: u32 = 24;

/// The glyphs the sheet can show.
///
/// `from_name` is the stable name-to-glyph lookup for callers that carry
/// icon names as strings (the form the export used); everything else works
/// with the enum directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IconName {
    Media,
    Job,
    Event,
    Document,
    Services,
    Poll,
    Celebrate,
}

impl IconName {
    /// Canonical display name of this glyph.
    pub fn name(&self) -> &'static str {
        match self {
            IconName::Media => "Media",
            IconName::Job => "Job",
            IconName::Event => "Event",
            IconName::Document => "Document",
            IconName::Services => "Services",
            IconName::Poll => "Poll",
            IconName::Celebrate => "Celebrate",
        }
    }

    /// Case-insensitive lookup by name.
    ///
    /// Returns `None` for names outside the set; `Glyph` turns that into
    /// a placeholder rather than an error.
    pub fn from_name(name: &str) -> Option<IconName> {
        IconName::all()
            .iter()
            .copied()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
    }

    /// All glyphs, in the sheet's canonical order.
    pub fn all() -> &'static [IconName] {
        &[
            IconName::Media,
            IconName::Job,
            IconName::Event,
            IconName::Document,
            IconName::Services,
            IconName::Poll,
            IconName::Celebrate,
        ]
    }
}

/// Properties for the Icon component
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    /// Which glyph to draw
    pub name: IconName,
    /// Edge length of the square glyph in pixels
    #[props(default = GLYPH_SIZE)]
    pub size: u32,
}

/// Renders one glyph as an inline SVG.
///
/// The glyph reference is a compile-time constant, so this cannot fail;
/// string-keyed callers go through `Glyph` instead.
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    match props.name {
        IconName::Media => rsx! {
            // Lucide image icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
                circle { cx: "9", cy: "9", r: "2" }
                path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
            }
        },
        IconName::Job => rsx! {
            // Lucide briefcase icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
                rect { x: "2", y: "6", width: "20", height: "14", rx: "2" }
            }
        },
        IconName::Event => rsx! {
            // Lucide calendar icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M8 2v4" }
                path { d: "M16 2v4" }
                rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
                path { d: "M3 10h18" }
            }
        },
        IconName::Document => rsx! {
            // Lucide file-text icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
                path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
                path { d: "M10 9H8" }
                path { d: "M16 13H8" }
                path { d: "M16 17H8" }
            }
        },
        IconName::Services => rsx! {
            // Lucide wrench icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z" }
            }
        },
        IconName::Poll => rsx! {
            // Lucide bar-chart icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12 20V10" }
                path { d: "M18 20V4" }
                path { d: "M6 20v-4" }
            }
        },
        IconName::Celebrate => rsx! {
            // Lucide party-popper icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M5.8 11.3 2 22l10.7-3.79" }
                path { d: "M4 3h.01" }
                path { d: "M22 8h.01" }
                path { d: "M15 2h.01" }
                path { d: "M22 20h.01" }
                path { d: "m22 2-2.24.75a2.9 2.9 0 0 0-1.96 3.12c.1.86-.57 1.63-1.45 1.63h-.38c-.86 0-1.6.6-1.76 1.44L14 10" }
                path { d: "m22 13-.82-.33c-.86-.34-1.82.2-1.98 1.11c-.11.7-.72 1.22-1.43 1.22H17" }
                path { d: "m11 2 .33.82c.34.86-.2 1.82-1.11 1.98c-.7.12-1.22.73-1.22 1.45V7" }
                path { d: "M11 13c1.93 1.93 2.83 4.17 2 5-.83.83-3.07-.07-5-2-1.93-1.93-2.83-4.17-2-5 .83-.83 3.07.07 5 2Z" }
            }
        },
    }
}

/// Properties for the Glyph component
#[derive(Props, Clone, PartialEq)]
pub struct GlyphProps {
    /// Icon name as exported, e.g. "Media" or "poll"
    pub name: String,
    /// Edge length of the square glyph in pixels
    #[props(default = GLYPH_SIZE)]
    pub size: u32,
}

/// Name-keyed glyph lookup for callers that carry icon names as strings.
///
/// Unknown names draw a neutral placeholder instead of failing. The sheet
/// itself never reaches this path because `TileSpec` stores `IconName`.
#[component]
pub fn Glyph(props: GlyphProps) -> Element {
    let size = props.size;
    match IconName::from_name(&props.name) {
        Some(icon) => rsx! {
            Icon { name: icon, size: props.size }
        },
        None => {
            tracing::warn!("unknown glyph name: {:?}", props.name);
            rsx! {
                // Lucide circle-help icon, dimmed by the stylesheet
                svg {
                    class: "glyph-placeholder",
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "{size}",
                    height: "{size}",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    circle { cx: "12", cy: "12", r: "10" }
                    path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
                    path { d: "M12 17h.01" }
                }
            }
        }
    }
}
