//! Loading skeleton primitives.
//!
//! Placeholder shapes shown while real content is pending, sized to match
//! the content they stand in for so layout does not jump.

use dioxus::prelude::*;

/// Placeholder matching the footprint of a tech icon tile: a square where
/// the glyph goes, a short bar where the label goes.
#[component]
pub fn IconSkeleton(#[props(default)] class: Option<String>) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div { class: "icon-tile icon-tile--skeleton {extra}",
            div { class: "skeleton-block skeleton-block--glyph skeleton-pulse" }
            div { class: "skeleton-block skeleton-block--label skeleton-pulse" }
        }
    }
}
