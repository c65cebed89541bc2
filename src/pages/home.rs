//! The portfolio page.
//!
//! Single page, assembled top-down: navbar chrome, then the four sections,
//! then the footer. Sections communicate by prop passing only.

use dioxus::prelude::*;

use crate::components::sections::{Connect, Education, Hero, TechStack};
use crate::components::Navbar;
use crate::content;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            Navbar {}
            Hero {}
            Education {}
            TechStack {}
            Connect {}
            footer { class: "footer",
                div { class: "container",
                    p { class: "footer-note", "{content::COPYRIGHT}" }
                }
            }
        }
    }
}
