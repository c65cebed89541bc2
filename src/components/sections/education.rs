//! Education section.

use dioxus::prelude::*;

use crate::content::{self, EducationEntry};
use crate::tech::svg_data_uri;

#[component]
pub fn Education() -> Element {
    rsx! {
        section { id: "education", class: "section section-alt",
            div { class: "container",
                div { class: "section-intro",
                    h2 { class: "section-title", "{content::EDUCATION_TITLE}" }
                    p { class: "section-blurb", "{content::EDUCATION_BLURB}" }
                }

                div { class: "grid-2",
                    for entry in content::EDUCATION {
                        EducationCard { key: "{entry.institution}", entry: *entry }
                    }
                }
            }
        }
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> Element {
    let logo_uri = svg_data_uri(entry.logo_svg.as_bytes());

    rsx! {
        div { class: "edu-card",
            div { class: "edu-card-head",
                img {
                    class: "edu-logo",
                    src: "{logo_uri}",
                    alt: "{entry.institution} logo",
                }
                h3 { class: "edu-institution", "{entry.institution}" }
            }
            div { class: "edu-card-body",
                p { class: "edu-degree", "{entry.degree}" }
                p { class: "edu-years", "{entry.years}" }
            }
        }
    }
}
