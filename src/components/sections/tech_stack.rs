//! Tech-stack section.
//!
//! A languages grid, then two marquee strips: frontend scrolling
//! right-to-left (reversed), backend left-to-right. Each marquee gates its
//! animation on its own resource tracker, so one strip's slow icons never
//! hold the other back.

use dioxus::prelude::*;
use termfolio_ui::{use_resource_tracker, Marquee};

use crate::components::tech_icon::{item_delay_ms, TechIcon, TechIconStrip};
use crate::tech;

const MARQUEE_DELAY_MS: u64 = 800;

#[component]
pub fn TechStack() -> Element {
    let frontend_tracker = use_resource_tracker();
    let backend_tracker = use_resource_tracker();

    rsx! {
        section { id: "techstack", class: "section",
            div { class: "container",
                div { class: "section-intro",
                    h2 { class: "section-title", "Programming Languages" }
                    p { class: "section-blurb", "Core programming languages I use for development." }
                }

                div { class: "language-grid",
                    for (i , item) in tech::LANGUAGES.iter().enumerate() {
                        div { key: "{item.name}", class: "language-card",
                            TechIcon {
                                tech: *item,
                                loading_delay_ms: item_delay_ms(100, 50, i),
                            }
                        }
                    }
                }

                div { class: "section-intro",
                    h2 { class: "section-title", "Tech Stack" }
                    p { class: "section-blurb",
                        "Technologies and tools I use to build modern, scalable applications."
                    }
                }

                div { class: "marquee-stack",
                    Marquee {
                        class: "marquee-panel".to_string(),
                        reverse: true,
                        pause_on_hover: true,
                        loading_delay_ms: MARQUEE_DELAY_MS,
                        tracker: frontend_tracker,
                        content: Callback::new(move |_copy: usize| rsx! {
                            TechIconStrip {
                                items: tech::FRONTEND,
                                show_loading: false,
                                tracker: frontend_tracker,
                            }
                        }),
                    }

                    Marquee {
                        class: "marquee-panel".to_string(),
                        reverse: false,
                        pause_on_hover: true,
                        loading_delay_ms: MARQUEE_DELAY_MS,
                        tracker: backend_tracker,
                        content: Callback::new(move |_copy: usize| rsx! {
                            TechIconStrip {
                                items: tech::BACKEND,
                                show_loading: false,
                                tracker: backend_tracker,
                            }
                        }),
                    }
                }
            }
        }
    }
}
