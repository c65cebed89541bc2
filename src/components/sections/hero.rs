//! Hero section.

use dioxus::prelude::*;
use termfolio_ui::{Button, ButtonVariant};

use crate::components::glyphs::{glyph, Glyph};
use crate::components::navbar::{scroll_to, NavSection};
use crate::content;
use crate::export;

#[component]
pub fn Hero() -> Element {
    let download_cv = move |_| {
        spawn(async move {
            match export::save_cv_via_dialog().await {
                Ok(Some(path)) => tracing::info!(path = %path.display(), "CV exported"),
                Ok(None) => tracing::debug!("CV export cancelled"),
                Err(error) => tracing::error!(%error, "failed to write CV"),
            }
        });
    };

    rsx! {
        section { class: "section hero",
            div { class: "container",
                div { class: "grid-2",
                    div {
                        h1 { class: "hero-title",
                            "{content::HERO_TITLE_LINES[0]}"
                            br {}
                            "{content::HERO_TITLE_LINES[1]}"
                        }
                        p { class: "hero-blurb", "{content::HERO_BLURB}" }
                        div { class: "hero-actions",
                            Button { variant: ButtonVariant::Primary, onclick: download_cv,
                                {glyph(Glyph::Download, 16)}
                                "Download CV"
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| scroll_to(NavSection::Connect),
                                "Get in touch"
                            }
                        }
                    }

                    div { class: "hero-card-wrap",
                        div { class: "hero-card",
                            div { class: "hero-monogram",
                                span { "{content::DEVELOPER_MONOGRAM}" }
                            }
                            h3 { class: "hero-name", "{content::DEVELOPER_NAME}" }
                            p { class: "hero-role", "{content::ROLE}" }
                        }
                    }
                }
            }
        }
    }
}
