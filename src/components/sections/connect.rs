//! Connect section.
//!
//! Contact details with click-to-copy, outbound profile links, a QR card,
//! and the contact form. The form has native validation only and no
//! transport: submitting logs and stays on the page.

use dioxus::prelude::*;
use termfolio_ui::{Button, ButtonVariant};

use crate::components::glyphs::{glyph, Glyph};
use crate::components::qr_card::QrCard;
use crate::content;

/// Which contact detail was just copied, for transient feedback.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CopiedDetail {
    Phone,
    Email,
}

#[component]
pub fn Connect() -> Element {
    let mut copied: Signal<Option<CopiedDetail>> = use_signal(|| None);

    let copy_detail = move |detail: CopiedDetail, text: &'static str| {
        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if clipboard.set_text(text).is_ok() {
                        copied.set(Some(detail));
                        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                        copied.set(None);
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "clipboard not available");
                    // Still acknowledge the click even without a clipboard.
                    copied.set(Some(detail));
                    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                    copied.set(None);
                }
            }
        });
    };

    rsx! {
        section { id: "connect", class: "section section-alt",
            div { class: "container",
                div { class: "grid-2",
                    div {
                        h2 { class: "section-title", "Let's Connect" }

                        div { class: "contact-details",
                            button {
                                class: "contact-row",
                                onclick: move |_| copy_detail(CopiedDetail::Phone, content::PHONE),
                                {glyph(Glyph::Phone, 18)}
                                span { "{content::PHONE}" }
                                if copied() == Some(CopiedDetail::Phone) {
                                    span { class: "copied-note", "copied" }
                                }
                            }
                            button {
                                class: "contact-row",
                                onclick: move |_| copy_detail(CopiedDetail::Email, content::EMAIL),
                                {glyph(Glyph::Mail, 18)}
                                span { "{content::EMAIL}" }
                                if copied() == Some(CopiedDetail::Email) {
                                    span { class: "copied-note", "copied" }
                                }
                            }
                        }

                        div { class: "contact-links",
                            for social in content::SOCIAL_LINKS {
                                a {
                                    key: "{social.label}",
                                    class: "contact-link",
                                    href: "{social.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{social.label}"
                                }
                            }
                        }

                        QrCard {
                            data: content::GITHUB_URL.to_string(),
                            label: "scan to find me on GitHub".to_string(),
                        }
                    }

                    form {
                        class: "contact-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            tracing::info!("contact form submitted; no transport is configured");
                        },
                        div { class: "form-row",
                            input {
                                class: "form-input",
                                r#type: "text",
                                placeholder: "Name",
                                required: true,
                            }
                            input {
                                class: "form-input",
                                r#type: "email",
                                placeholder: "Email",
                                required: true,
                            }
                        }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Subject",
                        }
                        textarea {
                            class: "form-textarea",
                            placeholder: "Message",
                            required: true,
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit".to_string(),
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
