//! Navigation Bar
//!
//! Fixed shell chrome at the top of the page:
//! - status bar row: connectivity light, environment badges, clock
//! - main row: prompt identity, section links, terminal toggle, socials
//! - the mock terminal panel, when toggled open

use dioxus::document;
use dioxus::prelude::*;
use termfolio_ui::{IconButton, StatusLight};

use crate::clock;
use crate::components::glyphs::{glyph, Glyph};
use crate::components::terminal_panel::{TerminalPanel, TerminalVisibility};
use crate::content;
use crate::context::{use_clock, use_connectivity};

/// Scroll-target sections of the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavSection {
    Education,
    TechStack,
    Connect,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [
        NavSection::Education,
        NavSection::TechStack,
        NavSection::Connect,
    ];

    /// Get the display name for this section
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Education => "Education",
            NavSection::TechStack => "Tech Stack",
            NavSection::Connect => "Connect",
        }
    }

    /// The `id` attribute of the section element this entry scrolls to.
    pub fn section_id(&self) -> &'static str {
        match self {
            NavSection::Education => "education",
            NavSection::TechStack => "techstack",
            NavSection::Connect => "connect",
        }
    }

    /// The fake command shown under the entry on hover.
    pub fn command_hint(&self) -> &'static str {
        match self {
            NavSection::Education => "cat education.md",
            NavSection::TechStack => "ls -la tech/",
            NavSection::Connect => "curl contact.dev",
        }
    }

    /// `./education` style menu entry.
    pub fn menu_entry(&self) -> String {
        format!("./{}", self.label().to_lowercase())
    }
}

/// Scroll script for a section id. Null-guarded: a missing target id is a
/// no-op rather than a JS error.
pub fn scroll_script(section_id: &str) -> String {
    format!(
        r#"var el = document.getElementById("{section_id}");
if (el) {{ el.scrollIntoView({{ behavior: "smooth" }}); }}"#
    )
}

/// Smooth-scroll the given section into view.
pub fn scroll_to(section: NavSection) {
    document::eval(&scroll_script(section.section_id()));
}

#[component]
pub fn Navbar() -> Element {
    let clock_text = use_clock();
    let link = use_connectivity();
    let mut terminal = use_signal(TerminalVisibility::default);

    let utc_badge = clock::format_utc_offset(clock::local_offset_seconds());

    rsx! {
        nav { class: "navbar",
            div { class: "container",
                // Status bar row
                div { class: "statusbar",
                    div { class: "statusbar-group",
                        StatusLight { state: link() }
                        div { class: "statusbar-badge",
                            {glyph(Glyph::Terminal, 12)}
                            span { "{content::STATUS_ENV}" }
                        }
                        div { class: "statusbar-badge",
                            {glyph(Glyph::Coffee, 12)}
                            span { "{content::STATUS_CAFFEINE}" }
                        }
                    }
                    div { class: "statusbar-group",
                        span { "{utc_badge} {clock_text}" }
                        div { class: "statusbar-badge",
                            {glyph(Glyph::Code, 12)}
                            span { "{content::STATUS_LANGUAGE}" }
                        }
                    }
                }

                // Main navigation row
                div { class: "navbar-main",
                    // Prompt identity
                    div { class: "nav-identity",
                        div { class: "nav-identity-row",
                            div { class: "traffic-lights",
                                span { class: "traffic-light traffic-light--red" }
                                span { class: "traffic-light traffic-light--yellow" }
                                span { class: "traffic-light traffic-light--green" }
                            }
                            div { class: "nav-prompt",
                                span { class: "nav-prompt-path", "{content::PROMPT}" }
                                span { class: "prompt-cursor", "_" }
                            }
                        }
                        div { class: "nav-identity-sub", "{content::ROLE_TAGLINE}" }
                    }

                    // Section links
                    div { class: "nav-links",
                        for section in NavSection::ALL {
                            button {
                                key: "{section.section_id()}",
                                class: "nav-item",
                                onclick: move |_| scroll_to(section),
                                div { class: "nav-item-entry", "{section.menu_entry()}" }
                                div { class: "nav-item-hint", "$ {section.command_hint()}" }
                            }
                        }
                    }

                    // Tools: terminal toggle + socials
                    div { class: "nav-tools",
                        IconButton {
                            onclick: move |_| terminal.write().toggle(),
                            aria_label: "Toggle terminal".to_string(),
                            class: "terminal-toggle".to_string(),
                            {glyph(Glyph::Terminal, 16)}
                        }

                        div { class: "nav-socials",
                            for social in content::SOCIAL_LINKS {
                                a {
                                    key: "{social.label}",
                                    class: "social-link",
                                    href: "{social.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    {glyph(social_glyph(social.label), 16)}
                                    span { class: "social-tooltip", "{social.label}" }
                                }
                            }
                        }
                    }
                }

                if terminal().is_open() {
                    TerminalPanel {}
                }
            }
        }
    }
}

fn social_glyph(label: &str) -> Glyph {
    match label {
        "GitHub" => Glyph::Github,
        "LinkedIn" => Glyph::Linkedin,
        _ => Glyph::Send,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_match_the_page_anchors() {
        assert_eq!(NavSection::Education.section_id(), "education");
        assert_eq!(NavSection::TechStack.section_id(), "techstack");
        assert_eq!(NavSection::Connect.section_id(), "connect");
    }

    #[test]
    fn menu_entries_are_dot_slash_lowercase() {
        assert_eq!(NavSection::Education.menu_entry(), "./education");
        assert_eq!(NavSection::TechStack.menu_entry(), "./tech stack");
        assert_eq!(NavSection::Connect.menu_entry(), "./connect");
    }

    #[test]
    fn every_section_has_a_command_hint() {
        for section in NavSection::ALL {
            assert!(!section.command_hint().is_empty());
        }
    }

    #[test]
    fn scroll_script_targets_the_given_id() {
        let script = scroll_script("education");
        assert!(script.contains(r#"getElementById("education")"#));
        assert!(script.contains("scrollIntoView"));
    }

    #[test]
    fn scroll_script_null_guards_missing_targets() {
        // The lookup result is checked before use, so an absent id runs the
        // script to completion without touching scrollIntoView.
        let script = scroll_script("no-such-section");
        assert!(script.contains("if (el)"));
    }
}
