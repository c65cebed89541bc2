//! Mock terminal panel.
//!
//! Display-only dropdown under the navbar: a prompt line with a blinking
//! cursor and a fixed command history revealed line by line. Nothing is
//! executable.

use dioxus::prelude::*;

use crate::content::{TERMINAL_COMMANDS, TERMINAL_PROMPT};

const LINE_STAGGER_MS: u64 = 100;

fn line_delay_ms(index: usize) -> u64 {
    index as u64 * LINE_STAGGER_MS
}

/// Visibility of the mock terminal. Closed on mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TerminalVisibility {
    open: bool,
}

impl TerminalVisibility {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[component]
pub fn TerminalPanel() -> Element {
    rsx! {
        div { class: "terminal-panel",
            div { class: "terminal-prompt-line",
                span { "{TERMINAL_PROMPT}" }
                span { class: "prompt-cursor", "_" }
            }
            div { class: "terminal-history",
                for (i , cmd) in TERMINAL_COMMANDS.iter().enumerate() {
                    div {
                        key: "{cmd}",
                        class: "terminal-line",
                        style: "animation-delay: {line_delay_ms(i)}ms;",
                        span { class: "terminal-dollar", "$ " }
                        "{cmd}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!TerminalVisibility::default().is_open());
    }

    #[test]
    fn even_toggles_return_to_closed_odd_leave_open() {
        let mut visibility = TerminalVisibility::default();

        for round in 1..=6 {
            visibility.toggle();
            assert_eq!(visibility.is_open(), round % 2 == 1, "after {round} toggles");
        }
    }

    #[test]
    fn history_lines_reveal_in_order() {
        assert_eq!(line_delay_ms(0), 0);
        assert_eq!(line_delay_ms(4), 400);
    }
}
