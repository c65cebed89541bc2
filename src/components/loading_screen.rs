//! Launch splash.
//!
//! Full-viewport overlay shown while the one-shot splash timer runs: a
//! spinner and the word LOADING revealed letter by letter.

use dioxus::prelude::*;

const LETTERS: [&str; 7] = ["L", "O", "A", "D", "I", "N", "G"];

/// Letters start fading in after the spinner has been visible a moment.
const LETTERS_LEAD_IN_MS: u64 = 500;
const LETTER_STAGGER_MS: u64 = 100;

fn letter_delay_ms(index: usize) -> u64 {
    LETTERS_LEAD_IN_MS + index as u64 * LETTER_STAGGER_MS
}

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "splash",
            div { class: "splash-inner",
                div { class: "splash-spinner" }
                div { class: "splash-word",
                    for (i , letter) in LETTERS.iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "splash-letter",
                            style: "animation-delay: {letter_delay_ms(i)}ms;",
                            "{letter}"
                        }
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
    fn letters_spell_loading() {
        assert_eq!(LETTERS.concat(), "LOADING");
    }

    #[test]
    fn letter_delays_step_monotonically() {
        assert_eq!(letter_delay_ms(0), 500);
        assert_eq!(letter_delay_ms(1), 600);
        assert_eq!(letter_delay_ms(6), 1100);
    }
}
