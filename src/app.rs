//! Root application component.
//!
//! Owns the page-global UI state: the one-shot splash timer, the one-second
//! clock tick, and the connectivity watcher. Each runs independently and
//! flips its own signal; there is no coordination between them.

use dioxus::prelude::*;
use termfolio_ui::LinkState;

use crate::clock;
use crate::components::LoadingScreen;
use crate::connectivity;
use crate::context::{ClockSignal, ConnectivitySignal};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn App() -> Element {
    let config = crate::context::config();

    let mut loading = use_signal(|| true);
    let mut clock_text = use_signal(|| clock::format_clock(&chrono::Local::now()));
    let mut link = use_signal(LinkState::default);

    use_context_provider(|| ClockSignal(clock_text));
    use_context_provider(|| ConnectivitySignal(link));

    // One-shot splash dismissal.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(config.splash_ms)).await;
            loading.set(false);
            tracing::debug!("splash dismissed");
        });
    });

    // One-second clock tick.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                clock_text.set(clock::format_clock(&chrono::Local::now()));
            }
        });
    });

    // Connectivity watcher.
    use_effect(move || {
        if !config.probe_enabled {
            return;
        }
        spawn(async move {
            loop {
                let state = connectivity::probe_once().await;
                if state != *link.peek() {
                    tracing::info!(state = state.label(), "connectivity changed");
                }
                link.set(state);
                tokio::time::sleep(std::time::Duration::from_secs(config.probe_interval_secs))
                    .await;
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        if loading() {
            LoadingScreen {}
        } else {
            Home {}
        }
    }
}
