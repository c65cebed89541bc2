//! Tech Icon Tiles
//!
//! One tile per catalog entry: a cosmetic skeleton for a configured delay,
//! then the fetched icon. A failed fetch permanently falls back to a static
//! unknown glyph plus the entry's name for that instance.

use dioxus::prelude::*;
use termfolio_ui::{IconSkeleton, ResourceTracker};

use crate::tech::{self, TechItem};

/// Lifecycle of one icon resource. `Failed` is terminal: once an icon
/// errors, the tile keeps the fallback glyph for the rest of its life.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum IconState {
    #[default]
    Pending,
    Ready(String),
    Failed,
}

impl IconState {
    pub fn settle(result: Result<String, tech::IconError>) -> Self {
        match result {
            Ok(uri) => IconState::Ready(uri),
            Err(_) => IconState::Failed,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, IconState::Failed)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TechIconProps {
    pub tech: TechItem,
    /// Show the cosmetic skeleton before revealing anything.
    #[props(default = true)]
    pub show_loading: bool,
    /// How long the skeleton stays, in milliseconds. Uncorrelated with the
    /// actual fetch except that both start on mount.
    #[props(default = 200)]
    pub loading_delay_ms: u64,
    /// Strip tracker to notify when this tile's icon settles.
    #[props(default)]
    pub tracker: Option<ResourceTracker>,
}

#[component]
pub fn TechIcon(props: TechIconProps) -> Element {
    let mut revealed = use_signal(|| false);
    let mut icon = use_signal(IconState::default);

    // Register with the strip's tracker before any fetch can resolve.
    let tracker = props.tracker;
    use_hook(move || {
        if let Some(tracker) = tracker {
            tracker.register();
        }
    });

    let delay_ms = props.loading_delay_ms;
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            revealed.set(true);
        });
    });

    let item = props.tech;
    use_effect(move || {
        spawn(async move {
            let result = tech::load_icon(&item).await;
            if let Err(ref error) = result {
                tracing::warn!(tech = item.name, %error, "icon failed to load");
            }
            let next = IconState::settle(result);
            let failed = next.is_failed();
            icon.set(next);
            if let Some(tracker) = tracker {
                if failed {
                    tracker.settle_failed();
                } else {
                    tracker.settle_loaded();
                }
            }
        });
    });

    if props.show_loading && !revealed() {
        return rsx! {
            IconSkeleton {}
        };
    }

    match icon() {
        IconState::Failed => rsx! {
            div { class: "icon-tile icon-tile--fallback",
                div { class: "icon-fallback-glyph", "?" }
                span { class: "icon-tile-label icon-tile-label--muted", "{item.name}" }
            }
        },
        IconState::Ready(uri) => rsx! {
            div { class: "icon-tile",
                img {
                    class: "icon-tile-img",
                    src: "{uri}",
                    alt: "{item.name}",
                    width: "28",
                    height: "28",
                }
                span { class: "icon-tile-label", "{item.name}" }
            }
        },
        IconState::Pending => rsx! {
            IconSkeleton {}
        },
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TechIconStripProps {
    pub items: &'static [TechItem],
    #[props(default = true)]
    pub show_loading: bool,
    /// Delay of the first tile's skeleton.
    #[props(default = 100)]
    pub base_delay_ms: u64,
    /// Extra delay added per tile so the strip reveals as a wave.
    #[props(default = 50)]
    pub stagger_ms: u64,
    #[props(default)]
    pub tracker: Option<ResourceTracker>,
}

pub fn item_delay_ms(base: u64, stagger: u64, index: usize) -> u64 {
    base + stagger * index as u64
}

/// Renders a whole catalog category as a row of tiles.
#[component]
pub fn TechIconStrip(props: TechIconStripProps) -> Element {
    rsx! {
        for (i , item) in props.items.iter().enumerate() {
            TechIcon {
                key: "{item.name}",
                tech: *item,
                show_loading: props.show_loading,
                loading_delay_ms: item_delay_ms(props.base_delay_ms, props.stagger_ms, i),
                tracker: props.tracker,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_failed_fetch_settles_into_the_terminal_failed_state() {
        let state = IconState::settle(Err(tech::IconError::BadIdentifier("nope".into())));
        assert!(state.is_failed());
        assert_eq!(state, IconState::Failed);
    }

    #[test]
    fn a_successful_fetch_carries_the_data_uri() {
        let state = IconState::settle(Ok("data:image/svg+xml;base64,AA==".into()));
        assert_eq!(
            state,
            IconState::Ready("data:image/svg+xml;base64,AA==".into())
        );
        assert!(!state.is_failed());
    }

    #[test]
    fn strip_delays_stagger_per_tile() {
        assert_eq!(item_delay_ms(100, 50, 0), 100);
        assert_eq!(item_delay_ms(100, 50, 3), 250);
        assert_eq!(item_delay_ms(0, 30, 2), 60);
    }
}
