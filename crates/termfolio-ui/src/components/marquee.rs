//! Scrolling Marquee Component
//!
//! A looping content strip: the content is rendered `repeat` times inside an
//! overflow-hidden track, and a CSS keyframe animation shifts each copy by
//! exactly one copy-width per cycle so the loop is seamless.
//!
//! The animation does not start immediately. The marquee waits out a
//! configured delay (showing an equivalent-shaped skeleton grid so layout
//! does not jump) and, when a [`ResourceTracker`] is supplied, additionally
//! waits for the marquee's own child resources to settle. Whichever finishes
//! later opens the gate, followed by a short smooth-start grace period.

use dioxus::prelude::*;

use crate::components::skeleton::IconSkeleton;
use crate::tracker::ResourceTracker;

/// Content copies per track, enough that the strip never shows a seam on
/// wide windows.
pub const DEFAULT_REPEAT: usize = 4;

/// Skeleton tiles rendered per content copy while loading.
const SKELETON_TILES_PER_COPY: usize = 6;

/// Grace period between the gate opening and the animation class being
/// applied, so the first frame is not a visible jump.
const SMOOTH_START_MS: u64 = 100;

fn effective_repeat(repeat: usize) -> usize {
    repeat.max(1)
}

/// CSS classes for one content copy. The animation class is only present
/// once the loading gate has passed; until then the copy sits static.
fn copy_class(vertical: bool, reverse: bool, started: bool, pause_on_hover: bool) -> String {
    let mut class = String::from("marquee-copy");
    class.push_str(if vertical {
        " marquee-copy--column"
    } else {
        " marquee-copy--row"
    });
    if started {
        class.push_str(match (vertical, reverse) {
            (false, false) => " marquee-anim-left",
            (false, true) => " marquee-anim-right",
            (true, false) => " marquee-anim-up",
            (true, true) => " marquee-anim-down",
        });
        if pause_on_hover {
            class.push_str(" marquee-pause-hover");
        }
    }
    class
}

#[derive(Props, Clone, PartialEq)]
pub struct MarqueeProps {
    /// Mirror the scroll direction.
    #[props(default = false)]
    pub reverse: bool,
    /// Scroll along the vertical axis instead of the horizontal one.
    #[props(default = false)]
    pub vertical: bool,
    /// Pause the animation while the pointer is over the strip.
    #[props(default = false)]
    pub pause_on_hover: bool,
    /// How many times the content is repeated inside the track.
    #[props(default = DEFAULT_REPEAT)]
    pub repeat: usize,
    /// Show the skeleton grid during the loading delay.
    #[props(default = true)]
    pub show_skeleton: bool,
    /// Minimum time before the animation may start, in milliseconds.
    #[props(default = 1000)]
    pub loading_delay_ms: u64,
    /// Readiness tracker for the marquee's own child resources. When set,
    /// the animation also waits for every registered resource to settle.
    #[props(default)]
    pub tracker: Option<ResourceTracker>,
    /// Extra CSS classes on the outer track.
    #[props(default)]
    pub class: Option<String>,
    /// Renders one copy of the strip content, called with the copy index.
    pub content: Callback<usize, Element>,
}

#[component]
pub fn Marquee(props: MarqueeProps) -> Element {
    let mut delay_done = use_signal(|| false);
    let mut started = use_signal(|| false);

    let delay_ms = props.loading_delay_ms;
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            delay_done.set(true);
        });
    });

    // Loading gate: the delay and the tracked resources must both be done.
    // Whichever finishes later wins; the grace period then smooths the start.
    let tracker = props.tracker;
    use_effect(move || {
        let resources_ready = tracker.map_or(true, |t| t.all_settled());
        if delay_done() && resources_ready && !started() {
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(SMOOTH_START_MS)).await;
                tracing::debug!("marquee loading gate passed");
                started.set(true);
            });
        }
    });

    let outer_class = match props.class.as_deref() {
        Some(extra) => format!("marquee {extra}"),
        None => "marquee".to_string(),
    };
    let repeat = effective_repeat(props.repeat);

    if props.show_skeleton && !delay_done() {
        return rsx! {
            MarqueeSkeleton {
                repeat,
                vertical: props.vertical,
                class: outer_class,
            }
        };
    }

    let class_per_copy = copy_class(
        props.vertical,
        props.reverse,
        started(),
        props.pause_on_hover,
    );

    rsx! {
        div {
            class: "{outer_class}",
            class: if props.vertical { "marquee--vertical" },
            for copy in 0..repeat {
                div {
                    key: "{copy}",
                    class: "{class_per_copy}",
                    style: if started() { "opacity: 1;" } else { "opacity: 0.8;" },
                    {props.content.call(copy)}
                }
            }
        }
    }
}

/// Skeleton grid matching the marquee's resting footprint.
#[component]
pub fn MarqueeSkeleton(
    #[props(default = DEFAULT_REPEAT)] repeat: usize,
    #[props(default = false)] vertical: bool,
    #[props(default = "marquee".to_string())] class: String,
) -> Element {
    let copy_class = if vertical {
        "marquee-copy marquee-copy--column"
    } else {
        "marquee-copy marquee-copy--row"
    };

    rsx! {
        div {
            class: "{class}",
            class: if vertical { "marquee--vertical" },
            for copy in 0..effective_repeat(repeat) {
                div { key: "{copy}", class: "{copy_class}",
                    for tile in 0..SKELETON_TILES_PER_COPY {
                        IconSkeleton { key: "{tile}" }
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
    fn repeat_is_clamped_to_at_least_one() {
        assert_eq!(DEFAULT_REPEAT, 4);
        assert_eq!(effective_repeat(0), 1);
        assert_eq!(effective_repeat(1), 1);
        assert_eq!(effective_repeat(4), 4);
    }

    #[test]
    fn no_animation_class_before_the_gate_passes() {
        let class = copy_class(false, false, false, true);
        assert!(class.contains("marquee-copy--row"));
        assert!(!class.contains("marquee-anim"));
        assert!(!class.contains("marquee-pause-hover"));
    }

    #[test]
    fn forward_horizontal_scrolls_left() {
        let class = copy_class(false, false, true, false);
        assert!(class.contains("marquee-anim-left"));
    }

    #[test]
    fn reverse_selects_the_mirrored_animation() {
        let class = copy_class(false, true, true, false);
        assert!(class.contains("marquee-anim-right"));
        assert!(!class.contains("marquee-anim-left"));
    }

    #[test]
    fn vertical_axis_uses_column_classes() {
        let up = copy_class(true, false, true, false);
        assert!(up.contains("marquee-copy--column"));
        assert!(up.contains("marquee-anim-up"));

        let down = copy_class(true, true, true, false);
        assert!(down.contains("marquee-anim-down"));
    }

    #[test]
    fn pause_on_hover_applies_only_once_started() {
        assert!(copy_class(false, false, true, true).contains("marquee-pause-hover"));
        assert!(!copy_class(false, false, false, true).contains("marquee-pause-hover"));
    }
}
