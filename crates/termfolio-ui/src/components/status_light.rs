//! Connection Status Indicator
//!
//! The small dot-plus-label readout in the status bar. Two states only:
//! reachable or not. The dot color carries the state, the label spells it
//! out.

use dioxus::prelude::*;

/// Reachability of the outside world, as shown in the status bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LinkState {
    /// The last probe got an answer.
    #[default]
    Online,
    /// The last probe timed out or was refused.
    Offline,
}

impl LinkState {
    /// Returns the display label for this state
    pub fn label(&self) -> &'static str {
        match self {
            LinkState::Online => "ONLINE",
            LinkState::Offline => "OFFLINE",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, LinkState::Online)
    }

    /// Returns the CSS class for the indicator dot
    pub fn dot_class(&self) -> &'static str {
        match self {
            LinkState::Online => "status-dot status-dot--online",
            LinkState::Offline => "status-dot status-dot--offline",
        }
    }
}

/// Properties for the StatusLight component
#[derive(Clone, PartialEq, Props)]
pub struct StatusLightProps {
    /// The current link state to display
    pub state: LinkState,
}

/// Displays the reachability state with a colored dot and label.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusLight { state: LinkState::Online }
/// }
/// ```
#[component]
pub fn StatusLight(props: StatusLightProps) -> Element {
    rsx! {
        div { class: "status-light",
            span { class: "{props.state.dot_class()}" }
            span { class: "status-light-label", "{props.state.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_status_bar_copy() {
        assert_eq!(LinkState::Online.label(), "ONLINE");
        assert_eq!(LinkState::Offline.label(), "OFFLINE");
    }

    #[test]
    fn default_state_is_online() {
        assert_eq!(LinkState::default(), LinkState::Online);
        assert!(LinkState::default().is_online());
    }

    #[test]
    fn dot_class_tracks_the_state() {
        assert_eq!(
            LinkState::Online.dot_class(),
            "status-dot status-dot--online"
        );
        assert_eq!(
            LinkState::Offline.dot_class(),
            "status-dot status-dot--offline"
        );
    }
}
