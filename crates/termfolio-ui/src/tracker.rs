//! Scoped resource-readiness tracking.
//!
//! A container that wants to start an animation only once its content is
//! ready (the marquee) hands a [`ResourceTracker`] to the components that
//! own its child resources. Each resource registers on mount and settles
//! exactly once, loaded or failed. The container's gate passes only when
//! every registered resource has settled, so resources elsewhere on the
//! page are invisible to it.

use dioxus::prelude::*;

/// Pure counting core behind [`ResourceTracker`].
///
/// Failed loads count as settled: a failure only ever affects timing here,
/// the owning component surfaces its own fallback.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TrackerState {
    expected: usize,
    loaded: usize,
    failed: usize,
}

impl TrackerState {
    /// Announce one resource that must settle before the gate passes.
    pub fn register(&mut self) {
        self.expected += 1;
    }

    pub fn settle_loaded(&mut self) {
        self.loaded += 1;
    }

    pub fn settle_failed(&mut self) {
        self.failed += 1;
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// True once at least one resource has registered and all of them have
    /// settled. An empty tracker is never settled: the gate must not pass
    /// before the first resource had a chance to register.
    pub fn all_settled(&self) -> bool {
        self.expected > 0 && self.settled() >= self.expected
    }
}

/// Component-side handle around the tracker state.
///
/// `Copy`, so it can be passed into child props and event closures like any
/// other signal.
#[derive(Clone, Copy, PartialEq)]
pub struct ResourceTracker {
    state: Signal<TrackerState>,
}

impl ResourceTracker {
    pub fn register(mut self) {
        self.state.write().register();
    }

    pub fn settle_loaded(mut self) {
        self.state.write().settle_loaded();
    }

    pub fn settle_failed(mut self) {
        self.state.write().settle_failed();
    }

    pub fn all_settled(&self) -> bool {
        self.state.read().all_settled()
    }
}

/// Create a tracker owned by the calling component.
pub fn use_resource_tracker() -> ResourceTracker {
    let state = use_signal(TrackerState::default);
    ResourceTracker { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_is_not_settled() {
        let state = TrackerState::default();
        assert_eq!(state.expected(), 0);
        assert!(!state.all_settled());
    }

    #[test]
    fn settles_once_every_registration_resolves() {
        let mut state = TrackerState::default();
        for _ in 0..3 {
            state.register();
        }
        state.settle_loaded();
        state.settle_loaded();
        assert!(!state.all_settled());

        state.settle_loaded();
        assert!(state.all_settled());
    }

    #[test]
    fn failures_count_as_settled() {
        let mut state = TrackerState::default();
        state.register();
        state.register();
        state.settle_loaded();
        state.settle_failed();
        assert!(state.all_settled());
        assert_eq!(state.failed(), 1);
    }

    #[test]
    fn settle_order_does_not_matter() {
        let mut state = TrackerState::default();
        for _ in 0..4 {
            state.register();
        }
        state.settle_failed();
        state.settle_loaded();
        state.settle_failed();
        assert!(!state.all_settled());
        state.settle_loaded();
        assert!(state.all_settled());
        assert_eq!(state.settled(), 4);
    }
}
