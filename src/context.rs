//! Page-global context for termfolio.
//!
//! The app root owns a handful of independent signals (clock string,
//! connectivity state) and provides them here; components read them via
//! these hooks. Each signal is written by exactly one task.

use dioxus::prelude::*;
use termfolio_ui::LinkState;

use crate::AppConfig;

/// Runtime configuration resolved in `main`.
pub fn config() -> AppConfig {
    crate::config()
}

/// Newtype so the clock context cannot collide with other string signals.
#[derive(Clone, Copy, PartialEq)]
pub struct ClockSignal(pub Signal<String>);

/// Newtype for the connectivity context.
#[derive(Clone, Copy, PartialEq)]
pub struct ConnectivitySignal(pub Signal<LinkState>);

/// Hook to read the status-bar clock (`HH:MM:SS`, ticked every second).
pub fn use_clock() -> Signal<String> {
    use_context::<ClockSignal>().0
}

/// Hook to read the connectivity state behind the status light.
pub fn use_connectivity() -> Signal<LinkState> {
    use_context::<ConnectivitySignal>().0
}
