//! termfolio UI Components
//!
//! Reusable Dioxus components for the terminal-portfolio aesthetic:
//! scrolling marquee strips, loading skeletons, buttons, and the status
//! light used in the navbar chrome.
//!
//! ## Loading choreography
//!
//! Content that arrives asynchronously (icon tiles inside a marquee) goes
//! through a skeleton phase before it is shown. Containers that gate an
//! animation on content readiness use a [`tracker::ResourceTracker`] scoped
//! to their own child resources, never a document-wide query.

pub mod components;
pub mod tracker;

pub use components::*;
pub use tracker::{use_resource_tracker, ResourceTracker, TrackerState};
