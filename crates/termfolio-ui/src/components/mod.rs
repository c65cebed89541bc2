//! UI Components for termfolio.
//!
//! Terminal-portfolio aesthetic components.

mod button;
mod marquee;
mod skeleton;
mod status_light;

pub use button::{Button, ButtonVariant, IconButton};
pub use marquee::{Marquee, MarqueeSkeleton, DEFAULT_REPEAT};
pub use skeleton::IconSkeleton;
pub use status_light::{LinkState, StatusLight};
