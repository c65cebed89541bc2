//! Application components for the portfolio shell.

pub mod glyphs;
mod loading_screen;
pub mod navbar;
pub mod qr_card;
pub mod sections;
pub mod tech_icon;
mod terminal_panel;

pub use loading_screen::LoadingScreen;
pub use navbar::{NavSection, Navbar};
pub use qr_card::QrCard;
pub use tech_icon::{TechIcon, TechIconStrip};
pub use terminal_panel::{TerminalPanel, TerminalVisibility};
