#![allow(non_snake_case)]

mod app;
mod clock;
mod components;
mod connectivity;
mod content;
pub mod context;
mod export;
mod pages;
mod tech;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Runtime knobs resolved from the command line, readable from anywhere.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Clone, Copy, Debug)]
pub struct AppConfig {
    /// Splash screen duration in milliseconds.
    pub splash_ms: u64,
    /// Seconds between connectivity probes.
    pub probe_interval_secs: u64,
    /// Whether the connectivity probe runs at all.
    pub probe_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_ms: 1500,
            probe_interval_secs: 5,
            probe_enabled: true,
        }
    }
}

/// Get the runtime configuration (set from command line or default).
pub fn config() -> AppConfig {
    CONFIG.get().copied().unwrap_or_default()
}

/// termfolio - terminal-themed developer portfolio
#[derive(Parser, Debug)]
#[command(name = "termfolio-desktop")]
#[command(about = "Terminal-themed developer portfolio")]
struct Args {
    /// Splash screen duration in milliseconds
    #[arg(long, default_value_t = 1500)]
    splash_ms: u64,

    /// Seconds between connectivity probes
    #[arg(long, default_value_t = 5)]
    probe_interval_secs: u64,

    /// Disable the connectivity probe (the status light stays ONLINE)
    #[arg(long)]
    no_probe: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = CONFIG.set(AppConfig {
        splash_ms: args.splash_ms,
        probe_interval_secs: args.probe_interval_secs.max(1),
        probe_enabled: !args.no_probe,
    });

    tracing::info!(
        splash_ms = args.splash_ms,
        probe = !args.no_probe,
        "starting termfolio"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{} - Portfolio", content::DEVELOPER_NAME))
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
