#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tipjar_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::app::Screen;

/// Settings resolved at startup, read by the root component
#[derive(Debug, Clone, Default)]
pub struct LaunchSettings {
    pub config: AppConfig,
    pub screen: Option<Screen>,
}

static LAUNCH: OnceLock<LaunchSettings> = OnceLock::new();

/// Startup settings (defaults when unset, e.g. in tests)
pub fn launch_settings() -> LaunchSettings {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Tipjar - tipping companion screens
#[derive(Parser, Debug)]
#[command(name = "tipjar-desktop")]
#[command(about = "Tipjar - reminders, security, receipts and tip history")]
struct Args {
    /// Config file (defaults to <config_dir>/tipjar/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to open on launch
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Seed for the generated tip history (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Tracing filter, e.g. "info,tipjar=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

// target prefixes: also covers tipjar_core, tipjar_ui and the binary
const DEFAULT_FILTER: &str = "info,tipjar=debug";

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let mut config = AppConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(seed) = args.seed {
        config.wallet_seed = seed;
    }

    tracing::info!(
        screen = ?args.screen,
        seed = config.wallet_seed,
        latency_ms = config.latency_ms,
        "starting tipjar"
    );

    let _ = LAUNCH.set(LaunchSettings {
        config,
        screen: args.screen,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tipjar")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 880.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
