#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use data::{CoinGeckoProvider, FetchError, MarketDataProvider};
pub use models::{Asset, ChartSeries, PricePoint, filter_assets, to_chart_series};
pub use ui::app::TrackerApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with the dark color scheme instead of light
    #[arg(long, default_value_t = false)]
    pub dark: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> TrackerApp {
    TrackerApp::new(cc, args)
}
