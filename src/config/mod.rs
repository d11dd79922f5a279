//! Configuration module for the coin tracker application.

mod coingecko;
mod debug;

// Re-export commonly used items
pub use coingecko::{COINGECKO, CoinGeckoConfig, HistoryQuery, MarketsQuery};
pub use debug::DF;
