mod fetch;
mod provider;

pub use {
    fetch::{HistoryResult, ListResult, spawn_history_fetch, spawn_list_fetch},
    provider::{CoinGeckoProvider, FetchError, MarketDataProvider},
};
