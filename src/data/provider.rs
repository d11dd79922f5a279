use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::COINGECKO;
use crate::models::{Asset, PricePoint};

/// Everything that can go wrong talking to the market data API.
///
/// Callers log these and fall back to an empty view; a fetch failure never
/// crashes the UI.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current market snapshot for the top assets, market-cap ordered.
    async fn fetch_asset_list(&self) -> Result<Vec<Asset>, FetchError>;

    /// Historical price samples for one asset over the configured window.
    async fn fetch_price_history(&self, asset_id: &str) -> Result<Vec<PricePoint>, FetchError>;
}

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO.base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn markets_url(&self) -> String {
        let q = &COINGECKO.markets;
        format!(
            "{}/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline={}",
            self.base_url, q.vs_currency, q.order, q.per_page, q.page, q.sparkline
        )
    }

    fn chart_url(&self, asset_id: &str) -> String {
        let q = &COINGECKO.history;
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url, asset_id, q.vs_currency, q.days
        )
    }

    // Body is read as text first so a bad payload surfaces as Decode
    // rather than a generic transport error.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Raw shape of the `/market_chart` payload. Only `prices` is read.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(i64, f64)>,
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_asset_list(&self) -> Result<Vec<Asset>, FetchError> {
        self.get_json(&self.markets_url()).await
    }

    async fn fetch_price_history(&self, asset_id: &str) -> Result<Vec<PricePoint>, FetchError> {
        let raw: MarketChartResponse = self.get_json(&self.chart_url(asset_id)).await?;

        Ok(raw
            .prices
            .into_iter()
            .map(|(timestamp_ms, price)| PricePoint {
                timestamp_ms,
                price,
            })
            .collect())
    }
}
