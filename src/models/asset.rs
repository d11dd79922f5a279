use serde::{Deserialize, Serialize};

/// One tracked coin and its current market snapshot, as served by the
/// `/coins/markets` endpoint. Replaced wholesale on every list fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier (e.g. "bitcoin")
    pub id: String,
    /// Ticker symbol (e.g. "btc")
    #[serde(default)]
    pub symbol: String,
    /// Human-readable name (e.g. "Bitcoin")
    pub name: String,
    /// Spot price in the quote currency
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub market_cap: f64,
}

/// Case-insensitive substring filter over the asset list.
///
/// Returns the matching assets in their original order; an empty query
/// returns the whole list. The input is never mutated.
pub fn filter_assets(assets: &[Asset], query: &str) -> Vec<Asset> {
    if query.is_empty() {
        return assets.to_vec();
    }

    let needle = query.to_lowercase();
    assets
        .iter()
        .filter(|asset| asset.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
