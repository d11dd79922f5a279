/// Fixed query surface of the markets (list) endpoint.
pub struct MarketsQuery {
    pub vs_currency: &'static str,
    pub order: &'static str,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

/// Fixed query surface of the per-asset history endpoint.
pub struct HistoryQuery {
    pub vs_currency: &'static str,
    pub days: u32,
}

pub struct CoinGeckoConfig {
    pub base_url: &'static str,
    pub markets: MarketsQuery,
    pub history: HistoryQuery,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    markets: MarketsQuery {
        vs_currency: "usd",
        order: "market_cap_desc",
        per_page: 10,
        page: 1,
        sparkline: false,
    },
    history: HistoryQuery {
        vs_currency: "usd",
        days: 7,
    },
};
