/// User-facing strings, centralized so panels stay free of literals.
pub struct UiText {
    pub app_title: &'static str,
    pub search_hint: &'static str,
    pub btn_mode_dark: &'static str,
    pub btn_mode_light: &'static str,
    pub btn_back: &'static str,

    // --- List view ---
    pub empty_list: &'static str,
    pub no_results: &'static str,

    // --- Detail view ---
    pub label_price: &'static str,
    pub label_market_cap: &'static str,
    pub chart_loading: &'static str,
    pub chart_unavailable: &'static str,

    // --- Loading screen ---
    pub ls_title: &'static str,
    pub ls_subtitle: &'static str,

    // --- Plot labels ---
    pub plot_x_axis: &'static str,
    pub plot_series_name: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Coin Tracker",
    search_hint: "Search for a cryptocurrency...",
    btn_mode_dark: "Dark Mode",
    btn_mode_light: "Light Mode",
    btn_back: "< Back to Home",

    empty_list: "No market data available.",
    no_results: "No coins match your search.",

    label_price: "Current Price",
    label_market_cap: "Market Cap",
    chart_loading: "Loading price history...",
    chart_unavailable: "Price history unavailable.",

    ls_title: "Coin Tracker",
    ls_subtitle: "Fetching the latest market data...",

    plot_x_axis: "Date",
    plot_series_name: "Price (USD)",
};
