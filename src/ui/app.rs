use std::sync::mpsc::{self, Receiver, Sender};

use eframe::Frame;
use eframe::egui::Context;

use crate::Cli;
use crate::data::{HistoryResult, ListResult, spawn_history_fetch, spawn_list_fetch};
use crate::models::{Asset, ChartSeries, to_chart_series};
use crate::ui::utils::apply_mode_visuals;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Which view the tracker shows. `None` renders the asset list, `Asset`
/// renders the detail panel for that asset.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum Selection {
    #[default]
    None,
    Asset(Asset),
}

impl Selection {
    pub(crate) fn asset(&self) -> Option<&Asset> {
        match self {
            Selection::Asset(asset) => Some(asset),
            Selection::None => None,
        }
    }
}

/// App phase: a dedicated loading screen until the initial list fetch
/// resolves, then the regular list/detail UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AppState {
    Loading,
    Running,
}

// Indirection over the fetch entry point so state transitions can be
// exercised without touching the network.
type HistorySpawner = fn(Sender<HistoryResult>, String);

pub struct TrackerApp {
    pub(crate) assets: Vec<Asset>,
    pub(crate) search_text: String,
    pub(crate) selection: Selection,
    pub(crate) chart: Option<ChartSeries>,
    pub(crate) dark_mode: bool,
    pub(crate) loading_list: bool,
    pub(crate) loading_history: bool,
    pub(crate) state: AppState,

    list_rx: Option<Receiver<ListResult>>,
    history_tx: Sender<HistoryResult>,
    history_rx: Receiver<HistoryResult>,
    history_spawner: HistorySpawner,
}

impl TrackerApp {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let (list_tx, list_rx) = mpsc::channel();
        let (history_tx, history_rx) = mpsc::channel();

        spawn_list_fetch(list_tx);

        Self {
            assets: Vec::new(),
            search_text: String::new(),
            selection: Selection::None,
            chart: None,
            dark_mode: args.dark,
            loading_list: true,
            loading_history: false,
            state: AppState::Loading,
            list_rx: Some(list_rx),
            history_tx,
            history_rx,
            history_spawner: spawn_history_fetch,
        }
    }

    /// Selecting discards any previous chart and starts a fresh history
    /// fetch, even when re-selecting the same asset.
    pub(crate) fn select_asset(&mut self, asset: Asset) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION SET to {}", asset.id);
        }

        self.chart = None;
        self.loading_history = true;
        let asset_id = asset.id.clone();
        self.selection = Selection::Asset(asset);

        (self.history_spawner)(self.history_tx.clone(), asset_id);
    }

    /// Back to the list. Abandons the selection, the chart, and interest in
    /// any history fetch still in flight.
    pub(crate) fn go_back(&mut self) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION CLEARED (back to list)");
        }

        self.selection = Selection::None;
        self.chart = None;
        self.loading_history = false;
    }

    pub(crate) fn toggle_display_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Folds the finished list fetch into view state. A failure degrades to
    /// an empty list; it never escapes the view.
    pub(crate) fn apply_list_result(&mut self, result: ListResult) {
        self.loading_list = false;
        self.state = AppState::Running;

        match result {
            Ok(assets) => {
                #[cfg(debug_assertions)]
                if DF.log_fetch {
                    log::info!("Asset list fetch returned {} assets", assets.len());
                }
                self.assets = assets;
            }
            Err(err) => {
                log::warn!("Asset list fetch failed: {err}");
                self.assets = Vec::new();
            }
        }
    }

    /// Folds a finished history fetch into view state. Responses for an
    /// asset other than the current selection are stale and dropped; the
    /// fetch they were superseded by still owns the loading flag.
    pub(crate) fn apply_history_result(&mut self, result: HistoryResult) {
        let current_id = self.selection.asset().map(|a| a.id.as_str());
        if current_id != Some(result.asset_id.as_str()) {
            #[cfg(debug_assertions)]
            if DF.log_fetch {
                log::info!("Dropping stale history response for {}", result.asset_id);
            }
            return;
        }

        self.loading_history = false;

        match result.outcome {
            Ok(points) => self.chart = Some(to_chart_series(&points)),
            Err(err) => {
                log::warn!("History fetch for {} failed: {err}", result.asset_id);
                self.chart = None;
            }
        }
    }

    /// Drains both result channels. At most one list result ever arrives;
    /// history results are applied in arrival order (stale ones drop out).
    fn poll_fetches(&mut self) {
        let list_result = self.list_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(result) = list_result {
            self.list_rx = None;
            self.apply_list_result(result);
        }

        while let Ok(result) = self.history_rx.try_recv() {
            self.apply_history_result(result);
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        apply_mode_visuals(ctx, self.dark_mode);

        self.poll_fetches();

        // Results arrive on a channel, not through the event loop, so keep
        // repainting while a fetch is outstanding.
        if self.loading_list || self.loading_history {
            ctx.request_repaint();
        }

        match self.state {
            AppState::Loading => Self::render_loading_screen(ctx, self.dark_mode),
            AppState::Running => {
                self.render_top_panel(ctx);
                self.render_central_panel(ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchError;
    use crate::models::PricePoint;

    fn asset(id: &str, name: &str) -> Asset {
        Asset {
            id: id.to_string(),
            symbol: id[..3.min(id.len())].to_string(),
            name: name.to_string(),
            current_price: 100.0,
            market_cap: 1_000_000.0,
        }
    }

    fn points() -> Vec<PricePoint> {
        vec![
            PricePoint {
                timestamp_ms: 0,
                price: 100.0,
            },
            PricePoint {
                timestamp_ms: 86_400_000,
                price: 110.0,
            },
        ]
    }

    fn ok_history(id: &str) -> HistoryResult {
        HistoryResult {
            asset_id: id.to_string(),
            outcome: Ok(points()),
        }
    }

    fn failed_history(id: &str) -> HistoryResult {
        HistoryResult {
            asset_id: id.to_string(),
            outcome: Err(FetchError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }

    fn test_app(assets: Vec<Asset>) -> TrackerApp {
        let (history_tx, history_rx) = mpsc::channel();
        TrackerApp {
            assets,
            search_text: String::new(),
            selection: Selection::None,
            chart: None,
            dark_mode: false,
            loading_list: false,
            loading_history: false,
            state: AppState::Running,
            list_rx: None,
            history_tx,
            history_rx,
            history_spawner: |_tx, _id| {},
        }
    }

    #[test]
    fn selecting_enters_detail_and_marks_history_loading() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);

        app.select_asset(asset("bitcoin", "Bitcoin"));

        assert_eq!(app.selection.asset().unwrap().id, "bitcoin");
        assert!(app.loading_history);
        assert!(app.chart.is_none());
    }

    #[test]
    fn back_returns_to_list_before_history_resolves() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));

        app.go_back();

        assert_eq!(app.selection, Selection::None);
        assert!(app.chart.is_none());
        assert!(!app.loading_history);
    }

    #[test]
    fn back_returns_to_list_after_history_resolves() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));
        app.apply_history_result(ok_history("bitcoin"));
        assert!(app.chart.is_some());

        app.go_back();

        assert_eq!(app.selection, Selection::None);
        assert!(app.chart.is_none());
    }

    #[test]
    fn matching_history_response_builds_the_chart() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));

        app.apply_history_result(ok_history("bitcoin"));

        assert!(!app.loading_history);
        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.labels, vec!["1/1", "1/2"]);
        assert_eq!(chart.values, vec![100.0, 110.0]);
    }

    #[test]
    fn stale_history_response_is_dropped() {
        let mut app = test_app(vec![
            asset("bitcoin", "Bitcoin"),
            asset("ethereum", "Ethereum"),
        ]);

        // Select bitcoin, then supersede it with ethereum before the
        // bitcoin response lands.
        app.select_asset(asset("bitcoin", "Bitcoin"));
        app.select_asset(asset("ethereum", "Ethereum"));

        app.apply_history_result(ok_history("bitcoin"));

        // The ethereum fetch still owns the loading flag.
        assert!(app.chart.is_none());
        assert!(app.loading_history);

        app.apply_history_result(ok_history("ethereum"));
        assert!(app.chart.is_some());
        assert!(!app.loading_history);
    }

    #[test]
    fn history_response_after_back_is_dropped() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));
        app.go_back();

        app.apply_history_result(ok_history("bitcoin"));

        assert_eq!(app.selection, Selection::None);
        assert!(app.chart.is_none());
        assert!(!app.loading_history);
    }

    #[test]
    fn failed_history_fetch_clears_loading_without_a_chart() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));

        app.apply_history_result(failed_history("bitcoin"));

        assert!(!app.loading_history);
        assert!(app.chart.is_none());
        // Still in detail view; only the chart is missing.
        assert_eq!(app.selection.asset().unwrap().id, "bitcoin");
    }

    #[test]
    fn reselecting_the_same_asset_restarts_the_chart() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));
        app.apply_history_result(ok_history("bitcoin"));
        assert!(app.chart.is_some());

        app.select_asset(asset("bitcoin", "Bitcoin"));

        assert!(app.chart.is_none());
        assert!(app.loading_history);
    }

    #[test]
    fn failed_list_fetch_yields_an_empty_running_list() {
        let mut app = test_app(Vec::new());
        app.state = AppState::Loading;
        app.loading_list = true;

        app.apply_list_result(Err(FetchError::Status(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
        )));

        assert_eq!(app.state, AppState::Running);
        assert!(app.assets.is_empty());
        assert!(!app.loading_list);
    }

    #[test]
    fn successful_list_fetch_replaces_assets_wholesale() {
        let mut app = test_app(vec![asset("old", "Old Coin")]);
        app.state = AppState::Loading;
        app.loading_list = true;

        app.apply_list_result(Ok(vec![
            asset("bitcoin", "Bitcoin"),
            asset("ethereum", "Ethereum"),
        ]));

        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.assets.len(), 2);
        assert_eq!(app.assets[0].id, "bitcoin");
        assert!(!app.loading_list);
    }

    #[test]
    fn queued_history_results_are_applied_on_poll() {
        let mut app = test_app(vec![asset("bitcoin", "Bitcoin")]);
        app.select_asset(asset("bitcoin", "Bitcoin"));

        app.history_tx.send(ok_history("bitcoin")).unwrap();
        app.poll_fetches();

        assert!(app.chart.is_some());
        assert!(!app.loading_history);
    }

    #[test]
    fn toggling_display_mode_twice_is_identity() {
        let mut app = test_app(Vec::new());
        assert!(!app.dark_mode);

        app.toggle_display_mode();
        assert!(app.dark_mode);

        app.toggle_display_mode();
        assert!(!app.dark_mode);
    }
}
