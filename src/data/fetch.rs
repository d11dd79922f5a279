//! Background fetch plumbing.
//!
//! Each request runs on its own thread with a small tokio runtime and
//! reports back over an mpsc channel the UI polls once per frame.

use std::sync::mpsc::Sender;
use std::thread;

use tokio::runtime::Runtime;

use crate::data::provider::{CoinGeckoProvider, FetchError, MarketDataProvider};
use crate::models::{Asset, PricePoint};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Outcome of the asset list request.
pub type ListResult = Result<Vec<Asset>, FetchError>;

/// Outcome of a history request, tagged with the asset it was fetched for
/// so responses superseded by a newer selection can be dropped.
pub struct HistoryResult {
    pub asset_id: String,
    pub outcome: Result<Vec<PricePoint>, FetchError>,
}

pub fn spawn_list_fetch(tx: Sender<ListResult>) {
    #[cfg(debug_assertions)]
    if DF.log_fetch {
        log::info!("Spawning asset list fetch");
    }

    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create runtime");
        rt.block_on(async move {
            let provider = CoinGeckoProvider::new();
            let result = provider.fetch_asset_list().await;

            // Receiver may be gone if the app closed mid-flight
            let _ = tx.send(result);
        });
    });
}

pub fn spawn_history_fetch(tx: Sender<HistoryResult>, asset_id: String) {
    #[cfg(debug_assertions)]
    if DF.log_fetch {
        log::info!("Spawning history fetch for {}", asset_id);
    }

    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create runtime");
        rt.block_on(async move {
            let provider = CoinGeckoProvider::new();
            let outcome = provider.fetch_price_history(&asset_id).await;

            let _ = tx.send(HistoryResult { asset_id, outcome });
        });
    });
}
