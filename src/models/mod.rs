mod asset;
mod chart;

pub use asset::{Asset, filter_assets};
pub use chart::{ChartSeries, PricePoint, to_chart_series};
