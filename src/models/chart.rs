use crate::utils::TimeUtils;

/// A single historical price sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

/// Chart-ready view of a price series: one `month/day` label and one value
/// per sample, in sample order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Maps raw history samples into plottable label/value pairs.
///
/// Order- and length-preserving; no aggregation or resampling. Labels are
/// rendered in UTC.
pub fn to_chart_series(points: &[PricePoint]) -> ChartSeries {
    let labels = points
        .iter()
        .map(|p| TimeUtils::month_day_label(p.timestamp_ms))
        .collect();
    let values = points.iter().map(|p| p.price).collect();

    ChartSeries { labels, values }
}
