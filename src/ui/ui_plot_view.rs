use eframe::egui::{Color32, Ui};
use egui_plot::{Axis, AxisHints, Line, Plot, PlotPoints};

use crate::models::ChartSeries;
use crate::ui::UI_TEXT;

/// Renders the fixed-window price history line for the selected asset.
pub struct PlotView;

impl PlotView {
    pub fn show(ui: &mut Ui, series: &ChartSeries, accent: Color32) {
        if series.is_empty() {
            return;
        }

        // Samples are plotted against their index; the axis formatter maps
        // indices back to the precomputed month/day labels.
        let points = PlotPoints::new(
            series
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| [i as f64, *value])
                .collect(),
        );

        let labels = series.labels.clone();
        let time_axis = AxisHints::new(Axis::X)
            .label(UI_TEXT.plot_x_axis)
            .formatter(move |mark, _range| {
                let rounded = mark.value.round();
                if rounded < 0.0 || (mark.value - rounded).abs() > f64::EPSILON {
                    return String::new();
                }
                labels.get(rounded as usize).cloned().unwrap_or_default()
            });

        Plot::new("price_history")
            .height(340.0)
            .custom_x_axes(vec![time_axis])
            .label_formatter(|_name, point| format!("${:.2}", point.y))
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.plot_series_name, points)
                        .color(accent)
                        .width(2.0),
                );
            });
    }
}
