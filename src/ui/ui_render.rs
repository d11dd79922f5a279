use eframe::egui::{
    Align, CentralPanel, Context, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel, Ui,
};

use crate::models::{Asset, filter_assets};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::{format_market_cap, format_price};
use crate::ui::{UI_CONFIG, UI_TEXT};

#[cfg(debug_assertions)]
use crate::config::DF;

use super::app::{Selection, TrackerApp};

impl TrackerApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let colors = UI_CONFIG.colors(self.dark_mode);

        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame(self.dark_mode))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(UI_TEXT.app_title).color(colors.heading));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let mode_label = if self.dark_mode {
                            UI_TEXT.btn_mode_light
                        } else {
                            UI_TEXT.btn_mode_dark
                        };
                        if ui.button(mode_label).clicked() {
                            self.toggle_display_mode();
                        }

                        ui.add(
                            TextEdit::singleline(&mut self.search_text)
                                .hint_text(UI_TEXT.search_hint)
                                .desired_width(240.0),
                        );
                    });
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame(self.dark_mode))
            .show(ctx, |ui| match self.selection.clone() {
                Selection::Asset(asset) => self.render_detail_panel(ui, &asset),
                Selection::None => self.render_list_panel(ui),
            });
    }

    fn render_list_panel(&mut self, ui: &mut Ui) {
        let colors = UI_CONFIG.colors(self.dark_mode);
        let filtered = filter_assets(&self.assets, &self.search_text);

        #[cfg(debug_assertions)]
        if DF.log_search {
            log::info!(
                "{} of {} assets match '{}'",
                filtered.len(),
                self.assets.len(),
                self.search_text
            );
        }

        if self.assets.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new(UI_TEXT.empty_list).color(colors.subdued));
            });
            return;
        }

        if filtered.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new(UI_TEXT.no_results).color(colors.subdued));
            });
            return;
        }

        let mut clicked = None;
        ScrollArea::vertical().show(ui, |ui| {
            for asset in &filtered {
                if ui.asset_card(asset, colors).clicked() {
                    clicked = Some(asset.clone());
                }
                ui.add_space(6.0);
            }
        });

        if let Some(asset) = clicked {
            self.select_asset(asset);
        }
    }

    fn render_detail_panel(&mut self, ui: &mut Ui, asset: &Asset) {
        let colors = UI_CONFIG.colors(self.dark_mode);

        if ui.button(UI_TEXT.btn_back).clicked() {
            self.go_back();
            return;
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new(&asset.name)
                    .size(22.0)
                    .color(colors.heading),
            );
            ui.label(RichText::new(asset.symbol.to_uppercase()).color(colors.subdued));
        });

        ui.add_space(4.0);
        ui.metric(
            UI_TEXT.label_price,
            &format_price(asset.current_price),
            colors.price,
            colors,
        );
        ui.metric(
            UI_TEXT.label_market_cap,
            &format_market_cap(asset.market_cap),
            colors.label,
            colors,
        );

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        if self.loading_history {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(UI_TEXT.chart_loading).color(colors.subdued));
            });
        } else if let Some(chart) = &self.chart {
            PlotView::show(ui, chart, colors.accent);
        } else {
            ui.label(RichText::new(UI_TEXT.chart_unavailable).color(colors.subdued));
        }
    }

    pub(super) fn render_loading_screen(ctx: &Context, dark_mode: bool) {
        let colors = UI_CONFIG.colors(dark_mode);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame(dark_mode))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading(
                        RichText::new(UI_TEXT.ls_title)
                            .size(24.0)
                            .strong()
                            .color(colors.heading),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(UI_TEXT.ls_subtitle)
                            .italics()
                            .color(colors.subdued),
                    );
                    ui.add_space(20.0);
                    ui.spinner();
                });
            });
    }
}
