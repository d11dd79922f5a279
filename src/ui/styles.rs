use eframe::egui::{
    Align, Color32, CornerRadius, CursorIcon, Frame, Layout, Margin, Response, RichText, Sense,
    Stroke, Ui,
};

use crate::models::Asset;
use crate::ui::UiColors;
use crate::ui::utils::format_price;

pub(crate) trait UiStyleExt {
    /// Clickable card for one asset row: name + ticker on the left, spot
    /// price on the right.
    fn asset_card(&mut self, asset: &Asset, colors: &UiColors) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors);
    fn metric(&mut self, label: &str, value: &str, value_color: Color32, colors: &UiColors);
}

impl UiStyleExt for Ui {
    fn asset_card(&mut self, asset: &Asset, colors: &UiColors) -> Response {
        let frame = Frame {
            fill: colors.card_fill,
            stroke: Stroke::new(1.0, colors.card_stroke),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        };

        let response = frame
            .show(self, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&asset.name)
                                .strong()
                                .size(16.0)
                                .color(colors.heading),
                        );
                        ui.label(
                            RichText::new(asset.symbol.to_uppercase())
                                .small()
                                .color(colors.subdued),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_price(asset.current_price)).color(colors.price),
                        );
                    });
                });
            })
            .response;

        response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand)
    }

    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors) {
        self.label(RichText::new(text).small().color(colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, value_color: Color32, colors: &UiColors) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label), colors);
            ui.label(RichText::new(value).color(value_color));
        });
    }
}
