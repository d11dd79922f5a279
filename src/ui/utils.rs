use eframe::egui::{Context, Visuals};

use crate::ui::UI_CONFIG;

/// Applies the palette for the active display mode. Runs every frame so a
/// toggle takes effect on the very next repaint.
pub fn apply_mode_visuals(ctx: &Context, dark_mode: bool) {
    let colors = UI_CONFIG.colors(dark_mode);
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = colors.central_panel;
    visuals.panel_fill = colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = colors.label;
    visuals.widgets.inactive.fg_stroke.color = colors.label;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    visuals.widgets.active.fg_stroke.color = colors.heading;

    ctx.set_visuals(visuals);
}

/// USD price with magnitude-aware precision: majors get cents, sub-penny
/// coins get enough decimals to see movement.
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// Compact market-cap display ($1.32T, $456.70B, $12.30M).
pub fn format_market_cap(cap: f64) -> String {
    let abs_cap = cap.abs();

    if abs_cap >= 1e12 {
        format!("${:.2}T", cap / 1e12)
    } else if abs_cap >= 1e9 {
        format!("${:.2}B", cap / 1e9)
    } else if abs_cap >= 1e6 {
        format!("${:.2}M", cap / 1e6)
    } else {
        format!("${:.0}", cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_tiers() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(67012.551), "$67012.55");
        assert_eq!(format_price(3.14159), "$3.1416");
        assert_eq!(format_price(0.042), "$0.04200");
        assert_eq!(format_price(0.00000231), "$0.00000231");
    }

    #[test]
    fn market_cap_units() {
        assert_eq!(format_market_cap(1_320_000_000_000.0), "$1.32T");
        assert_eq!(format_market_cap(456_700_000_000.0), "$456.70B");
        assert_eq!(format_market_cap(12_300_000.0), "$12.30M");
        assert_eq!(format_market_cap(950_000.0), "$950000");
    }
}
