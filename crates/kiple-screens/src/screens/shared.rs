//! Chrome shared by several screen templates: status bar, bottom
//! navigation, and the logo mark.

use crate::VIEWPORT_HEIGHT;
use crate::canvas::{Canvas, text_width};
use crate::config::{Color, ScreenConfig, TextRole};

/// Status bar height.
pub const STATUS_BAR_HEIGHT: f32 = 44.0;
/// Bottom navigation height (including the home-indicator padding).
pub const BOTTOM_NAV_HEIGHT: f32 = 76.0;
/// Default horizontal screen padding.
pub const SCREEN_PADDING: f32 = 24.0;

const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const NAV_INACTIVE: Color = Color::rgb(0x9C, 0xA3, 0xAF);

/// Foreground variant for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Dark glyphs on a light background.
    Dark,
    /// Light glyphs on a dark background.
    Light,
}

/// Draw the status bar: clock on the left, signal / wifi / battery
/// cluster on the right.
pub fn status_bar(canvas: &mut Canvas<'_>, config: &ScreenConfig, style: StatusBarStyle) {
    let fg = match style {
        StatusBarStyle::Dark => config.text_primary,
        StatusBarStyle::Light => WHITE,
    };
    let w = canvas.width();

    // Clock.
    canvas.bar(SCREEN_PADDING, 17.0, 32.0, 10.0, fg);

    // Signal bars.
    let signal_x = w - 90.0;
    for (i, height) in [5.0_f32, 7.0, 9.0, 11.0].iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = (i as f32).mul_add(4.5, signal_x);
        canvas.fill_round_rect(x, 27.0 - height, 3.0, *height, 1.0, fg);
    }
    // Wifi arc stand-in.
    canvas.fill_circle(w - 62.0, 22.0, 5.0, fg);
    // Battery.
    canvas.stroke_round_rect(w - 48.0, 16.0, 21.0, 11.0, 2.5, 1.0, fg);
    canvas.fill_round_rect(w - 46.5, 17.5, 15.0, 8.0, 1.0, fg);
}

/// Draw the bottom navigation: four tabs, first one active in the
/// primary color.
pub fn bottom_nav(canvas: &mut Canvas<'_>, config: &ScreenConfig) {
    let w = canvas.width();
    let top = VIEWPORT_HEIGHT - BOTTOM_NAV_HEIGHT;

    canvas.fill_rect(0.0, top, w, BOTTOM_NAV_HEIGHT, WHITE);
    canvas.fill_rect(0.0, top, w, 1.0, Color::rgb(0xF1, 0xF5, 0xF9));

    let slot = w / 4.0;
    for (i, label) in ["Home", "Scan", "History", "Profile"].iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let cx = (i as f32).mul_add(slot, slot / 2.0);
        let color = if i == 0 { config.primary } else { NAV_INACTIVE };
        canvas.fill_round_rect(cx - 12.0, top + 12.0, 24.0, 24.0, 7.0, color);
        let label_w = text_width(label, 10.0, 0.0);
        canvas.bar(cx - label_w / 2.0, top + 42.0, label_w, 6.0, color);
    }
}

/// Draw the logo mark centered at `(cx, cy)`: a rounded square in the
/// primary color with a lighter counter shape.
pub fn logo_mark(canvas: &mut Canvas<'_>, config: &ScreenConfig, cx: f32, cy: f32, size: f32) {
    canvas.fill_round_rect(
        cx - size / 2.0,
        cy - size / 2.0,
        size,
        size,
        size * 0.24,
        config.primary,
    );
    canvas.fill_circle(cx, cy, size * 0.2, WHITE);
}

/// Draw a header-sized logo row: the mark followed by an app-name bar.
pub fn logo_row(canvas: &mut Canvas<'_>, config: &ScreenConfig, x: f32, cy: f32) {
    logo_mark(canvas, config, x + 12.0, cy, 24.0);
    canvas.text_bar(
        x + 32.0,
        cy - 5.0,
        120.0,
        &config.app_name,
        TextRole::H3,
        &config.typography,
        config.text_primary,
    );
}
