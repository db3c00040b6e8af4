//! Home screen: wallet balance header, quick-action module grid, and
//! bottom navigation.

use crate::canvas::Canvas;
use crate::config::{Color, HomeModule, LayoutStyle, ScreenConfig, TextRole};
use crate::screens::shared::{self, SCREEN_PADDING, StatusBarStyle};

const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const SURFACE: Color = Color::rgb(0xF8, 0xF9, 0xFB);
const TILE: Color = Color::rgb(0xF1, 0xF5, 0xF9);
const CARD_BORDER: Color = Color::rgb(0xE2, 0xE8, 0xF0);
const SLATE: Color = Color::rgb(0x1E, 0x29, 0x3B);
const REMITTANCE_GOLD: Color = Color::rgb(0xFD, 0xB0, 0x22);
const VISA_BLUE: Color = Color::rgb(0x14, 0x34, 0xCB);

/// Render the home screen, honoring the configured balance visibility.
pub fn standard(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, config.hide_balance);
}

/// Render the home screen with the balance always masked.
pub fn hidden(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, true);
}

fn module_icon(canvas: &mut Canvas<'_>, module: HomeModule, cx: f32, cy: f32) {
    match module {
        // Remittance and Visa keep their brand treatments.
        HomeModule::Remittance => canvas.bar(cx - 8.0, cy - 5.0, 16.0, 10.0, REMITTANCE_GOLD),
        HomeModule::Visa => canvas.bar(cx - 12.0, cy - 4.0, 24.0, 8.0, VISA_BLUE),
        HomeModule::More => {
            for dot in 0..3_u8 {
                let x = (f32::from(dot) - 1.0).mul_add(7.0, cx);
                canvas.fill_circle(x, cy, 2.5, SLATE);
            }
        }
        HomeModule::Transfer | HomeModule::PayBills | HomeModule::MobileReload => {
            canvas.fill_round_rect(cx - 9.0, cy - 9.0, 18.0, 18.0, 5.0, SLATE);
        }
    }
}

fn render(config: &ScreenConfig, canvas: &mut Canvas<'_>, hide_balance: bool) {
    let w = canvas.width();
    let header_h = 212.0;

    canvas.fill_background(SURFACE);

    // Header surface.
    canvas.fill_rect(0.0, 0.0, w, header_h, WHITE);
    if config.layout == LayoutStyle::Gradient {
        canvas.tint_round_rect(0.0, 0.0, w, header_h, 0.0, config.primary, 0x14);
    }
    shared::status_bar(canvas, config, StatusBarStyle::Dark);
    shared::logo_row(canvas, config, SCREEN_PADDING, 64.0);
    // Notification bell.
    canvas.stroke_circle(w - SCREEN_PADDING - 11.0, 64.0, 9.0, 2.0, config.text_primary);

    // Balance block.
    let label_w = canvas.text_bar(
        SCREEN_PADDING,
        98.0,
        160.0,
        &config.texts.wallet_balance_label,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );
    canvas.fill_circle(
        SCREEN_PADDING + label_w + 14.0,
        103.0,
        5.0,
        config.text_secondary,
    );

    if hide_balance {
        for i in 0..8_u8 {
            let x = f32::from(i).mul_add(14.0, SCREEN_PADDING + 4.0);
            canvas.fill_circle(x, 136.0, 4.5, config.text_primary);
        }
    } else {
        let balance = format!("{}{}", config.currency_symbol, config.balance_amount);
        canvas.text_bar(
            SCREEN_PADDING,
            124.0,
            220.0,
            &balance,
            TextRole::H1,
            &config.typography,
            config.text_primary,
        );
    }
    // Info and top-up affordances next to the balance.
    canvas.stroke_circle(SCREEN_PADDING + 248.0, 136.0, 8.0, 1.5, config.primary);
    canvas.fill_circle(SCREEN_PADDING + 276.0, 136.0, 10.0, config.primary);

    canvas.text_bar(
        SCREEN_PADDING,
        166.0,
        180.0,
        &config.texts.see_analytics,
        TextRole::Small,
        &config.typography,
        config.primary,
    );

    // Quick-action module card: up to six tiles in a 3-column grid.
    let enabled = config.modules.enabled();
    let rows = enabled.len().div_ceil(3).max(1);
    #[allow(clippy::cast_precision_loss)]
    let card_h = (rows as f32).mul_add(86.0, 24.0);
    let card_y = header_h + 20.0;
    let card_w = w - SCREEN_PADDING * 2.0;
    canvas.fill_round_rect(SCREEN_PADDING, card_y, card_w, card_h, 16.0, WHITE);
    if config.layout == LayoutStyle::Card {
        canvas.stroke_round_rect(SCREEN_PADDING, card_y, card_w, card_h, 16.0, 1.0, CARD_BORDER);
    }

    let cell_w = (card_w - 32.0) / 3.0;
    for (i, module) in enabled.iter().take(6).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let col = (i % 3) as f32;
        #[allow(clippy::cast_precision_loss)]
        let row = (i / 3) as f32;
        let cx = col.mul_add(cell_w, SCREEN_PADDING + 16.0 + cell_w / 2.0);
        let tile_y = row.mul_add(86.0, card_y + 16.0);

        canvas.fill_round_rect(cx - 24.0, tile_y, 48.0, 48.0, 12.0, TILE);
        module_icon(canvas, *module, cx, tile_y + 24.0);
        canvas.text_bar_centered(
            cx,
            tile_y + 56.0,
            cell_w - 8.0,
            module.label(&config.texts),
            TextRole::Caption,
            &config.typography,
            config.text_primary,
        );
    }

    // Promo banner under the module card.
    let banner_y = card_y + card_h + 20.0;
    canvas.tint_round_rect(SCREEN_PADDING, banner_y, card_w, 96.0, 16.0, config.accent, 0xE6);
    canvas.bar(SCREEN_PADDING + 20.0, banner_y + 26.0, 130.0, 10.0, config.secondary);
    canvas.bar(SCREEN_PADDING + 20.0, banner_y + 48.0, 180.0, 8.0, config.text_secondary);

    shared::bottom_nav(canvas, config);
}
