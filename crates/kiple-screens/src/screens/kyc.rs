//! eKYC flow screens: the lock gate, the ID-type walkthrough, ID
//! confirmation, the loading interstitial, and the completion screen.

use crate::VIEWPORT_HEIGHT;
use crate::canvas::Canvas;
use crate::config::{Color, ScreenConfig, TextRole};
use crate::screens::shared::{self, SCREEN_PADDING, StatusBarStyle};

const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const CARD_BORDER: Color = Color::rgb(0xE2, 0xE8, 0xF0);

fn primary_button(config: &ScreenConfig, canvas: &mut Canvas<'_>, label: &str) {
    let w = canvas.width();
    let y = VIEWPORT_HEIGHT - 92.0;
    canvas.fill_round_rect(SCREEN_PADDING, y, w - SCREEN_PADDING * 2.0, 52.0, 26.0, config.primary);
    canvas.text_bar_centered(
        w / 2.0,
        y + 21.0,
        200.0,
        label,
        TextRole::Body,
        &config.typography,
        WHITE,
    );
}

/// Render the eKYC lock gate.
pub fn lock(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let w = canvas.width();
    let cx = w / 2.0;

    canvas.fill_background(config.background);
    shared::status_bar(canvas, config, StatusBarStyle::Dark);

    // Illustration: accent panel with a padlock.
    canvas.tint_round_rect(cx - 112.0, 150.0, 224.0, 200.0, 20.0, config.accent, 0xB3);
    canvas.stroke_circle(cx, 222.0, 26.0, 5.0, config.secondary);
    canvas.fill_round_rect(cx - 34.0, 232.0, 68.0, 52.0, 10.0, config.secondary);
    canvas.fill_circle(cx, 256.0, 7.0, config.accent);

    canvas.text_bar_centered(
        cx,
        410.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.kyc_lock_title,
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph_centered(
        cx,
        462.0,
        300.0,
        &config.texts.kyc_lock_description,
        TextRole::Body,
        &config.typography,
        config.text_secondary,
    );

    primary_button(config, canvas, &config.texts.kyc_lock_button);
}

/// Render the ID-type walkthrough.
pub fn id_type(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    id_type_steps(config, canvas, false);
}

/// Render the ID-type walkthrough, card-styled steps.
pub fn id_type_alt(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    id_type_steps(config, canvas, true);
}

fn id_type_steps(config: &ScreenConfig, canvas: &mut Canvas<'_>, card_style: bool) {
    let w = canvas.width();

    canvas.fill_background(config.background);
    shared::status_bar(canvas, config, StatusBarStyle::Dark);

    canvas.text_bar(
        SCREEN_PADDING,
        104.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.id_type_title,
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph(
        SCREEN_PADDING,
        152.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.id_type_description,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );

    for (i, step) in config.texts.id_steps.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = (i as f32).mul_add(108.0, 256.0);
        if card_style {
            canvas.stroke_round_rect(
                SCREEN_PADDING,
                y - 12.0,
                w - SCREEN_PADDING * 2.0,
                92.0,
                16.0,
                1.0,
                CARD_BORDER,
            );
        }
        // Step number badge.
        canvas.tint_circle(SCREEN_PADDING + 24.0, y + 24.0, 22.0, config.primary, 0x1A);
        canvas.bar(SCREEN_PADDING + 20.0, y + 21.0, 8.0, 8.0, config.primary);

        canvas.text_bar(
            SCREEN_PADDING + 62.0,
            y + 4.0,
            220.0,
            &step.title,
            TextRole::Body,
            &config.typography,
            config.text_primary,
        );
        canvas.text_bar(
            SCREEN_PADDING + 62.0,
            y + 32.0,
            240.0,
            &step.description,
            TextRole::Caption,
            &config.typography,
            config.text_secondary,
        );
    }

    primary_button(config, canvas, &config.texts.id_type_button);
}

/// Render the ID confirmation screen with the document preview card.
pub fn confirm_id(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let w = canvas.width();

    canvas.fill_background(config.background);
    shared::status_bar(canvas, config, StatusBarStyle::Dark);

    canvas.text_bar(
        SCREEN_PADDING,
        104.0,
        w - SCREEN_PADDING * 2.0,
        "Confirm your ID",
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );

    // Captured document card.
    let card_w = w - SCREEN_PADDING * 2.0;
    canvas.stroke_round_rect(SCREEN_PADDING, 180.0, card_w, 210.0, 16.0, 1.5, CARD_BORDER);
    canvas.tint_round_rect(SCREEN_PADDING, 180.0, card_w, 48.0, 16.0, config.accent, 0xB3);
    // Portrait and detail lines.
    canvas.fill_round_rect(SCREEN_PADDING + 20.0, 250.0, 72.0, 90.0, 8.0, CARD_BORDER);
    for line in 0..4_u8 {
        let y = f32::from(line).mul_add(24.0, 252.0);
        let line_w = if line == 0 { 140.0 } else { 110.0 };
        canvas.bar(SCREEN_PADDING + 112.0, y, line_w, 8.0, config.text_secondary);
    }

    canvas.paragraph(
        SCREEN_PADDING,
        430.0,
        w - SCREEN_PADDING * 2.0,
        "Make sure the details on your document are sharp and readable.",
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );

    // Retake (outline) above confirm (filled).
    let retake_y = VIEWPORT_HEIGHT - 160.0;
    canvas.stroke_round_rect(
        SCREEN_PADDING,
        retake_y,
        w - SCREEN_PADDING * 2.0,
        52.0,
        26.0,
        1.5,
        config.primary,
    );
    canvas.text_bar_centered(
        w / 2.0,
        retake_y + 21.0,
        120.0,
        "Retake",
        TextRole::Body,
        &config.typography,
        config.primary,
    );
    primary_button(config, canvas, "Looks good");
}

/// Render the loading interstitial (spinner).
pub fn loading(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let cx = canvas.width() / 2.0;

    canvas.fill_background(config.background);
    canvas.stroke_circle(cx, 380.0, 24.0, 4.0, CARD_BORDER);
    // Spinner head.
    canvas.fill_circle(cx, 356.0, 5.0, config.primary);

    canvas.text_bar_centered(
        cx,
        440.0,
        200.0,
        &config.texts.loading_text,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );
}

/// Render the loading interstitial (bouncing dots).
pub fn loading_alt(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let cx = canvas.width() / 2.0;

    canvas.fill_background(config.background);
    for (i, alpha) in [0xFF_u8, 0x99, 0x4D].iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = (i as f32 - 1.0).mul_add(22.0, cx);
        canvas.tint_circle(x, 380.0, 6.0, config.primary, *alpha);
    }

    canvas.text_bar_centered(
        cx,
        440.0,
        200.0,
        &config.texts.loading_text,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );
}

/// Render the eKYC completion screen.
pub fn success(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let w = canvas.width();
    let cx = w / 2.0;

    canvas.fill_background(config.background);

    canvas.tint_circle(cx, 290.0, 48.0, config.accent, 0xCC);
    canvas.bar(cx - 18.0, 286.0, 36.0, 8.0, config.primary);

    canvas.text_bar_centered(
        cx,
        386.0,
        w - SCREEN_PADDING * 2.0,
        "You're verified!",
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph_centered(
        cx,
        436.0,
        280.0,
        "Your identity has been confirmed. Enjoy full access to your wallet.",
        TextRole::Body,
        &config.typography,
        config.text_secondary,
    );

    primary_button(config, canvas, "Continue");
}
