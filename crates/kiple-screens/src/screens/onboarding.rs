//! Onboarding carousel: illustration placeholder, slide copy, page
//! dots, and the continue button.

use crate::VIEWPORT_HEIGHT;
use crate::canvas::Canvas;
use crate::config::{Color, ScreenConfig, TextRole};
use crate::screens::shared::SCREEN_PADDING;

const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const DOT_INACTIVE: Color = Color::rgb(0xE2, 0xE8, 0xF0);

/// Render slide 1 (transfer money).
pub fn slide_1(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, 0);
}

/// Render slide 2 (remittance).
pub fn slide_2(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, 1);
}

/// Render slide 3 (pay bills).
pub fn slide_3(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, 2);
}

/// Render slide 4 (mobile reload).
pub fn slide_4(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, 3);
}

/// Render slide 5 (visa card).
pub fn slide_5(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    render(config, canvas, 4);
}

fn render(config: &ScreenConfig, canvas: &mut Canvas<'_>, index: usize) {
    let slide = &config.texts.onboarding[index];
    let w = canvas.width();
    let cx = w / 2.0;

    canvas.fill_background(config.background);

    // Illustration area: tinted panel with a badge placeholder.
    canvas.tint_round_rect(0.0, 0.0, w, 430.0, 0.0, config.primary, 0x1A);
    canvas.stroke_circle(cx, 230.0, 50.0, 2.0, config.primary);
    canvas.tint_circle(cx, 230.0, 30.0, config.primary, 0x33);
    canvas.bar(cx - 14.0, 227.0, 28.0, 6.0, config.primary);

    // Slide copy.
    canvas.text_bar_centered(
        cx,
        488.0,
        w - SCREEN_PADDING * 2.0,
        &slide.title,
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph_centered(
        cx,
        540.0,
        280.0,
        &slide.description,
        TextRole::Body,
        &config.typography,
        config.text_secondary,
    );

    // Page dots; the active slide is a wider pill.
    let dots = 5_usize;
    let spacing = 16.0;
    #[allow(clippy::cast_precision_loss)]
    let start = (dots - 1) as f32 / 2.0;
    for dot in 0..dots {
        #[allow(clippy::cast_precision_loss)]
        let x = (dot as f32 - start).mul_add(spacing, cx);
        if dot == index {
            canvas.bar(x - 8.0, 666.0, 16.0, 8.0, config.primary);
        } else {
            canvas.fill_circle(x, 670.0, 4.0, DOT_INACTIVE);
        }
    }

    // Continue button.
    let button_y = VIEWPORT_HEIGHT - 92.0;
    canvas.fill_round_rect(
        SCREEN_PADDING,
        button_y,
        w - SCREEN_PADDING * 2.0,
        52.0,
        26.0,
        config.primary,
    );
    canvas.bar(cx - 24.0, button_y + 22.0, 48.0, 8.0, WHITE);
}
