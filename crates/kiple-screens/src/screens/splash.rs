//! Splash screen: the logo mark centered on the brand background.

use crate::VIEWPORT_HEIGHT;
use crate::canvas::Canvas;
use crate::config::{ScreenConfig, TextRole};
use crate::screens::shared;

/// Render the splash screen.
pub fn render(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    canvas.fill_background(config.background);

    let cx = canvas.width() / 2.0;
    let cy = VIEWPORT_HEIGHT / 2.0 - 40.0;
    shared::logo_mark(canvas, config, cx, cy, 96.0);

    canvas.text_bar_centered(
        cx,
        cy + 72.0,
        200.0,
        &config.app_name,
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
}
