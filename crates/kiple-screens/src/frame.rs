//! Device frame decoration drawn around the canonical viewport.
//!
//! Mirrors the product's export option of wrapping a screen in an
//! iPhone- or Android-style hardware frame. The frame adds a bezel
//! around the 375x812 viewport and paints hardware details (dynamic
//! island or punch-hole camera, side buttons, bezel highlight) on top
//! of the screen content.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::config::Color;
use crate::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Bezel fill color.
const BEZEL: Color = Color::rgb(0x1C, 0x1C, 0x1E);
/// Hardware detail color (buttons, bezel highlight).
const HARDWARE: Color = Color::rgb(0x3C, 0x3C, 0x3E);

/// Which hardware frame to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// iPhone-style frame (default).
    #[default]
    Iphone,
    /// Android (Samsung-style) frame.
    Android,
}

impl DeviceType {
    /// Bezel thickness in logical pixels.
    #[must_use]
    pub const fn bezel(self) -> f32 {
        match self {
            Self::Iphone => 12.0,
            Self::Android => 10.0,
        }
    }

    /// Corner radius of the outer frame.
    #[must_use]
    pub const fn outer_radius(self) -> f32 {
        match self {
            Self::Iphone => 55.0,
            Self::Android => 38.0,
        }
    }

    /// Corner radius of the screen cutout inside the frame.
    #[must_use]
    pub const fn screen_radius(self) -> f32 {
        match self {
            Self::Iphone => 44.0,
            Self::Android => 32.0,
        }
    }
}

/// Frame settings for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameOptions {
    /// Whether to draw the hardware frame at all.
    pub show: bool,
    /// Device style when the frame is shown.
    pub device: DeviceType,
}

impl FrameOptions {
    /// Total logical size including the bezel when the frame is shown.
    #[must_use]
    pub const fn outer_size(self) -> (f32, f32) {
        if self.show {
            let bezel = self.device.bezel();
            (VIEWPORT_WIDTH + bezel * 2.0, VIEWPORT_HEIGHT + bezel * 2.0)
        } else {
            (VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
        }
    }

    /// Logical offset of the screen content inside the frame.
    #[must_use]
    pub const fn content_offset(self) -> f32 {
        if self.show { self.device.bezel() } else { 0.0 }
    }
}

/// Paint the frame body behind the screen content.
pub fn draw_background(canvas: &mut Canvas<'_>, device: DeviceType) {
    let (w, h) = (canvas.width(), canvas.height());
    canvas.fill_round_rect(0.0, 0.0, w, h, device.outer_radius(), BEZEL);
}

/// Paint hardware details on top of the screen content.
pub fn draw_overlay(canvas: &mut Canvas<'_>, device: DeviceType) {
    let (w, h) = (canvas.width(), canvas.height());
    let bezel = device.bezel();

    match device {
        DeviceType::Iphone => {
            // Dynamic island.
            canvas.fill_round_rect((w - 126.0) / 2.0, bezel + 10.0, 126.0, 34.0, 17.0, BEZEL);
            // Silent switch and volume buttons on the left edge.
            canvas.fill_round_rect(-2.0, 140.0, 4.0, 30.0, 2.0, HARDWARE);
            canvas.fill_round_rect(-2.0, 190.0, 4.0, 55.0, 2.0, HARDWARE);
            canvas.fill_round_rect(-2.0, 255.0, 4.0, 55.0, 2.0, HARDWARE);
            // Power button on the right edge.
            canvas.fill_round_rect(w - 2.0, 200.0, 4.0, 80.0, 2.0, HARDWARE);
            // Bezel highlight ring.
            canvas.stroke_round_rect(
                1.5,
                1.5,
                w - 3.0,
                h - 3.0,
                device.outer_radius() - 1.5,
                3.0,
                HARDWARE,
            );
        }
        DeviceType::Android => {
            // Punch-hole front camera.
            canvas.fill_circle(w / 2.0, bezel + 18.0, 6.0, BEZEL);
            // Volume and power buttons on the right edge.
            canvas.fill_round_rect(w - 2.0, 160.0, 4.0, 60.0, 2.0, HARDWARE);
            canvas.fill_round_rect(w - 2.0, 240.0, 4.0, 45.0, 2.0, HARDWARE);
            // Bezel highlight ring.
            canvas.stroke_round_rect(
                1.0,
                1.0,
                w - 2.0,
                h - 2.0,
                device.outer_radius() - 1.0,
                2.0,
                HARDWARE,
            );
        }
    }
}
