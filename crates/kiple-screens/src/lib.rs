//! kiple-screens: e-wallet mockup screen templates (sans-IO).
//!
//! Renders a fixed table of mobile e-wallet screens (375x812 logical
//! viewport) under a caller-supplied [`ScreenConfig`], optionally
//! wrapped in a device frame. This crate has **no I/O dependencies**
//! -- it paints into in-memory pixmaps and returns structured data.
//! Encoding and export orchestration live in `kiple-export` and
//! `kiple-batch`.

pub mod canvas;
pub mod config;
pub mod frame;
pub mod registry;
pub mod scene;
pub mod screens;

pub use config::{
    Color, FontFamily, HomeModule, LayoutStyle, ModuleVisibility, ScreenConfig, TextContent,
    TextRole, Typography,
};
pub use frame::{DeviceType, FrameOptions};
pub use registry::{
    RenderFn, SCREENS, ScreenCategory, ScreenDescriptor, all_screen_ids, screen_by_id,
    screens_in_category,
};
pub use scene::{RenderError, Scene};

/// Re-export `Pixmap` so downstream crates can hold painted surfaces
/// without depending on `tiny-skia` directly.
pub use tiny_skia::Pixmap;

/// Canonical mobile viewport width in logical pixels.
pub const VIEWPORT_WIDTH: f32 = 375.0;

/// Canonical mobile viewport height in logical pixels.
pub const VIEWPORT_HEIGHT: f32 = 812.0;

/// Corner radius applied to the display when no device frame is drawn.
pub const SCREEN_CORNER_RADIUS: f32 = 44.0;
