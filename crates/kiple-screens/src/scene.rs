//! A staged, renderable screen: descriptor + configuration + frame.
//!
//! [`Scene`] is the unit the export pipeline captures. It can paint
//! itself at any pixel-density multiplier; the scale transform is
//! built per [`paint`](Scene::paint) call and never outlives it, so
//! capturing at one density has no effect on later paints.

use tiny_skia::{Pixmap, Transform};

use crate::canvas::{Canvas, rounded_rect_mask};
use crate::config::ScreenConfig;
use crate::frame::{self, FrameOptions};
use crate::registry::ScreenDescriptor;
use crate::{SCREEN_CORNER_RADIUS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Errors produced while painting a scene.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The pixel-density multiplier was zero, negative, or non-finite.
    #[error("pixel ratio must be a positive finite number, got {0}")]
    InvalidPixelRatio(f32),

    /// The render surface could not be allocated.
    #[error("cannot allocate a {width}x{height} render surface")]
    SurfaceAlloc {
        /// Requested device width.
        width: u32,
        /// Requested device height.
        height: u32,
    },
}

/// One screen staged for rendering under a fixed configuration.
#[derive(Debug, Clone)]
pub struct Scene {
    descriptor: &'static ScreenDescriptor,
    config: ScreenConfig,
    frame: FrameOptions,
}

impl Scene {
    /// Stage a screen with a configuration snapshot and frame options.
    #[must_use]
    pub const fn new(
        descriptor: &'static ScreenDescriptor,
        config: ScreenConfig,
        frame: FrameOptions,
    ) -> Self {
        Self {
            descriptor,
            config,
            frame,
        }
    }

    /// The staged screen's ID.
    #[must_use]
    pub const fn screen_id(&self) -> &'static str {
        self.descriptor.id
    }

    /// The staged screen's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ScreenDescriptor {
        self.descriptor
    }

    /// The configuration snapshot this scene renders under.
    #[must_use]
    pub const fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// The frame options this scene renders with.
    #[must_use]
    pub const fn frame(&self) -> FrameOptions {
        self.frame
    }

    /// Logical output size (viewport plus bezel when framed).
    #[must_use]
    pub const fn logical_size(&self) -> (f32, f32) {
        self.frame.outer_size()
    }

    /// Paint the scene at the given pixel-density multiplier and return
    /// the device-resolution pixmap (premultiplied RGBA).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidPixelRatio`] for a non-positive or
    /// non-finite multiplier, and [`RenderError::SurfaceAlloc`] when the
    /// surface cannot be allocated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn paint(&self, pixel_ratio: f32) -> Result<Pixmap, RenderError> {
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(RenderError::InvalidPixelRatio(pixel_ratio));
        }

        let (outer_w, outer_h) = self.frame.outer_size();
        let device_w = (outer_w * pixel_ratio).ceil() as u32;
        let device_h = (outer_h * pixel_ratio).ceil() as u32;
        let mut pixmap = Pixmap::new(device_w, device_h).ok_or(RenderError::SurfaceAlloc {
            width: device_w,
            height: device_h,
        })?;

        let outer_transform = Transform::from_scale(pixel_ratio, pixel_ratio);

        if self.frame.show {
            let mut frame_canvas =
                Canvas::new(&mut pixmap, outer_w, outer_h, outer_transform, None);
            frame::draw_background(&mut frame_canvas, self.frame.device);
        }

        // Clip screen content to the rounded display corners.
        let offset = self.frame.content_offset();
        let corner_radius = if self.frame.show {
            self.frame.device.screen_radius()
        } else {
            SCREEN_CORNER_RADIUS
        };
        let mask = rounded_rect_mask(
            device_w,
            device_h,
            offset,
            offset,
            VIEWPORT_WIDTH,
            VIEWPORT_HEIGHT,
            corner_radius,
            outer_transform,
        );

        let screen_transform =
            Transform::from_translate(offset, offset).post_scale(pixel_ratio, pixel_ratio);
        {
            let mut screen_canvas = Canvas::new(
                &mut pixmap,
                VIEWPORT_WIDTH,
                VIEWPORT_HEIGHT,
                screen_transform,
                mask.as_ref(),
            );
            (self.descriptor.render)(&self.config, &mut screen_canvas);
        }

        if self.frame.show {
            let mut overlay_canvas =
                Canvas::new(&mut pixmap, outer_w, outer_h, outer_transform, None);
            frame::draw_overlay(&mut overlay_canvas, self.frame.device);
        }

        Ok(pixmap)
    }
}
