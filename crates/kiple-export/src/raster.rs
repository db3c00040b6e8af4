//! Raster image encoding.
//!
//! Captures a staged [`Scene`] into an encoded PNG or JPEG blob at a
//! pixel-density multiplier. PNG output preserves transparency (the
//! rounded display corners stay clear); JPEG output flattens
//! transparency onto white and accepts a quality factor.
//!
//! Capturing never mutates the scene: the density transform lives only
//! inside the paint call.

use image::ImageEncoder;
use kiple_screens::{RenderError, Scene};

/// Default pixel-density multiplier (2x, "retina" quality).
pub const DEFAULT_PIXEL_RATIO: f32 = 2.0;

/// Default JPEG quality factor.
pub const DEFAULT_JPEG_QUALITY: f32 = 0.9;

/// Output image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterFormat {
    /// PNG with an alpha channel (default).
    #[default]
    Png,
    /// JPEG; transparency is flattened onto white.
    Jpeg,
}

impl RasterFormat {
    /// File extension for the format (`png` / `jpg`).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// MIME type for the format.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Capture options for one rasterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Output encoding.
    pub format: RasterFormat,
    /// Output resolution relative to logical (CSS) pixels.
    pub pixel_ratio: f32,
    /// JPEG quality factor in `(0, 1]`; ignored for PNG.
    pub jpeg_quality: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            format: RasterFormat::default(),
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RasterOptions {
    /// Check option invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidOptions`] when the pixel ratio is
    /// not positive-finite or the JPEG quality is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), RasterError> {
        if !(self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0) {
            return Err(RasterError::InvalidOptions(format!(
                "pixel ratio must be a positive finite number, got {}",
                self.pixel_ratio,
            )));
        }
        if !(self.jpeg_quality.is_finite() && self.jpeg_quality > 0.0 && self.jpeg_quality <= 1.0) {
            return Err(RasterError::InvalidOptions(format!(
                "jpeg quality must be in (0, 1], got {}",
                self.jpeg_quality,
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while capturing a scene to an image blob.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Painting the scene failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Image encoding failed.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Capture options violate an invariant.
    #[error("invalid raster options: {0}")]
    InvalidOptions(String),
}

/// Capture a scene into an encoded image blob.
///
/// # Errors
///
/// Returns [`RasterError::InvalidOptions`] for bad options,
/// [`RasterError::Render`] when the scene cannot be painted, and
/// [`RasterError::Encode`] when encoding fails.
pub fn rasterize(scene: &Scene, options: &RasterOptions) -> Result<Vec<u8>, RasterError> {
    options.validate()?;

    let pixmap = scene.paint(options.pixel_ratio)?;
    let (width, height) = (pixmap.width(), pixmap.height());
    let data = pixmap.data();

    let mut out = Vec::new();
    match options.format {
        RasterFormat::Png => {
            // Un-premultiply to straight RGBA before encoding.
            let mut rgba = Vec::with_capacity(data.len());
            for pixel in data.chunks_exact(4) {
                let a = pixel[3];
                if a == 0 {
                    rgba.extend_from_slice(&[0, 0, 0, 0]);
                } else {
                    for channel in &pixel[..3] {
                        #[allow(clippy::cast_possible_truncation)]
                        rgba.push((u16::from(*channel) * 255 / u16::from(a)) as u8);
                    }
                    rgba.push(a);
                }
            }
            let encoder = image::codecs::png::PngEncoder::new(&mut out);
            encoder.write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)?;
        }
        RasterFormat::Jpeg => {
            // Flatten onto white. For premultiplied source data the
            // composite over white reduces to `channel + (255 - alpha)`.
            let mut rgb = Vec::with_capacity((width * height * 3) as usize);
            for pixel in data.chunks_exact(4) {
                let inverse_alpha = 255 - pixel[3];
                for channel in &pixel[..3] {
                    rgb.push(channel.saturating_add(inverse_alpha));
                }
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let quality = (options.jpeg_quality * 100.0).round().clamp(1.0, 100.0) as u8;
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality);
            encoder.write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)?;
        }
    }

    Ok(out)
}
