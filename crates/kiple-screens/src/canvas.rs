//! Logical-coordinate drawing surface for screen renderers.
//!
//! [`Canvas`] wraps a [`tiny_skia::Pixmap`] together with a
//! logical-to-device transform, so renderers draw in the canonical
//! 375x812 coordinate space regardless of the pixel-density multiplier
//! chosen at capture time.
//!
//! Text is drawn as *wireframe bars*: rounded blocks whose width is
//! estimated from the string, font size, and letter spacing, and whose
//! height follows the type scale. Screens are mockups; no font
//! rasterization happens here.

use tiny_skia::{FillRule, Mask, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::config::{Color, TextRole, Typography};

/// Average glyph advance for UI sans-serif faces, as a fraction of the
/// font size. Calibrated so stock copy fills roughly the same width as
/// the rendered product.
const GLYPH_ADVANCE_EM: f32 = 0.52;

/// Estimate the rendered width of a text run, in logical pixels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn text_width(text: &str, size: f32, letter_spacing: f32) -> f32 {
    let glyphs = text.chars().count() as f32;
    if glyphs <= 0.0 {
        return 0.0;
    }
    glyphs.mul_add(size * GLYPH_ADVANCE_EM, (glyphs - 1.0) * letter_spacing)
}

/// Height of a text bar for a given font size and weight.
///
/// Heavier weights produce slightly thicker bars so weight changes stay
/// visible in the wireframe.
#[must_use]
fn bar_height(size: f32, weight: u16) -> f32 {
    size * f32::from(weight).mul_add(1.0 / 3500.0, 0.45)
}

/// A drawing surface in logical screen coordinates.
pub struct Canvas<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
    mask: Option<&'a Mask>,
    width: f32,
    height: f32,
}

impl<'a> Canvas<'a> {
    /// Wrap a pixmap with a logical size and a logical-to-device
    /// transform.
    pub fn new(
        pixmap: &'a mut Pixmap,
        width: f32,
        height: f32,
        transform: Transform,
        mask: Option<&'a Mask>,
    ) -> Self {
        Self {
            pixmap,
            transform,
            mask,
            width,
            height,
        }
    }

    /// Logical width of the drawable area.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Logical height of the drawable area.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    fn paint_for(color: Color, alpha: u8) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, alpha);
        paint.anti_alias = true;
        paint
    }

    fn fill(&mut self, path: &tiny_skia::Path, color: Color, alpha: u8) {
        self.pixmap.fill_path(
            path,
            &Self::paint_for(color, alpha),
            FillRule::Winding,
            self.transform,
            self.mask,
        );
    }

    fn stroke(&mut self, path: &tiny_skia::Path, stroke_width: f32, color: Color) {
        let stroke = Stroke {
            width: stroke_width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &Self::paint_for(color, 255),
            &stroke,
            self.transform,
            self.mask,
        );
    }

    /// Fill the whole logical area with a solid color.
    pub fn fill_background(&mut self, color: Color) {
        self.fill_rect(0.0, 0.0, self.width, self.height, color);
    }

    /// Fill the whole logical area with a translucent overlay.
    pub fn scrim(&mut self, color: Color, alpha: u8) {
        if let Some(rect) = Rect::from_xywh(0.0, 0.0, self.width, self.height) {
            let path = PathBuilder::from_rect(rect);
            self.fill(&path, color, alpha);
        }
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            let path = PathBuilder::from_rect(rect);
            self.fill(&path, color, 255);
        }
    }

    /// Fill a rounded rectangle.
    pub fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
        if let Some(path) = rounded_rect_path(x, y, w, h, radius) {
            self.fill(&path, color, 255);
        }
    }

    /// Fill a rounded rectangle with a translucent tint.
    #[allow(clippy::too_many_arguments)]
    pub fn tint_round_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        color: Color,
        alpha: u8,
    ) {
        if let Some(path) = rounded_rect_path(x, y, w, h, radius) {
            self.fill(&path, color, alpha);
        }
    }

    /// Fill a circle with a translucent tint.
    pub fn tint_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, alpha: u8) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        if let Some(path) = pb.finish() {
            self.fill(&path, color, alpha);
        }
    }

    /// Stroke the outline of a rounded rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_round_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    ) {
        if let Some(path) = rounded_rect_path(x, y, w, h, radius) {
            self.stroke(&path, stroke_width, color);
        }
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        if let Some(path) = pb.finish() {
            self.fill(&path, color, 255);
        }
    }

    /// Stroke the outline of a circle.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke_width: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        if let Some(path) = pb.finish() {
            self.stroke(&path, stroke_width, color);
        }
    }

    /// Draw a fully-rounded bar of an explicit width.
    pub fn bar(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.fill_round_rect(x, y, w, h, h / 2.0, color);
    }

    /// Draw a wireframe text bar starting at `x`, clamped to `max_w`.
    ///
    /// Returns the drawn width.
    #[allow(clippy::too_many_arguments)]
    pub fn text_bar(
        &mut self,
        x: f32,
        y: f32,
        max_w: f32,
        text: &str,
        role: TextRole,
        typography: &Typography,
        color: Color,
    ) -> f32 {
        let size = typography.size(role);
        let w = text_width(text, size, typography.letter_spacing).min(max_w);
        let h = bar_height(size, typography.weight(role));
        if w > 0.0 {
            self.bar(x, y, w, h, color);
        }
        w
    }

    /// Draw a wireframe text bar centered on `cx`, clamped to `max_w`.
    #[allow(clippy::too_many_arguments)]
    pub fn text_bar_centered(
        &mut self,
        cx: f32,
        y: f32,
        max_w: f32,
        text: &str,
        role: TextRole,
        typography: &Typography,
        color: Color,
    ) {
        let size = typography.size(role);
        let w = text_width(text, size, typography.letter_spacing).min(max_w);
        let h = bar_height(size, typography.weight(role));
        if w > 0.0 {
            self.bar(cx - w / 2.0, y, w, h, color);
        }
    }

    /// Draw a wrapped wireframe paragraph and return the total height
    /// consumed.
    ///
    /// The text is broken into full-width lines with a shorter trailing
    /// line, mimicking ragged-right body copy.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph(
        &mut self,
        x: f32,
        y: f32,
        max_w: f32,
        text: &str,
        role: TextRole,
        typography: &Typography,
        color: Color,
    ) -> f32 {
        let size = typography.size(role);
        let total = text_width(text, size, typography.letter_spacing);
        if total <= 0.0 || max_w <= 0.0 {
            return 0.0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lines = (total / max_w).ceil().max(1.0) as usize;
        let advance = typography.line_advance(role);
        let h = bar_height(size, typography.weight(role));
        let mut remaining = total;
        for line in 0..lines {
            let w = remaining.min(max_w);
            #[allow(clippy::cast_precision_loss)]
            self.bar(x, (line as f32).mul_add(advance, y), w, h, color);
            remaining -= w;
        }
        #[allow(clippy::cast_precision_loss)]
        let consumed = lines as f32 * advance;
        consumed
    }

    /// Draw a wrapped wireframe paragraph with every line centered on
    /// `cx`; returns the total height consumed.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph_centered(
        &mut self,
        cx: f32,
        y: f32,
        max_w: f32,
        text: &str,
        role: TextRole,
        typography: &Typography,
        color: Color,
    ) -> f32 {
        let size = typography.size(role);
        let total = text_width(text, size, typography.letter_spacing);
        if total <= 0.0 || max_w <= 0.0 {
            return 0.0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lines = (total / max_w).ceil().max(1.0) as usize;
        let advance = typography.line_advance(role);
        let h = bar_height(size, typography.weight(role));
        let mut remaining = total;
        for line in 0..lines {
            let w = remaining.min(max_w);
            #[allow(clippy::cast_precision_loss)]
            self.bar(cx - w / 2.0, (line as f32).mul_add(advance, y), w, h, color);
            remaining -= w;
        }
        #[allow(clippy::cast_precision_loss)]
        let consumed = lines as f32 * advance;
        consumed
    }
}

/// Build a rounded-rectangle path, with the radius clamped to half the
/// shorter side. Returns `None` for degenerate sizes.
#[must_use]
pub fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<tiny_skia::Path> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let r = radius.clamp(0.0, w.min(h) / 2.0);
    if r <= 0.0 {
        return Rect::from_xywh(x, y, w, h).map(PathBuilder::from_rect);
    }

    // Quadratic corner approximation; visually indistinguishable from
    // arcs at mockup scale.
    let (right, bottom) = (x + w, y + h);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.quad_to(right, y, right, y + r);
    pb.line_to(right, bottom - r);
    pb.quad_to(right, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.quad_to(x, bottom, x, bottom - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Build a [`Mask`] covering a rounded rectangle in device coordinates.
///
/// Used to clip screen content to the rounded display corners. Returns
/// `None` if the mask or path cannot be constructed.
#[must_use]
pub fn rounded_rect_mask(
    device_width: u32,
    device_height: u32,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    transform: Transform,
) -> Option<Mask> {
    let path = rounded_rect_path(x, y, w, h, radius)?;
    let mut mask = Mask::new(device_width, device_height)?;
    mask.fill_path(&path, FillRule::Winding, true, transform);
    Some(mask)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Typography;

    fn canvas_pixmap() -> Pixmap {
        Pixmap::new(100, 100).unwrap()
    }

    #[test]
    fn text_width_scales_with_length_and_size() {
        let short = text_width("Login", 16.0, 0.0);
        let long = text_width("Registration Successful!", 16.0, 0.0);
        assert!(long > short);
        assert!(text_width("Login", 32.0, 0.0) > short);
        assert_eq!(text_width("", 16.0, 0.0), 0.0);
    }

    #[test]
    fn text_width_includes_letter_spacing() {
        let tight = text_width("abcd", 16.0, 0.0);
        let loose = text_width("abcd", 16.0, 2.0);
        assert!((loose - tight - 6.0).abs() < 1e-4);
    }

    #[test]
    fn fill_rect_writes_pixels() {
        let mut pixmap = canvas_pixmap();
        let mut canvas = Canvas::new(&mut pixmap, 100.0, 100.0, Transform::identity(), None);
        canvas.fill_rect(10.0, 10.0, 20.0, 20.0, Color::rgb(255, 0, 0));
        let px = pixmap.pixel(15, 15).unwrap();
        assert_eq!((px.red(), px.green(), px.blue()), (255, 0, 0));
        // Outside the rect stays untouched.
        assert_eq!(pixmap.pixel(50, 50).unwrap().alpha(), 0);
    }

    #[test]
    fn transform_scales_logical_coordinates() {
        let mut pixmap = canvas_pixmap();
        let mut canvas = Canvas::new(
            &mut pixmap,
            50.0,
            50.0,
            Transform::from_scale(2.0, 2.0),
            None,
        );
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, Color::rgb(0, 255, 0));
        // Logical (0..10) covers device (0..20) at 2x.
        assert_eq!(pixmap.pixel(15, 15).unwrap().green(), 255);
        assert_eq!(pixmap.pixel(25, 25).unwrap().alpha(), 0);
    }

    #[test]
    fn rounded_rect_path_handles_degenerate_input() {
        assert!(rounded_rect_path(0.0, 0.0, 0.0, 10.0, 4.0).is_none());
        assert!(rounded_rect_path(0.0, 0.0, 10.0, 10.0, 0.0).is_some());
        assert!(rounded_rect_path(0.0, 0.0, 10.0, 10.0, 400.0).is_some());
    }

    #[test]
    fn rounded_corners_stay_transparent() {
        let mut pixmap = canvas_pixmap();
        let mut canvas = Canvas::new(&mut pixmap, 100.0, 100.0, Transform::identity(), None);
        canvas.fill_round_rect(0.0, 0.0, 100.0, 100.0, 30.0, Color::rgb(0, 0, 255));
        // Center is filled, the extreme corner is not.
        assert_eq!(pixmap.pixel(50, 50).unwrap().blue(), 255);
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn mask_clips_fills() {
        let mut pixmap = canvas_pixmap();
        let mask =
            rounded_rect_mask(100, 100, 0.0, 0.0, 50.0, 100.0, 0.0, Transform::identity()).unwrap();
        let mut canvas = Canvas::new(&mut pixmap, 100.0, 100.0, Transform::identity(), Some(&mask));
        canvas.fill_background(Color::rgb(10, 20, 30));
        // Left half (inside mask) painted; right half clipped away.
        assert!(pixmap.pixel(25, 50).unwrap().alpha() > 0);
        assert_eq!(pixmap.pixel(75, 50).unwrap().alpha(), 0);
    }

    #[test]
    fn text_bar_clamps_to_max_width() {
        let mut pixmap = canvas_pixmap();
        let mut canvas = Canvas::new(&mut pixmap, 100.0, 100.0, Transform::identity(), None);
        let typography = Typography::default();
        let drawn = canvas.text_bar(
            0.0,
            0.0,
            40.0,
            "a very long heading that cannot possibly fit",
            TextRole::H1,
            &typography,
            Color::rgb(0, 0, 0),
        );
        assert_eq!(drawn, 40.0);
    }

    #[test]
    fn paragraph_consumes_one_advance_per_line() {
        let mut pixmap = canvas_pixmap();
        let mut canvas = Canvas::new(&mut pixmap, 100.0, 100.0, Transform::identity(), None);
        let typography = Typography::default();
        let text = "Pay your bills quickly and securely from anywhere.";
        let consumed = canvas.paragraph(
            0.0,
            0.0,
            80.0,
            text,
            TextRole::Body,
            &typography,
            Color::rgb(0, 0, 0),
        );
        let advance = typography.line_advance(TextRole::Body);
        let expected_lines = (text_width(text, 16.0, 0.0) / 80.0).ceil();
        assert!((consumed - expected_lines * advance).abs() < 1e-4);
    }
}
