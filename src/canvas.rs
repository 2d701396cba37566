use crate::layout::CircleBox;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::io::Write;

/// Transparent RGBA drawing surface for a single icon
pub struct Canvas {
    image: RgbaImage,
}

/// Fraction of the pixel at distance `d` from the centre covered by a disc of `radius`
fn disc_coverage(radius: f32, d: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (radius - d + 0.5).clamp(0.0, 1.0)
}

/// Straight-alpha source-over compositing of `color` at opacity `alpha` onto `dst`
fn over(dst: Rgba<u8>, color: [u8; 4], alpha: f32) -> Rgba<u8> {
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let src = color[i] as f32 * alpha;
        let below = dst[i] as f32 * dst_alpha * (1.0 - alpha);
        ((src + below) / out_alpha).round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_alpha * 255.0).round() as u8,
    ])
}

/// Move `dst` toward `color` by `coverage`, channel by channel, alpha included
fn mix(dst: Rgba<u8>, color: [u8; 4], coverage: f32) -> Rgba<u8> {
    let channel = |i: usize| {
        let from = dst[i] as f32;
        (from + (color[i] as f32 - from) * coverage)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), channel(3)])
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Composite `color` over the pixel at `(x, y)`, scaling its alpha by `coverage`
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 4], coverage: f32) {
        if x < 0 || y < 0 || coverage <= 0.0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let alpha = color[3] as f32 / 255.0 * coverage.min(1.0);
        let dst = self.image.get_pixel_mut(x, y);
        *dst = over(*dst, color, alpha);
    }

    /// Write `color` into the pixel at `(x, y)` without compositing; partial coverage mixes toward it
    pub fn replace_pixel(&mut self, x: i32, y: i32, color: [u8; 4], coverage: f32) {
        if x < 0 || y < 0 || coverage <= 0.0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let dst = self.image.get_pixel_mut(x, y);
        *dst = mix(*dst, color, coverage.min(1.0));
    }

    /// Stroke a circle outline `width` pixels wide, replacing what lies beneath it
    pub fn stroke_circle_replace(&mut self, bounds: CircleBox, color: [u8; 4], width: u32) {
        let center = bounds.center();
        let outer = bounds.radius();
        let inner = (outer - width as f32).max(0.0);
        let size = self.size();

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let d = (dx * dx + dy * dy).sqrt();

                let ring_cov = disc_coverage(outer, d) - disc_coverage(inner, d);
                self.replace_pixel(x as i32, y as i32, color, ring_cov);
            }
        }
    }

    /// Draw a circle with an optional fill and an outline `width` pixels wide, anti-aliased at the edges
    pub fn draw_circle(
        &mut self,
        bounds: CircleBox,
        fill: Option<[u8; 4]>,
        outline: [u8; 4],
        width: u32,
    ) {
        let center = bounds.center();
        let outer = bounds.radius();
        let inner = (outer - width as f32).max(0.0);
        let size = self.size();

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let d = (dx * dx + dy * dy).sqrt();

                let inner_cov = disc_coverage(inner, d);
                let ring_cov = disc_coverage(outer, d) - inner_cov;

                if let Some(fill) = fill {
                    self.blend_pixel(x as i32, y as i32, fill, inner_cov);
                }
                self.blend_pixel(x as i32, y as i32, outline, ring_cov);
            }
        }
    }

    /// Encode the canvas as PNG, consuming it
    pub fn into_png(self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let size = self.size();
        write_png(self.image.as_raw(), &mut buf, size)?;
        Ok(buf)
    }
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, size, size, ColorType::Rgba8)
        .context("Failed to encode PNG")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8);
        assert!(canvas.image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn filled_circle_covers_center_not_corner() {
        let mut canvas = Canvas::new(16);
        canvas.draw_circle(
            CircleBox::inset(16, 1),
            Some([0, 124, 255, 255]),
            [0, 86, 179, 255],
            1,
        );
        assert_eq!(*canvas.image().get_pixel(8, 8), Rgba([0, 124, 255, 255]));
        assert_eq!(canvas.image().get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn outline_only_leaves_inside_untouched() {
        let mut canvas = Canvas::new(64);
        canvas.draw_circle(CircleBox::inset(64, 16), None, [255, 255, 255, 255], 1);
        assert_eq!(canvas.image().get_pixel(32, 32)[3], 0);
        // top of the ring: centre 32.5, radius 16.5
        assert_eq!(canvas.image().get_pixel(32, 16)[3], 255);
    }

    #[test]
    fn half_alpha_source_over_opaque() {
        let blended = over(Rgba([0, 124, 255, 255]), [255, 255, 255, 255], 128.0 / 255.0);
        assert_eq!(blended[3], 255);
        assert_eq!(blended[2], 255);
        assert!((126..=129).contains(&blended[0]));
    }

    #[test]
    fn replaced_ring_keeps_its_own_alpha() {
        let mut canvas = Canvas::new(64);
        canvas.draw_circle(
            CircleBox::inset(64, 2),
            Some([0, 124, 255, 255]),
            [0, 86, 179, 255],
            1,
        );
        canvas.stroke_circle_replace(CircleBox::inset(64, 16), [255, 255, 255, 128], 1);

        // fully covered ring pixel is written as-is over the opaque fill
        assert_eq!(*canvas.image().get_pixel(32, 16), Rgba([255, 255, 255, 128]));
        assert_eq!(*canvas.image().get_pixel(32, 32), Rgba([0, 124, 255, 255]));
    }

    #[test]
    fn partial_replace_mixes_toward_color() {
        let mixed = mix(Rgba([0, 124, 255, 255]), [255, 255, 255, 128], 0.5);
        assert_eq!(mixed, Rgba([128, 190, 255, 192]));
    }

    #[test]
    fn blend_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(4);
        canvas.blend_pixel(-1, 0, [255, 0, 0, 255], 1.0);
        canvas.blend_pixel(4, 4, [255, 0, 0, 255], 1.0);
        assert!(canvas.image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn png_output_has_signature() {
        let bytes = Canvas::new(16).into_png().unwrap();
        assert!(bytes.starts_with(&crate::verify::PNG_SIGNATURE));
    }
}
