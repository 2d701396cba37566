use crate::canvas::Canvas;
use crate::error::IconError;
use crate::glyph::{default_candidates, FontCandidate, GlyphSource};
use crate::layout::{IconLayout, FILL_COLOR, GLYPH, GLYPH_COLOR, OUTLINE_COLOR, RING_COLOR};
use crate::renderer::Renderer;
use anyhow::Result;

/// Draws the dollar icon from primitives at the requested size
#[derive(Debug, Clone)]
pub struct VectorRenderer {
    fonts: Vec<FontCandidate>,
}

impl VectorRenderer {
    pub fn new() -> Self {
        Self::with_fonts(default_candidates())
    }

    /// Use a custom font lookup order; an empty list always draws the built-in glyph
    pub fn with_fonts(fonts: Vec<FontCandidate>) -> Self {
        Self { fonts }
    }

    /// Rasterize the icon without encoding it
    pub fn draw(&self, size: u32) -> Result<Canvas, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }

        let layout = IconLayout::for_size(size);
        let mut canvas = Canvas::new(size);

        canvas.draw_circle(
            layout.circle,
            Some(FILL_COLOR),
            OUTLINE_COLOR,
            layout.outline_width,
        );

        let glyphs = GlyphSource::resolve(&self.fonts);
        glyphs.draw_centered(&mut canvas, GLYPH, layout.font_size, GLYPH_COLOR);

        if let Some(ring) = layout.ring {
            canvas.stroke_circle_replace(ring.bounds, RING_COLOR, ring.width);
        }

        Ok(canvas)
    }
}

impl Default for VectorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for VectorRenderer {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn render_icon(&self, size: u32) -> Result<Vec<u8>> {
        self.draw(size)?.into_png()
    }
}
