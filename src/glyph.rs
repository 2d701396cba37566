//! Glyph sources for the "$" mark
//!
//! Fonts are tried in order until one loads. When none does, a built-in
//! bitmap glyph is drawn instead.

use crate::canvas::Canvas;
use crate::error::IconError;
use rusttype::{point, Font, Scale};
use std::path::{Path, PathBuf};

/// Where to look for an outline font
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// An absolute font path
    Path(PathBuf),
    /// A bare file name, searched in the working directory and then the platform font directories
    Named(&'static str),
}

impl FontCandidate {
    /// Concrete paths this candidate expands to, in lookup order
    fn paths(&self) -> Vec<PathBuf> {
        match self {
            FontCandidate::Path(path) => vec![path.clone()],
            FontCandidate::Named(name) => std::iter::once(PathBuf::from(name))
                .chain(font_dirs().into_iter().map(|dir| dir.join(name)))
                .collect(),
        }
    }
}

/// Default lookup order: the macOS system Arial, then a named Arial anywhere on the font path
pub fn default_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::Path(PathBuf::from("/System/Library/Fonts/Arial.ttf")),
        FontCandidate::Named("arial.ttf"),
    ]
}

fn font_dirs() -> Vec<PathBuf> {
    let mut search: Vec<PathBuf> = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        search.push(Path::new(&windir).join("Fonts"));
    }
    if let Some(user_fonts) = dirs::font_dir() {
        search.push(user_fonts);
    }
    search.extend(
        [
            "/Library/Fonts",
            "/System/Library/Fonts/Supplemental",
            "/usr/share/fonts/truetype/msttcorefonts",
            "/usr/share/fonts/TTF",
            "/usr/local/share/fonts",
        ]
        .into_iter()
        .map(PathBuf::from),
    );
    search
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    let data = std::fs::read(path).ok()?;
    Font::try_from_vec(data)
}

/// Load the first candidate that yields a parseable font
pub fn resolve_font(candidates: &[FontCandidate]) -> Result<Font<'static>, IconError> {
    let mut tried = Vec::new();
    for path in candidates.iter().flat_map(FontCandidate::paths) {
        tracing::debug!(path = %path.display(), "trying font");
        if let Some(font) = load_font(&path) {
            tracing::debug!(path = %path.display(), "loaded font");
            return Ok(font);
        }
        tried.push(path);
    }
    Err(IconError::FontResolutionFailure { tried })
}

pub enum GlyphSource {
    Outline(Font<'static>),
    Builtin,
}

impl GlyphSource {
    pub fn resolve(candidates: &[FontCandidate]) -> Self {
        match resolve_font(candidates) {
            Ok(font) => GlyphSource::Outline(font),
            Err(err) => {
                tracing::warn!("{err}; using built-in glyph");
                GlyphSource::Builtin
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, GlyphSource::Builtin)
    }

    /// Draw `text` centred on the canvas by its pixel bounding box
    pub fn draw_centered(&self, canvas: &mut Canvas, text: &str, font_size: u32, color: [u8; 4]) {
        match self {
            GlyphSource::Outline(font) => draw_outline(canvas, font, text, font_size, color),
            GlyphSource::Builtin => draw_builtin(canvas, font_size, color),
        }
    }
}

fn draw_outline(canvas: &mut Canvas, font: &Font<'_>, text: &str, font_size: u32, color: [u8; 4]) {
    let scale = Scale::uniform(font_size as f32);
    let ascent = font.v_metrics(scale).ascent;
    let glyphs: Vec<_> = font.layout(text, scale, point(0.0, ascent)).collect();

    let Some((min_x, min_y, max_x, max_y)) = glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .map(|bb| (bb.min.x, bb.min.y, bb.max.x, bb.max.y))
        .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
    else {
        return;
    };

    let size = canvas.size() as i32;
    let offset_x = (size - (max_x - min_x)) / 2 - min_x;
    let offset_y = (size - (max_y - min_y)) / 2 - min_y;

    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let x = bb.min.x + gx as i32 + offset_x;
                let y = bb.min.y + gy as i32 + offset_y;
                canvas.blend_pixel(x, y, color, v);
            });
        }
    }
}

const BUILTIN_DOLLAR: [&str; 9] = [
    "..#..",
    ".####",
    "#.#..",
    "#.#..",
    ".###.",
    "..#.#",
    "..#.#",
    "####.",
    "..#..",
];

/// Nearest-neighbour scaled bitmap "$", roughly `font_size` pixels tall
fn draw_builtin(canvas: &mut Canvas, font_size: u32, color: [u8; 4]) {
    let rows = BUILTIN_DOLLAR.len() as i32;
    let cols = BUILTIN_DOLLAR[0].len() as i32;
    let cell = ((font_size as f32 / rows as f32).round() as i32).max(1);

    let size = canvas.size() as i32;
    let left = (size - cols * cell) / 2;
    let top = (size - rows * cell) / 2;

    for (row, line) in BUILTIN_DOLLAR.iter().enumerate() {
        for (col, _) in line.bytes().enumerate().filter(|(_, b)| *b == b'#') {
            let x0 = left + col as i32 * cell;
            let y0 = top + row as i32 * cell;
            for y in y0..y0 + cell {
                for x in x0..x0 + cell {
                    canvas.blend_pixel(x, y, color, 1.0);
                }
            }
        }
    }
}
