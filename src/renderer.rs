use anyhow::Result;

/// Pre-encoded 16x16 RGBA icon used when the drawing stack is unavailable
pub static FALLBACK_PNG: &[u8] = include_bytes!("assets/fallback-icon-16.png");

/// Source of encoded PNG bytes for an icon of a given size
pub trait Renderer {
    /// Short name used in status output
    fn name(&self) -> &'static str;

    fn render_icon(&self, size: u32) -> Result<Vec<u8>>;
}

/// Hands out the same embedded blob for every size
#[derive(Debug, Clone, Copy)]
pub struct StaticBlobRenderer {
    blob: &'static [u8],
}

impl StaticBlobRenderer {
    pub fn new(blob: &'static [u8]) -> Self {
        Self { blob }
    }

    pub fn blob(&self) -> &'static [u8] {
        self.blob
    }
}

impl Default for StaticBlobRenderer {
    fn default() -> Self {
        Self::new(FALLBACK_PNG)
    }
}

impl Renderer for StaticBlobRenderer {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn render_icon(&self, size: u32) -> Result<Vec<u8>> {
        if size != 16 {
            tracing::warn!(size, "fallback icon is 16x16 regardless of requested size");
        }
        Ok(self.blob.to_vec())
    }
}
