use std::path::{Path, PathBuf};

/// Pixel sizes of the extension icon set
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// A single requested icon: its pixel size and the file name it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: String,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            filename: icon_filename(size),
        }
    }

    pub fn path_in(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.filename)
    }
}

pub fn icon_filename(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Specs for the fixed icon set, in ascending size order
pub fn icon_set() -> Vec<IconSpec> {
    ICON_SIZES.iter().copied().map(IconSpec::new).collect()
}
