//! Header-level checks on generated icon files
//!
//! Only the PNG signature and the IHDR chunk are inspected, so these checks
//! work in builds without the drawing stack.

use anyhow::{Context, Result};
use std::path::Path;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Outcome of checking one icon file against its expected size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCheck {
    pub expected_size: u32,
    pub has_signature: bool,
    pub dimensions: Option<(u32, u32)>,
}

impl IconCheck {
    pub fn is_valid_png(&self) -> bool {
        self.has_signature && self.dimensions.is_some()
    }

    pub fn matches_size(&self) -> bool {
        self.dimensions == Some((self.expected_size, self.expected_size))
    }
}

/// Read width and height from the IHDR chunk, which must directly follow the signature
pub fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 24 || !bytes.starts_with(&PNG_SIGNATURE) || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

pub fn check_icon_bytes(bytes: &[u8], expected_size: u32) -> IconCheck {
    IconCheck {
        expected_size,
        has_signature: bytes.starts_with(&PNG_SIGNATURE),
        dimensions: png_dimensions(bytes),
    }
}

pub fn check_icon_file(path: &Path, expected_size: u32) -> Result<IconCheck> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(check_icon_bytes(&bytes, expected_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes
    }

    #[test]
    fn reads_ihdr_dimensions() {
        assert_eq!(png_dimensions(&header(48, 48)), Some((48, 48)));
    }

    #[test]
    fn size_mismatch_is_still_valid_png() {
        let check = check_icon_bytes(&header(16, 16), 128);
        assert!(check.is_valid_png());
        assert!(!check.matches_size());
    }

    #[test]
    fn rejects_non_png() {
        let check = check_icon_bytes(b"GIF89a not a png at all, really", 16);
        assert!(!check.has_signature);
        assert_eq!(check.dimensions, None);
        assert!(png_dimensions(&PNG_SIGNATURE).is_none());
    }
}
