use std::path::PathBuf;
use thiserror::Error;

/// Failure conditions raised while producing the icon set
#[derive(Debug, Error)]
pub enum IconError {
    /// The output directory does not exist. Nothing is written.
    #[error("Output directory not found: {}. Please run from the extension directory.", .0.display())]
    MissingOutputDirectory(PathBuf),

    /// The drawing stack is not available, so the static fallback icon is used instead.
    #[error("Rendering capability unavailable: {0}")]
    RenderingCapabilityUnavailable(&'static str),

    /// None of the font candidates could be loaded.
    #[error("No usable font found (tried {} candidates)", .tried.len())]
    FontResolutionFailure { tried: Vec<PathBuf> },

    #[error("Icon size must be positive, got {0}")]
    InvalidSize(u32),
}
