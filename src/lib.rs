//! Generator for the dollar-sign browser extension icon set.

pub mod error;
pub mod icon;
pub mod icon_gen;
pub mod layout;
pub mod renderer;
pub mod verify;

#[cfg(feature = "render")]
pub mod canvas;
#[cfg(feature = "render")]
pub mod glyph;
#[cfg(feature = "render")]
pub mod vector;
