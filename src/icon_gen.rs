use crate::error::IconError;
use crate::icon::{icon_filename, icon_set, IconSpec, ICON_SIZES};
use crate::renderer::{Renderer, StaticBlobRenderer, FALLBACK_PNG};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub force_fallback: bool,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: usize,
    pub requested: usize,
    pub renderer: &'static str,
}

/// Build the vector renderer, or report why it cannot be used
pub fn vector_renderer(force_fallback: bool) -> Result<Box<dyn Renderer>, IconError> {
    if force_fallback {
        return Err(IconError::RenderingCapabilityUnavailable(
            "fallback requested",
        ));
    }
    compiled_vector_renderer()
}

#[cfg(feature = "render")]
fn compiled_vector_renderer() -> Result<Box<dyn Renderer>, IconError> {
    Ok(Box::new(crate::vector::VectorRenderer::new()))
}

#[cfg(not(feature = "render"))]
fn compiled_vector_renderer() -> Result<Box<dyn Renderer>, IconError> {
    Err(IconError::RenderingCapabilityUnavailable(
        "built without the `render` feature",
    ))
}

/// Render one icon and write it into `out_dir`, overwriting any existing file
pub fn generate_icon(renderer: &dyn Renderer, spec: &IconSpec, out_dir: &Path) -> Result<()> {
    let bytes = renderer
        .render_icon(spec.size)
        .with_context(|| format!("Failed to render {}", spec.filename))?;

    let path = spec.path_in(out_dir);
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("  ✓ Created {} ({}x{})", spec.filename, spec.size, spec.size);
    Ok(())
}

/// Write `blob` unchanged under the file name of every size
pub fn generate_fallback_set(
    sizes: &[u32],
    blob: &'static [u8],
    out_dir: &Path,
) -> Result<usize> {
    let renderer = StaticBlobRenderer::new(blob);
    for &size in sizes {
        let filename = icon_filename(size);
        let path = out_dir.join(&filename);
        let bytes = renderer.render_icon(size)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  ✓ Created {filename} (fallback)");
    }
    Ok(sizes.len())
}

pub fn generate_icons(args: Args) -> Result<GenerationReport> {
    println!("Generating PNG icons...");

    if !args.output.is_dir() {
        return Err(IconError::MissingOutputDirectory(args.output).into());
    }

    let specs = icon_set();
    let requested = specs.len();

    let report = match vector_renderer(args.force_fallback) {
        Ok(renderer) => {
            println!("✓ Drawing stack available - creating high-quality icons");
            let mut written = 0;
            for spec in &specs {
                match generate_icon(renderer.as_ref(), spec, &args.output) {
                    Ok(()) => written += 1,
                    Err(err) => tracing::warn!("{err:#}"),
                }
            }
            GenerationReport {
                written,
                requested,
                renderer: renderer.name(),
            }
        }
        Err(reason) => {
            tracing::info!("{reason}");
            println!("⚠ Drawing stack not available - creating basic fallback icons");
            let fallback = StaticBlobRenderer::new(FALLBACK_PNG);
            let written = generate_fallback_set(&ICON_SIZES, fallback.blob(), &args.output)?;
            GenerationReport {
                written,
                requested,
                renderer: fallback.name(),
            }
        }
    };

    println!();
    println!(
        "Generated {}/{} icon files!",
        report.written, report.requested
    );
    Ok(report)
}
