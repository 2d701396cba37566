use anyhow::Result;
use dollar_icon_gen::icon::icon_set;
use dollar_icon_gen::verify::check_icon_file;
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("icons"));

    println!("Checking icons in: {}", dir.display());

    let mut failures = 0;
    for spec in icon_set() {
        let path = spec.path_in(&dir);
        if !path.exists() {
            println!("  ✗ {} missing", spec.filename);
            failures += 1;
            continue;
        }

        let check = check_icon_file(&path, spec.size)?;
        match check.dimensions {
            Some((w, h)) if check.matches_size() => {
                println!("  ✓ {} ({}x{})", spec.filename, w, h)
            }
            Some((w, h)) if check.has_signature => {
                println!(
                    "  ⚠ {} is {}x{}, expected {}x{}",
                    spec.filename, w, h, spec.size, spec.size
                );
                failures += 1;
            }
            _ => {
                println!("  ✗ {} is not a PNG file", spec.filename);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} icon(s) failed verification");
    }
    println!("✓ All icons verified");
    Ok(())
}
