use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dollar_icon_gen::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "dollar-icon-gen",
    about = "Generate the 16/32/48/128 px dollar icons for the browser extension"
)]
struct Args {
    /// Existing directory the icons are written into.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// Skip drawing and write the embedded 16x16 fallback icon under every name
    #[clap(long)]
    fallback: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dollar_icon_gen=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        force_fallback: args.fallback,
    })?;

    Ok(())
}
