use agnexus_icon_gen::icon_gen;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "agnexus-icon-gen",
    about = "Generate the AG Nexus extension icon set (16/48/128 px PNGs)"
)]
struct Args {
    /// Output directory. Defaults to the directory containing the executable.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let out_dir = match args.output {
        Some(dir) => dir,
        None => default_output_dir()?,
    };

    icon_gen::generate_icons(&out_dir)
}

/// Icons land next to the binary when no output directory is given.
fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Can't locate the running executable")?;
    Ok(exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}
