//! Export slide definitions to placeholder PNG files.
//!
//! Rather than parsing binary PPTX files this consumes a JSON specification
//! describing slides and their elements, checks that every element stays
//! within its slide, and writes one placeholder image per slide.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::SlideExporter;

/// Export slide definitions to placeholder PNG files.
#[derive(Parser, Debug)]
#[command(name = "export-slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON specification describing the presentation slides
    spec: PathBuf,

    /// Directory where generated placeholder images should be stored
    output_dir: PathBuf,

    /// Generate images even when slide content overflows its bounds
    #[arg(long)]
    allow_overflow: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    deck_cli::init_logging(args.verbose);

    let slides = deck_core::load_slide_spec(&args.spec)
        .with_context(|| format!("Failed to load {}", args.spec.display()))?;

    let generated = SlideExporter::new(&args.output_dir)
        .allow_overflow(args.allow_overflow)
        .export(&slides)?;

    for path in &generated {
        log::info!("Written to: {}", path.display());
    }

    Ok(())
}
