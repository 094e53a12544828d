//! Create a montage from image files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use deck_montage::MontageOptions;

/// Create a montage from image files.
#[derive(Parser, Debug)]
#[command(name = "create-montage")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path where the montage should be saved
    output: PathBuf,

    /// Paths to the input images
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Number of columns in the montage grid
    #[arg(long, default_value = "3", allow_negative_numbers = true)]
    columns: i64,

    /// Width of each tile in pixels
    #[arg(long, default_value = "200", allow_negative_numbers = true)]
    tile_width: i64,

    /// Height of each tile in pixels
    #[arg(long, default_value = "200", allow_negative_numbers = true)]
    tile_height: i64,

    /// Spacing between images in pixels
    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    spacing: i64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    deck_cli::init_logging(args.verbose);

    let options = MontageOptions::new()
        .with_columns(args.columns)
        .with_tile_size(args.tile_width, args.tile_height)
        .with_spacing(args.spacing);

    let result = deck_montage::create_montage(&args.images, &args.output, &options)
        .map(|_| ())
        .map_err(anyhow::Error::from);

    deck_cli::finish(result, || {
        format!("Montage created at '{}'.", args.output.display())
    })
}
