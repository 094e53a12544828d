//! Convert a PowerPoint presentation into PNG images.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use deck_convert::{Converter, DEFAULT_CONVERTER};

/// Convert a PowerPoint presentation into PNG images using LibreOffice.
#[derive(Parser, Debug)]
#[command(name = "pptx-to-img")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the PowerPoint presentation to convert
    pptx: PathBuf,

    /// Directory where the generated images should be written
    output: PathBuf,

    /// Path to the LibreOffice executable
    #[arg(long, default_value = DEFAULT_CONVERTER)]
    converter: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    deck_cli::init_logging(args.verbose);

    let result = Converter::new(&args.converter)
        .convert(&args.pptx, &args.output)
        .map(|output| {
            if !output.is_empty() {
                log::debug!("Converter output:\n{}", output);
            }
        })
        .map_err(anyhow::Error::from);

    deck_cli::finish(result, || {
        format!("Images created in '{}'.", args.output.display())
    })
}
