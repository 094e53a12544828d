//! Input validation for montages.

use std::path::{Path, PathBuf};

use deck_core::{Error, Result};

use crate::layout::{GridLayout, MontageOptions};

/// Check the image paths and layout options before any image is opened.
///
/// Checks run in order: empty input, missing files (all reported together,
/// sorted), columns, tile size, spacing. The first failing check is returned.
pub fn validate_inputs<P: AsRef<Path>>(
    image_paths: &[P],
    options: &MontageOptions,
) -> Result<(Vec<PathBuf>, GridLayout)> {
    let paths: Vec<PathBuf> = image_paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
    if paths.is_empty() {
        return Err(Error::validation("No input images were provided."));
    }

    let mut missing: Vec<PathBuf> = paths.iter().filter(|p| !p.is_file()).cloned().collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(Error::MissingFiles(missing));
    }

    if options.columns <= 0 {
        return Err(Error::validation(
            "The number of columns must be greater than zero.",
        ));
    }
    if options.tile_width <= 0 || options.tile_height <= 0 {
        return Err(Error::validation(
            "Tile width and height must be greater than zero.",
        ));
    }
    if options.spacing < 0 {
        return Err(Error::validation(
            "Spacing between images cannot be negative.",
        ));
    }

    let layout = GridLayout::new(
        pixels(options.columns, "columns")?,
        pixels(options.tile_width, "tile width")?,
        pixels(options.tile_height, "tile height")?,
        pixels(options.spacing, "spacing")?,
    )?;

    log::debug!("Validated {} input images with {:?}", paths.len(), layout);
    Ok((paths, layout))
}

fn pixels(value: i64, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::validation(format!("The {} value {} is too large.", what, value)))
}
