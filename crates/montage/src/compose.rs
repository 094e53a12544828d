//! Montage compositing.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use deck_core::{Error, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageError, Rgb, RgbImage};

use crate::layout::{fit_within, GridLayout, MontageOptions};
use crate::validate::validate_inputs;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Build a montage of `image_paths` and save it to `output_path`.
///
/// The output format follows the extension of `output_path`. Any image that
/// cannot be opened aborts the whole montage.
pub fn create_montage<P: AsRef<Path>>(
    image_paths: &[P],
    output_path: impl AsRef<Path>,
    options: &MontageOptions,
) -> Result<PathBuf> {
    let output_path = output_path.as_ref();
    let (paths, layout) = validate_inputs(image_paths, options)?;

    let images = paths
        .iter()
        .map(|path| load_image(path))
        .collect::<Result<Vec<_>>>()?;

    let montage = compose(&images, &paths, &layout)?;
    save(&montage, output_path)?;

    log::info!("Montage of {} images saved to {}", images.len(), output_path.display());
    Ok(output_path.to_path_buf())
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    log::debug!("Opening {}", path.display());
    image::open(path).map_err(|e| match e {
        ImageError::IoError(ref io) if io.kind() == IoErrorKind::NotFound => Error::NotFound(format!(
            "Image file '{}' disappeared before it could be processed.",
            path.display()
        )),
        other => Error::ExternalTool(format!(
            "Image file '{}' could not be opened: {}",
            path.display(),
            other
        )),
    })
}

/// Paste thumbnails of `images` onto a white canvas laid out by `layout`.
///
/// `paths[i]` names `images[i]` in error messages.
pub fn compose(images: &[DynamicImage], paths: &[PathBuf], layout: &GridLayout) -> Result<RgbImage> {
    if images.is_empty() {
        return Err(Error::validation("No valid images were provided."));
    }

    let (width, height) = layout.canvas_size(images.len())?;
    log::debug!(
        "Canvas {}x{} ({} rows x {} columns)",
        width,
        height,
        layout.rows(images.len()),
        layout.columns
    );
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    for (index, image) in images.iter().enumerate() {
        let path = paths.get(index).map(|p| p.display().to_string()).unwrap_or_default();
        let (thumb_width, thumb_height) = fit_within(
            image.width(),
            image.height(),
            layout.tile_width,
            layout.tile_height,
        );
        let (x, y) = layout.cell_origin(index);

        if u64::from(x) + u64::from(thumb_width) > u64::from(width)
            || u64::from(y) + u64::from(thumb_height) > u64::from(height)
        {
            return Err(Error::ExternalTool(format!(
                "Failed to place image '{}': tile at ({}, {}) lies outside the {}x{} canvas",
                path, x, y, width, height
            )));
        }

        let thumbnail = if (thumb_width, thumb_height) == image.dimensions() {
            image.to_rgb8()
        } else {
            image
                .resize_exact(thumb_width, thumb_height, FilterType::CatmullRom)
                .to_rgb8()
        };
        imageops::replace(&mut canvas, &thumbnail, i64::from(x), i64::from(y));
        log::debug!("Placed {} at ({}, {}) as {}x{}", path, x, y, thumb_width, thumb_height);
    }

    Ok(canvas)
}

fn save(montage: &RgbImage, output_path: &Path) -> Result<()> {
    let missing_dir = || {
        Error::NotFound(format!(
            "The directory for '{}' does not exist.",
            output_path.display()
        ))
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(missing_dir());
        }
    }

    montage.save(output_path).map_err(|e| match e {
        ImageError::IoError(ref io) if io.kind() == IoErrorKind::NotFound => missing_dir(),
        other => Error::ExternalTool(format!(
            "Failed to save montage to '{}': {}",
            output_path.display(),
            other
        )),
    })
}
