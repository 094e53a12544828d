//! Placeholder image export for slide definitions.
//!
//! Each slide is written as `slide_NNN.png` holding the same 1x1 transparent
//! PNG. Nothing is rendered; the export exists so downstream tooling can run
//! the whole pipeline, including the overflow check, without a renderer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, OverflowViolation, Result};
use crate::types::Slide;

/// A minimal valid 1x1 transparent PNG.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, // IDAT
    0x54, 0x78, 0xDA, 0x63, 0x64, 0xF8, 0xCF, 0x50,
    0x0F, 0x00, 0x03, 0xA9, 0x01, 0xA1, 0x03, 0xA9,
    0x18, 0x63, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, // IEND
    0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Writes one placeholder image per slide into an output directory.
#[derive(Debug, Clone)]
pub struct SlideExporter {
    output_dir: PathBuf,
    allow_overflow: bool,
}

impl SlideExporter {
    /// Create an exporter that rejects overflowing slides.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            allow_overflow: false,
        }
    }

    /// Export slides even when their content overflows.
    pub fn allow_overflow(mut self, allow: bool) -> Self {
        self.allow_overflow = allow;
        self
    }

    /// File name for the 1-based slide `number`.
    pub fn file_name(number: usize) -> String {
        format!("slide_{:03}.png", number)
    }

    /// Export `slides` in order, returning the written paths.
    ///
    /// Stops at the first overflowing slide unless overflow is allowed.
    /// Files written for earlier slides are left in place.
    pub fn export(&self, slides: &[Slide]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let mut generated = Vec::with_capacity(slides.len());
        for (idx, slide) in slides.iter().enumerate() {
            let number = idx + 1;
            let overflows = slide.overflows();
            if !overflows.is_empty() {
                if !self.allow_overflow {
                    return Err(Error::Overflow(OverflowViolation {
                        slide: number,
                        overflows,
                    }));
                }
                log::warn!(
                    "Slide {} has {} overflowing elements; exporting anyway",
                    number,
                    overflows.len()
                );
            }

            let path = self.output_dir.join(Self::file_name(number));
            fs::write(&path, PLACEHOLDER_PNG)?;
            log::debug!("Wrote {}", path.display());
            generated.push(path);
        }

        log::info!(
            "Exported {} slides to {}",
            generated.len(),
            self.output_dir.display()
        );
        Ok(generated)
    }
}

/// Export `slides` to `output_dir`. See [`SlideExporter::export`].
pub fn export_slide_images(
    slides: &[Slide],
    output_dir: impl AsRef<Path>,
    allow_overflow: bool,
) -> Result<Vec<PathBuf>> {
    SlideExporter::new(output_dir.as_ref())
        .allow_overflow(allow_overflow)
        .export(slides)
}
