//! PowerPoint to PNG conversion through an external converter.
//!
//! Runs `<converter> --headless --convert-to png --outdir <dir> <input>`,
//! which is the LibreOffice command line.

pub mod converter;

pub use converter::{convert_pptx_to_images, Converter, DEFAULT_CONVERTER};
