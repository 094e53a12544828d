//! Core domain types, error handling, and slide export for the deck tools.

pub mod error;
pub mod export;
pub mod overflow;
pub mod spec;
pub mod types;

pub use error::{Error, ErrorKind, OverflowViolation, Result};
pub use export::{export_slide_images, SlideExporter, PLACEHOLDER_PNG};
pub use overflow::detect_overflow;
pub use spec::{load_slide_spec, parse_slide_spec};
pub use types::{Bounds, Edge, Overflow, Slide, SlideElement};
