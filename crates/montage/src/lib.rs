//! Grid montage builder.
//!
//! Validates the inputs, shrinks each image to fit its tile, and pastes it at
//! the tile's top-left corner on a white canvas.

pub mod compose;
pub mod layout;
pub mod validate;

pub use compose::create_montage;
pub use layout::{fit_within, GridLayout, MontageOptions};
pub use validate::validate_inputs;
