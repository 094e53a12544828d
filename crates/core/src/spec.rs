//! JSON slide specification loader.
//!
//! A specification looks like:
//!
//! ```json
//! {
//!   "defaults": { "width": 1920, "height": 1080 },
//!   "slides": [
//!     { "elements": [{ "name": "title", "x": 40, "y": 40, "width": 800, "height": 120 }] },
//!     { "width": 1280, "height": 720, "elements": [] }
//!   ]
//! }
//! ```
//!
//! Slide `width`/`height` fall back to `defaults` field by field. Element
//! `x`/`y` default to zero; element `width`/`height` are required.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::{Slide, SlideElement};

/// Read and parse a slide specification file.
pub fn load_slide_spec(path: impl AsRef<Path>) -> Result<Vec<Slide>> {
    let path = path.as_ref();
    log::debug!("Loading slide specification from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(format!(
            "The slide specification '{}' was not found.",
            path.display()
        )),
        _ => Error::IoError(e),
    })?;
    parse_slide_spec(&content)
}

/// Parse a slide specification from JSON text.
pub fn parse_slide_spec(json: &str) -> Result<Vec<Slide>> {
    let data: Value = serde_json::from_str(json)?;
    let root = data.as_object();

    let empty = Map::new();
    let defaults = match root.and_then(|r| r.get("defaults")) {
        None => &empty,
        Some(Value::Object(defaults)) => defaults,
        Some(_) => return Err(Error::validation("defaults must be an object when provided")),
    };

    let slides = root
        .and_then(|r| r.get("slides"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::validation("Specification must contain a list of slides"))?;

    let slides = slides
        .iter()
        .enumerate()
        .map(|(idx, raw)| parse_slide(raw, defaults, idx + 1))
        .collect::<Result<Vec<_>>>()?;

    log::info!("Loaded {} slides", slides.len());
    Ok(slides)
}

fn parse_slide(raw: &Value, defaults: &Map<String, Value>, number: usize) -> Result<Slide> {
    let raw = raw
        .as_object()
        .ok_or_else(|| Error::validation(format!("Slide {} must be an object", number)))?;

    let context = format!("slide {}", number);
    let width = coerce_number(raw.get("width"), defaults.get("width"), &context, "width")?;
    let height = coerce_number(raw.get("height"), defaults.get("height"), &context, "height")?;

    let elements: &[Value] = match raw.get("elements") {
        None => &[],
        Some(Value::Array(elements)) => elements.as_slice(),
        Some(_) => return Err(Error::validation("Slide elements must be provided as a list")),
    };

    let mut slide = Slide::new(width, height);
    for (index, element) in elements.iter().enumerate() {
        slide.add_element(parse_element(element, number, index)?);
    }
    Ok(slide)
}

fn parse_element(raw: &Value, slide: usize, index: usize) -> Result<SlideElement> {
    let context = format!("slide {} element {}", slide, index);
    let raw = raw
        .as_object()
        .ok_or_else(|| Error::validation(format!("In {}: element must be an object", context)))?;

    let name = match raw.get("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    let name = if name.is_empty() {
        format!("element-{}", index)
    } else {
        name
    };

    let zero = Value::from(0);
    let x = coerce_number(Some(raw.get("x").unwrap_or(&zero)), None, &context, "x")?;
    let y = coerce_number(Some(raw.get("y").unwrap_or(&zero)), None, &context, "y")?;
    let width = coerce_number(raw.get("width"), None, &context, "width")?;
    let height = coerce_number(raw.get("height"), None, &context, "height")?;

    Ok(SlideElement::new(name, x, y, width, height))
}

/// Resolve a numeric field, falling back to `default` when the value is absent or null.
fn coerce_number(
    value: Option<&Value>,
    default: Option<&Value>,
    context: &str,
    field: &str,
) -> Result<f64> {
    let value = match value {
        None | Some(Value::Null) => match default {
            None | Some(Value::Null) => {
                return Err(Error::validation(format!(
                    "In {}: expected numeric value for '{}', none provided",
                    context, field
                )))
            }
            Some(default) => default,
        },
        Some(value) => value,
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number.ok_or_else(|| {
        Error::validation(format!(
            "In {}: '{}' must be a number, got {}",
            context, field, value
        ))
    })
}
