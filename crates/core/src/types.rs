//! Domain types for slide definitions and overflow findings.

use serde::{Deserialize, Serialize};

use crate::overflow::detect_overflow;

/// Axis-aligned bounds of an element, in slide units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// A drawable element positioned on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideElement {
    /// Element name. The loader fills in `element-<index>` when none is given.
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SlideElement {
    /// Create a new element.
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds covered by this element.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        }
    }
}

/// A slide canvas with its elements in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<SlideElement>,
}

impl Slide {
    /// Create an empty slide with the given extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Add an element to the slide.
    pub fn add_element(&mut self, element: SlideElement) {
        self.elements.push(element);
    }

    /// Elements that extend past this slide's edges.
    pub fn overflows(&self) -> Vec<Overflow> {
        detect_overflow(&self.elements, self.width, self.height)
    }
}

/// A slide edge an element can cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// Lower-case edge name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element that crosses one or more slide edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overflow {
    /// 0-based position of the element on its slide.
    pub index: usize,
    pub name: String,
    pub bounds: Bounds,
    /// Crossed edges, in left, top, right, bottom order.
    pub reasons: Vec<Edge>,
}

impl Overflow {
    /// Whether the element crosses the given edge.
    pub fn crosses(&self, edge: Edge) -> bool {
        self.reasons.contains(&edge)
    }
}
