//! Bounds checking for slide elements.
//!
//! Comparisons are strict: an element that exactly touches a slide edge
//! is not reported.

use crate::types::{Edge, Overflow, SlideElement};

/// Report every element that extends past a `slide_width` x `slide_height` slide.
///
/// Records keep the elements' order. An element may cross several edges at once.
pub fn detect_overflow(elements: &[SlideElement], slide_width: f64, slide_height: f64) -> Vec<Overflow> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let bounds = element.bounds();
            let mut reasons = Vec::new();
            if bounds.left < 0.0 {
                reasons.push(Edge::Left);
            }
            if bounds.top < 0.0 {
                reasons.push(Edge::Top);
            }
            if bounds.right > slide_width {
                reasons.push(Edge::Right);
            }
            if bounds.bottom > slide_height {
                reasons.push(Edge::Bottom);
            }

            if reasons.is_empty() {
                return None;
            }

            log::debug!(
                "Element {} ({}) overflows: {:?}",
                index,
                element.name,
                reasons
            );
            Some(Overflow {
                index,
                name: element.name.clone(),
                bounds,
                reasons,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_overflow_mixed_elements() {
        let elements = vec![
            SlideElement::new("A", 10.0, 10.0, 100.0, 100.0),
            SlideElement::new("B", 1800.0, 1000.0, 200.0, 200.0),
            SlideElement::new("C", -10.0, 5.0, 20.0, 20.0),
        ];

        let overflows = detect_overflow(&elements, 1920.0, 1080.0);

        assert_eq!(overflows.len(), 2);
        assert_eq!(overflows[0].index, 1);
        assert_eq!(overflows[0].name, "B");
        assert_eq!(overflows[0].reasons, vec![Edge::Right, Edge::Bottom]);
        assert_eq!(overflows[0].bounds.right, 2000.0);
        assert_eq!(overflows[1].index, 2);
        assert_eq!(overflows[1].name, "C");
        assert_eq!(overflows[1].reasons, vec![Edge::Left]);
    }

    #[test]
    fn test_touching_edges_is_not_overflow() {
        let elements = vec![SlideElement::new("full", 0.0, 0.0, 1920.0, 1080.0)];
        assert!(detect_overflow(&elements, 1920.0, 1080.0).is_empty());
    }

    #[test]
    fn test_all_edges_at_once() {
        let elements = vec![SlideElement::new("huge", -1.0, -1.0, 200.0, 200.0)];
        let overflows = detect_overflow(&elements, 100.0, 100.0);
        assert_eq!(
            overflows[0].reasons,
            vec![Edge::Left, Edge::Top, Edge::Right, Edge::Bottom]
        );
    }

    #[test]
    fn test_no_elements() {
        assert!(detect_overflow(&[], 10.0, 10.0).is_empty());
    }
}
