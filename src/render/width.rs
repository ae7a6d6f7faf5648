//! # Width Calculation
//!
//! Computes how many character cells an element occupies on a line.
//!
//! ## Budgets
//!
//! A budget caps the width an element may report. Children are charged
//! against a shrinking budget: each child gets whatever its earlier
//! siblings (and the text before it) left over, so a bounded element never
//! reports more than its bound.
//!
//! ```text
//! <bold>ab<span width="4"/>cdef</bold>   budget 8
//!
//! "ab"        2   remaining 6
//! span        4   remaining 2
//! "cdef"      4   -> total 10, clipped to 8
//! ```

use unicode_width::UnicodeWidthChar;

use crate::error::LineModeError;
use crate::markup::Element;

/// Width of an inline element in cells, never more than `max_width`.
///
/// A declared `width` attribute wins over the content width. Block
/// elements and unknown tags are errors.
pub fn element_width(element: &Element, max_width: Option<usize>) -> Result<usize, LineModeError> {
    element.kind.expect_inline()?;
    match element.fixed_width()? {
        Some(width) => Ok(clamp(width, max_width)),
        None => content_width(element, max_width),
    }
}

/// Width of an element's text, children and their tails.
///
/// Used directly for `<line>` elements, which have no fixed width.
pub fn content_width(element: &Element, max_width: Option<usize>) -> Result<usize, LineModeError> {
    let mut width = element.text_str().map_or(0, text_width);

    for child in &element.children {
        match max_width {
            Some(max) => {
                if width >= max {
                    return Ok(max);
                }
                width += element_width(child, Some(max - width))?;
            }
            None => width += element_width(child, None)?,
        }
        width += child.tail_str().map_or(0, text_width);
    }

    Ok(clamp(width, max_width))
}

/// Width of a string in cells.
pub fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Longest prefix of `s` that fits in `max_width` cells.
pub fn clip(s: &str, max_width: Option<usize>) -> &str {
    let Some(max) = max_width else {
        return s;
    };
    let mut used = 0;
    for (index, ch) in s.char_indices() {
        used += char_width(ch);
        if used > max {
            return &s[..index];
        }
    }
    s
}

/// Cells left in a budget after `used` cells.
pub fn remaining(max_width: Option<usize>, used: usize) -> Option<usize> {
    max_width.map(|max| max.saturating_sub(used))
}

fn clamp(width: usize, max_width: Option<usize>) -> usize {
    max_width.map_or(width, |max| width.min(max))
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ElementKind;

    fn span(text: &str) -> Element {
        Element::new(ElementKind::Span).text(text)
    }

    #[test]
    fn test_fixed_width_precedence() {
        let fixed = span("hi").attr("width", "10");
        assert_eq!(element_width(&fixed, Some(20)).unwrap(), 10);
        assert_eq!(element_width(&fixed, Some(5)).unwrap(), 5);
        assert_eq!(element_width(&fixed, None).unwrap(), 10);
    }

    #[test]
    fn test_fixed_width_on_styled_element() {
        let bold = Element::new(ElementKind::Bold)
            .text("a much longer label")
            .attr("width", "6");
        assert_eq!(element_width(&bold, None).unwrap(), 6);
        assert_eq!(element_width(&bold, Some(4)).unwrap(), 4);
    }

    #[test]
    fn test_content_width() {
        let bold = Element::new(ElementKind::Bold)
            .text("ab")
            .child(span("").attr("width", "4").tail("cdef"));
        assert_eq!(element_width(&bold, None).unwrap(), 10);
        assert_eq!(element_width(&bold, Some(8)).unwrap(), 8);
        assert_eq!(element_width(&bold, Some(3)).unwrap(), 3);
    }

    #[test]
    fn test_short_circuit_when_budget_spent() {
        // Text alone fills the budget, so the unknown child is never reached.
        let line = Element::new(ElementKind::Line)
            .text("12345")
            .child(Element::from_tag("unknown-tag"));
        assert_eq!(content_width(&line, Some(5)).unwrap(), 5);
        assert!(content_width(&line, None).is_err());
    }

    #[test]
    fn test_width_never_exceeds_budget() {
        let cases = [
            span("hello world"),
            span("hi").attr("width", "30"),
            Element::new(ElementKind::Inverse)
                .text("x")
                .child(span("yy").tail("zzz"))
                .child(Element::new(ElementKind::Bold).text("wwww").tail("!")),
            Element::new(ElementKind::Highlighted),
        ];
        for element in &cases {
            for budget in 0..16 {
                let width = element_width(element, Some(budget)).unwrap();
                assert!(width <= budget, "{:?} budget {}", element, budget);
            }
        }
    }

    #[test]
    fn test_unknown_element_fails() {
        let unknown = Element::from_tag("unknown-tag").text("x");
        assert!(matches!(
            element_width(&unknown, Some(10)),
            Err(LineModeError::UnknownElement(tag)) if tag == "unknown-tag"
        ));

        let nested = Element::new(ElementKind::Bold).child(Element::from_tag("unknown-tag"));
        assert!(matches!(
            element_width(&nested, None),
            Err(LineModeError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_block_element_is_not_inline() {
        let line = Element::new(ElementKind::Line).text("x");
        assert!(matches!(
            element_width(&line, None),
            Err(LineModeError::NotInline { .. })
        ));
    }

    #[test]
    fn test_invalid_width_fails() {
        let bad = span("x").attr("width", "ten");
        assert!(matches!(
            element_width(&bad, None),
            Err(LineModeError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_text_width_counts_cells() {
        assert_eq!(text_width("Total"), 5);
        assert_eq!(text_width("日本"), 4);
        assert_eq!(text_width("e\u{301}"), 1);
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("Hello", None), "Hello");
        assert_eq!(clip("Hello", Some(3)), "Hel");
        assert_eq!(clip("Hello", Some(0)), "");
        assert_eq!(clip("Hi", Some(10)), "Hi");
        // a wide character that does not fit is dropped whole
        assert_eq!(clip("a日本", Some(2)), "a");
    }
}
