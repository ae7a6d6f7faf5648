//! Whitespace normalization.
//!
//! Receipt markup is usually indented for editing. This pass makes
//! pretty-printed markup print the same as minified markup:
//!
//! 1. Whitespace right after an opening tag and right before a closing tag
//!    is stripped.
//! 2. Every remaining run of whitespace becomes a single space.
//! 3. Values left empty become `None`.
//!
//! Use a fixed-width `<span>` to get more than one space on paper.

use super::Element;

/// Normalize whitespace in the whole tree, in place.
pub fn normalize(root: &mut Element) {
    strip_outer_whitespace(root);
    compress_whitespace(root);
}

fn strip_outer_whitespace(element: &mut Element) {
    // With children, whitespace before the closing tag lives in the last
    // child's tail, so only the leading edge of `text` is stripped here.
    let has_children = !element.children.is_empty();
    if let Some(text) = element.text.take() {
        let stripped = if has_children {
            text.trim_start()
        } else {
            text.trim()
        };
        element.text = non_empty(stripped);
    }

    let last = element.children.len().saturating_sub(1);
    for (index, child) in element.children.iter_mut().enumerate() {
        if index == last {
            if let Some(tail) = child.tail.take() {
                child.tail = non_empty(tail.trim_end());
            }
        }
        strip_outer_whitespace(child);
    }
}

fn compress_whitespace(element: &mut Element) {
    element.text = element.text.take().and_then(|t| non_empty(&collapse(&t)));
    element.tail = element.tail.take().and_then(|t| non_empty(&collapse(&t)));
    for child in &mut element.children {
        compress_whitespace(child);
    }
}

/// Replace each run of whitespace with one space.
fn collapse(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
