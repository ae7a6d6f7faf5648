//! # Line-Mode Markup Tree
//!
//! The element tree that the renderer walks. A tree is built fresh from
//! markup for every render call, normalized once in place, then consumed.
//!
//! ## Vocabulary
//!
//! | Tag | Kind | Attributes |
//! |-----|------|------------|
//! | `<document>` | root | `charset` (default `ascii`) |
//! | `<line>` | one printed line | |
//! | `<span>` | plain inline run | `width`, `align` |
//! | `<bold>` | emphasized run | `width` |
//! | `<highlighted>` | highlighted run | `width` |
//! | `<inverse>` | white-on-black run | `width` |
//!
//! ## Text and Tail
//!
//! Text follows the usual markup-tree convention: `text` is what precedes
//! the first child, `tail` is what follows an element's closing tag up to
//! the next sibling (and belongs to the parent's content).
//!
//! ```text
//! <line>Sub<bold>total</bold>: 5</line>
//!
//! line.text            = "Sub"
//! line.children[0]     = bold (text = "total", tail = ": 5")
//! ```

mod normalize;
mod parse;

pub use normalize::normalize;
pub use parse::{MAX_DEPTH, parse};

use crate::error::LineModeError;
use std::collections::BTreeMap;

/// Charset assumed when `<document>` does not declare one.
pub const DEFAULT_CHARSET: &str = "ascii";

/// The kind of an element, derived from its tag name.
///
/// Tags outside the vocabulary are kept as [`ElementKind::Unknown`] so the
/// renderer can fail on them when they are reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Document,
    Line,
    Span,
    Bold,
    Highlighted,
    Inverse,
    Unknown(String),
}

impl ElementKind {
    /// Map a tag name to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "document" => Self::Document,
            "line" => Self::Line,
            "span" => Self::Span,
            "bold" => Self::Bold,
            "highlighted" => Self::Highlighted,
            "inverse" => Self::Inverse,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The tag name for this kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::Document => "document",
            Self::Line => "line",
            Self::Span => "span",
            Self::Bold => "bold",
            Self::Highlighted => "highlighted",
            Self::Inverse => "inverse",
            Self::Unknown(tag) => tag,
        }
    }

    /// Check that this kind may appear inside a line.
    pub fn expect_inline(&self) -> Result<(), LineModeError> {
        match self {
            Self::Span | Self::Bold | Self::Highlighted | Self::Inverse => Ok(()),
            Self::Document | Self::Line => Err(LineModeError::NotInline {
                tag: self.tag().to_string(),
            }),
            Self::Unknown(tag) => Err(LineModeError::UnknownElement(tag.clone())),
        }
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// Text before the first child. `None` and `Some("")` are distinct until
    /// normalization, which turns every empty value into `None`.
    pub text: Option<String>,
    /// Text after this element's closing tag, owned by the parent's content.
    pub tail: Option<String>,
    pub children: Vec<Element>,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    /// Create an empty element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            text: None,
            tail: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Create an empty element from a tag name.
    pub fn from_tag(tag: &str) -> Self {
        Self::new(ElementKind::from_tag(tag))
    }

    /// Set the leading text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the tail text.
    pub fn tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn tag(&self) -> &str {
        self.kind.tag()
    }

    pub fn text_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn tail_str(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The declared fixed width in cells, if any.
    ///
    /// Fails with [`LineModeError::InvalidWidth`] when the attribute is
    /// present but not a non-negative integer.
    pub fn fixed_width(&self) -> Result<Option<usize>, LineModeError> {
        let Some(value) = self.attribute("width") else {
            return Ok(None);
        };
        value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| LineModeError::InvalidWidth {
                tag: self.tag().to_string(),
                value: value.to_string(),
            })
    }

    /// The declared charset, falling back to [`DEFAULT_CHARSET`].
    pub fn charset(&self) -> &str {
        self.attribute("charset").unwrap_or(DEFAULT_CHARSET)
    }
}
