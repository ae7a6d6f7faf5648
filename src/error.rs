//! # Error Types
//!
//! This module defines error types used throughout the linemode library.

use thiserror::Error;

/// Main error type for linemode operations
#[derive(Debug, Error)]
pub enum LineModeError {
    /// Markup could not be parsed into an element tree
    #[error("Markup error: {0}")]
    Parse(String),

    /// Element tag outside the recognized vocabulary
    #[error("Unknown element <{0}>")]
    UnknownElement(String),

    /// The root element is not `<document>`
    #[error("Expected <document> as root element, found <{tag}>")]
    UnexpectedRoot { tag: String },

    /// A direct child of `<document>` that is not a `<line>`
    #[error("Expected <line> inside <document>, found <{tag}>")]
    ExpectedLine { tag: String },

    /// A block element (`document`, `line`) nested in inline content
    #[error("<{tag}> cannot appear inside a line")]
    NotInline { tag: String },

    /// A `width` attribute that is not a non-negative integer
    #[error("Invalid width {value:?} on <{tag}>")]
    InvalidWidth { tag: String, value: String },

    /// Declared charset has no printer encoding
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
