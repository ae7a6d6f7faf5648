//! # Line-Mode Rendering
//!
//! Turns line-mode markup into a stream of printer commands.
//!
//! ## Pipeline
//!
//! ```text
//! source ──► parse ──► normalize ──► prelude ──► lines ──► Commands
//!                                    (reset,     (body +
//!                                     charset)    "\n")
//! ```
//!
//! Every call to [`LineModeRenderer::render`] parses the source again and
//! returns an independent stream; nothing is shared between calls.
//!
//! ## Example
//!
//! ```
//! use linemode::ir::Command;
//! use linemode::render::{LineModeRenderer, RenderOptions};
//!
//! let renderer = LineModeRenderer::new(
//!     "<document><line><bold>Total</bold>: 5</line></document>",
//!     RenderOptions::default().prelude(false),
//! );
//!
//! let job = renderer.render_job()?;
//! assert_eq!(job.commands[0], Command::SelectBold);
//! # Ok::<(), linemode::LineModeError>(())
//! ```

mod commands;
pub mod width;

pub use commands::{Commands, render_element};
pub use width::{content_width, element_width};

use serde::{Deserialize, Serialize};

use crate::error::LineModeError;
use crate::ir::PrintJob;
use crate::markup::{self, ElementKind};

/// Rendering options.
///
/// Deserializable from JSON; missing fields take their defaults:
///
/// ```json
/// { "max_width": 48, "prelude": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width budget in cells for every line. `None` is unbounded.
    pub max_width: Option<usize>,
    /// Emit `reset` and `set-charset` before the first line.
    pub prelude: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: None,
            prelude: true,
        }
    }
}

impl RenderOptions {
    pub fn max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn prelude(mut self, prelude: bool) -> Self {
        self.prelude = prelude;
        self
    }
}

/// Renders a line-mode markup document.
#[derive(Debug, Clone)]
pub struct LineModeRenderer {
    source: String,
    options: RenderOptions,
}

impl LineModeRenderer {
    pub fn new(source: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            source: source.into(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Parse, normalize and start rendering the document.
    ///
    /// Markup syntax errors and a root other than `<document>` fail here;
    /// errors deeper in the tree surface from the returned stream.
    pub fn render(&self) -> Result<Commands, LineModeError> {
        let mut root = markup::parse(&self.source)?;
        match &root.kind {
            ElementKind::Document => {}
            ElementKind::Unknown(tag) => return Err(LineModeError::UnknownElement(tag.clone())),
            other => {
                return Err(LineModeError::UnexpectedRoot {
                    tag: other.tag().to_string(),
                });
            }
        }

        markup::normalize(&mut root);
        log::debug!(
            "rendering {} lines (max width {:?}, prelude {})",
            root.children.len(),
            self.options.max_width,
            self.options.prelude
        );

        Ok(Commands::document(
            root,
            self.options.max_width,
            self.options.prelude,
        ))
    }

    /// Render the whole document into a [`PrintJob`].
    ///
    /// Fails on the first error; no partial job is returned.
    pub fn render_job(&self) -> Result<PrintJob, LineModeError> {
        self.render()?.collect()
    }
}
