//! # Linemode - Receipt Markup Renderer
//!
//! Linemode renders a small inline markup language into printer commands
//! for line-oriented thermal receipt printers. It provides:
//!
//! - **Markup**: parsing and whitespace normalization of the element tree
//! - **Rendering**: width-aware conversion of the tree to a lazy command stream
//! - **IR**: the command vocabulary, an optimizer, and a terminal preview
//! - **Protocol**: StarPRNT bytes for the commands and declared charsets
//!
//! ## Quick Start
//!
//! ```
//! use linemode::{Command, LineModeRenderer, RenderOptions};
//!
//! let source = r#"
//!     <document charset="ascii">
//!         <line>
//!             <bold>Total</bold>: 5
//!         </line>
//!     </document>
//! "#;
//!
//! let renderer = LineModeRenderer::new(source, RenderOptions::default().max_width(Some(48)));
//!
//! // Commands are produced one at a time
//! for command in renderer.render()? {
//!     println!("{}", command?);
//! }
//!
//! // Or collected and compiled for the printer
//! let bytes = renderer.render_job()?.to_bytes()?;
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! # Ok::<(), linemode::LineModeError>(())
//! ```
//!
//! ## Markup
//!
//! ```text
//! <document charset="...">        root, one child per printed line
//!   <line>                        a printed line
//!     <span width="N">            plain run, optional fixed width
//!     <bold> <highlighted> <inverse>
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`markup`] | Element tree, parser, normalizer |
//! | [`render`] | Width calculation and command rendering |
//! | [`ir`] | Commands, print jobs, optimizer, codegen |
//! | [`protocol`] | StarPRNT command builders and charsets |
//! | [`error`] | Error types |

pub mod error;
pub mod ir;
pub mod markup;
pub mod protocol;
pub mod render;

// Re-exports for convenience
pub use error::LineModeError;
pub use ir::{Command, PrintJob};
pub use render::{Commands, LineModeRenderer, RenderOptions};
