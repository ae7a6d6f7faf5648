//! # StarPRNT Protocol Implementation
//!
//! Low-level command builders for the StarPRNT protocol used by Star
//! Micronics thermal receipt printers, limited to what line-mode
//! rendering emits.
//!
//! ## Module Structure
//!
//! - [`commands`]: Escape constants and printer control (init, line feed)
//! - [`text`]: Text styling (bold, invert, underline) and code pages
//! - [`charset`]: Declared charset names to code pages and text bytes
//!
//! ## Usage Example
//!
//! ```
//! use linemode::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT");
//! data.extend(text::bold_off());
//! data.extend(commands::line_feed());
//! ```

pub mod charset;
pub mod commands;
pub mod text;
