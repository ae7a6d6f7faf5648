//! # Printer Command Stream
//!
//! The renderer's output: an ordered stream of abstract printer commands,
//! optionally collected into a [`PrintJob`].
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌───────────┐     ┌───────────────┐
//! │  Markup  │ ──► │ Commands │ ──► │ Optimizer │ ──► │ Codegen/ANSI  │
//! │  (tree)  │     │  (lazy)  │     │ (opt-in)  │     │ (bytes/text)  │
//! └──────────┘     └──────────┘     └───────────┘     └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use linemode::ir::{Command, PrintJob};
//!
//! let mut job = PrintJob::new();
//! job.push(Command::Reset);
//! job.push(Command::SelectBold);
//! job.push(Command::Write("TOTAL".into()));
//! job.push(Command::CancelBold);
//! job.push(Command::Write("\n".into()));
//!
//! let bytes = job.optimize().to_bytes().unwrap();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod codegen;
mod ops;
mod optimize;
mod preview;

// codegen, optimize and preview add methods to PrintJob via impl
pub use ops::*;
