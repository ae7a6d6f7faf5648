//! # Printer Commands
//!
//! The command vocabulary produced by the renderer.
//!
//! ## Design Philosophy
//!
//! Commands are abstract: they say *what* the printer should do, not which
//! bytes do it. Styles come as enter/exit pairs so that a sink can track
//! them as a stack:
//!
//! ```text
//! <bold><bold>x</bold></bold>
//!
//! select-bold
//!   select-bold
//!     write "x"
//!   cancel-bold
//! cancel-bold
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A text style that is entered and exited in pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Inverse,
    Highlight,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Bold, Style::Inverse, Style::Highlight];

    /// The command that enters this style.
    pub fn select(self) -> Command {
        match self {
            Style::Bold => Command::SelectBold,
            Style::Inverse => Command::SelectInverse,
            Style::Highlight => Command::SelectHighlight,
        }
    }

    /// The command that exits this style.
    pub fn cancel(self) -> Command {
        match self {
            Style::Bold => Command::CancelBold,
            Style::Inverse => Command::CancelInverse,
            Style::Highlight => Command::CancelHighlight,
        }
    }
}

/// A single printer command.
///
/// Serialized with kebab-case tags: `{"op":"select-bold"}`,
/// `{"op":"write","arg":"Total"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "kebab-case")]
pub enum Command {
    // ========== Printer Control ==========
    /// Reset the printer to its power-on state.
    Reset,

    /// Declare the character set of subsequent text.
    SetCharset(String),

    // ========== Content ==========
    /// Literal text. A lone `"\n"` ends the current line.
    Write(String),

    // ========== Style Pairs ==========
    SelectBold,
    CancelBold,
    SelectInverse,
    CancelInverse,
    SelectHighlight,
    CancelHighlight,
}

impl Command {
    /// The style this command enters or exits, with `true` for enter.
    pub fn style(&self) -> Option<(Style, bool)> {
        match self {
            Command::SelectBold => Some((Style::Bold, true)),
            Command::CancelBold => Some((Style::Bold, false)),
            Command::SelectInverse => Some((Style::Inverse, true)),
            Command::CancelInverse => Some((Style::Inverse, false)),
            Command::SelectHighlight => Some((Style::Highlight, true)),
            Command::CancelHighlight => Some((Style::Highlight, false)),
            Command::Reset | Command::SetCharset(_) | Command::Write(_) => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Reset => write!(f, "reset"),
            Command::SetCharset(name) => write!(f, "set-charset {:?}", name),
            Command::Write(text) => write!(f, "write {:?}", text),
            Command::SelectBold => write!(f, "select-bold"),
            Command::CancelBold => write!(f, "cancel-bold"),
            Command::SelectInverse => write!(f, "select-inverse"),
            Command::CancelInverse => write!(f, "cancel-inverse"),
            Command::SelectHighlight => write!(f, "select-highlight"),
            Command::CancelHighlight => write!(f, "cancel-highlight"),
        }
    }
}

/// A fully collected print job.
///
/// Rendering is lazy; collect into a job to inspect, optimize or compile
/// the whole command stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrintJob {
    pub commands: Vec<Command>,
}

impl PrintJob {
    /// Create an empty job.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the job.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Add multiple commands to the job.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    /// Get the number of commands in the job.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the job is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over commands.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

impl FromIterator<Command> for PrintJob {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PrintJob {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrintJob {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Tracks style nesting depth so that only the outermost enter and exit
/// of a style reach the sink.
#[derive(Debug, Clone, Default)]
pub(crate) struct StyleDepth {
    bold: usize,
    inverse: usize,
    highlight: usize,
}

impl StyleDepth {
    fn slot(&mut self, style: Style) -> &mut usize {
        match style {
            Style::Bold => &mut self.bold,
            Style::Inverse => &mut self.inverse,
            Style::Highlight => &mut self.highlight,
        }
    }

    /// Apply an enter/exit. Returns `true` when the visible state changes.
    pub(crate) fn apply(&mut self, style: Style, enter: bool) -> bool {
        let depth = self.slot(style);
        if enter {
            *depth += 1;
            *depth == 1
        } else if *depth > 0 {
            *depth -= 1;
            *depth == 0
        } else {
            false
        }
    }

    pub(crate) fn is_active(&self, style: Style) -> bool {
        match style {
            Style::Bold => self.bold > 0,
            Style::Inverse => self.inverse > 0,
            Style::Highlight => self.highlight > 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
