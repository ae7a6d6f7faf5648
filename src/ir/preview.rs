//! # Terminal Preview
//!
//! Renders a print job with ANSI escape codes so a receipt can be checked
//! in a terminal before it reaches paper.
//!
//! | Style | SGR |
//! |-------|-----|
//! | bold | 1 |
//! | highlight | 4 (underline) |
//! | inverse | 7 |

use super::ops::{Command, PrintJob, Style, StyleDepth};

impl PrintJob {
    /// Render the job as ANSI-styled text.
    ///
    /// `reset` and `set-charset` produce no output; styles follow the same
    /// nesting rules as the printer bytes.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        let mut depth = StyleDepth::default();

        for command in &self.commands {
            match command {
                Command::Reset => {
                    if Style::ALL.iter().any(|s| depth.is_active(*s)) {
                        out.push_str("\x1b[0m");
                    }
                    depth.clear();
                }
                Command::SetCharset(_) => {}
                Command::Write(text) => out.push_str(text),
                _ => {
                    if let Some((style, enter)) = command.style() {
                        if depth.apply(style, enter) {
                            out.push_str(&sgr(&depth));
                        }
                    }
                }
            }
        }

        if Style::ALL.iter().any(|s| depth.is_active(*s)) {
            out.push_str("\x1b[0m");
        }
        out
    }
}

/// Full SGR sequence for the active styles, starting from a reset.
fn sgr(depth: &StyleDepth) -> String {
    let mut codes = vec!["0"];
    if depth.is_active(Style::Bold) {
        codes.push("1");
    }
    if depth.is_active(Style::Highlight) {
        codes.push("4");
    }
    if depth.is_active(Style::Inverse) {
        codes.push("7");
    }
    format!("\x1b[{}m", codes.join(";"))
}
