//! # Code Generation
//!
//! Converts print jobs to StarPRNT protocol bytes.
//!
//! Style commands are tracked by nesting depth. StarPRNT styles are plain
//! on/off switches, so only the outermost enter and exit of each style is
//! sent; an inner `cancel-bold` would otherwise end the outer bold run.
//! Newlines in text are sent as `LF` whatever the charset.

use super::ops::{Command, PrintJob, Style, StyleDepth};
use crate::error::LineModeError;
use crate::protocol::charset::Charset;
use crate::protocol::{commands, text};

impl PrintJob {
    /// Compile the job to StarPRNT bytes.
    ///
    /// Text is encoded with the charset of the most recent `set-charset`
    /// (ASCII before the first one). Fails if a declared charset has no
    /// printer encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LineModeError> {
        let mut out = Vec::new();
        let mut charset = Charset::Ascii;
        let mut depth = StyleDepth::default();

        for command in &self.commands {
            match command {
                // ===== Printer Control =====
                Command::Reset => {
                    out.extend(commands::init());
                    charset = Charset::Ascii;
                    depth.clear();
                }
                Command::SetCharset(name) => {
                    charset = Charset::resolve(name)?;
                    out.extend(charset.select());
                }

                // ===== Content =====
                Command::Write(s) => {
                    for (index, part) in s.split('\n').enumerate() {
                        if index > 0 {
                            out.extend(commands::line_feed());
                        }
                        out.extend(charset.encode(part));
                    }
                }

                // ===== Style Changes =====
                Command::SelectBold
                | Command::CancelBold
                | Command::SelectInverse
                | Command::CancelInverse
                | Command::SelectHighlight
                | Command::CancelHighlight => {
                    if let Some((style, enter)) = command.style() {
                        if depth.apply(style, enter) {
                            out.extend(style_bytes(style, enter));
                        }
                    }
                }
            }
        }

        Ok(out)
    }
}

fn style_bytes(style: Style, enter: bool) -> Vec<u8> {
    match (style, enter) {
        (Style::Bold, true) => text::bold_on(),
        (Style::Bold, false) => text::bold_off(),
        (Style::Inverse, true) => text::invert_on(),
        (Style::Inverse, false) => text::invert_off(),
        (Style::Highlight, true) => text::underline_on(),
        (Style::Highlight, false) => text::underline_off(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(commands: Vec<Command>) -> PrintJob {
        commands.into_iter().collect()
    }

    #[test]
    fn test_prelude_and_text() {
        let bytes = job(vec![
            Command::Reset,
            Command::SetCharset("ascii".into()),
            Command::Write("Hi".into()),
            Command::Write("\n".into()),
        ])
        .to_bytes()
        .unwrap();
        assert_eq!(bytes, vec![0x1B, 0x40, b'H', b'i', 0x0A]);
    }

    #[test]
    fn test_embedded_newlines_are_line_feeds() {
        let bytes = job(vec![
            Command::SetCharset("utf-8".into()),
            Command::Write("a\nb\n".into()),
        ])
        .to_bytes()
        .unwrap();
        assert_eq!(bytes, vec![b'a', commands::LF, b'b', commands::LF]);
    }

    #[test]
    fn test_styles() {
        let bytes = job(vec![
            Command::SelectBold,
            Command::Write("a".into()),
            Command::CancelBold,
            Command::SelectInverse,
            Command::CancelInverse,
            Command::SelectHighlight,
            Command::CancelHighlight,
        ])
        .to_bytes()
        .unwrap();
        assert_eq!(
            bytes,
            vec![
                0x1B, 0x45, b'a', 0x1B, 0x46, // bold
                0x1B, 0x34, 0x1B, 0x35, // invert
                0x1B, 0x2D, 0x01, 0x1B, 0x2D, 0x00, // underline
            ]
        );
    }

    #[test]
    fn test_nested_bold_sends_outer_pair_only() {
        let bytes = job(vec![
            Command::SelectBold,
            Command::SelectBold,
            Command::Write("x".into()),
            Command::CancelBold,
            Command::Write("y".into()),
            Command::CancelBold,
        ])
        .to_bytes()
        .unwrap();
        assert_eq!(bytes, vec![0x1B, 0x45, b'x', b'y', 0x1B, 0x46]);
    }

    #[test]
    fn test_charset_switches_encoding() {
        let bytes = job(vec![
            Command::SetCharset("windows-1252".into()),
            Command::Write("é".into()),
        ])
        .to_bytes()
        .unwrap();
        assert_eq!(bytes, vec![0x1B, 0x1D, 0x74, 0x20, 0xE9]);
    }

    #[test]
    fn test_unsupported_charset() {
        let result = job(vec![Command::SetCharset("klingon".into())]).to_bytes();
        assert!(matches!(result, Err(LineModeError::UnsupportedCharset(_))));
    }
}
