//! # Charset Encoding
//!
//! Maps a document's declared charset name to the printer code page and
//! the byte encoding used for text.
//!
//! | Declared | Code page command | Text bytes |
//! |----------|-------------------|------------|
//! | `ascii`, `us-ascii` | none | ASCII, others become `?` |
//! | `utf-8` | none | UTF-8 as-is (printer must be in UTF-8 mode) |
//! | `windows-1252`, `latin1`, ... | CP1252 | Windows-1252 |
//! | `ibm866`, `cp866` | CP866 | IBM866 |
//!
//! Labels are resolved with `encoding_rs`, so every WHATWG alias of the
//! encodings above is accepted.

use encoding_rs::{Encoding, IBM866, UTF_8, WINDOWS_1252};

use super::text::{CodePage, codepage};
use crate::error::LineModeError;

/// Text encoding selected by a `set-charset` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Charset {
    Ascii,
    Utf8,
    SingleByte {
        encoding: &'static Encoding,
        codepage: CodePage,
    },
}

impl Charset {
    /// Resolve a declared charset name.
    pub fn resolve(name: &str) -> Result<Self, LineModeError> {
        let label = name.trim().to_ascii_lowercase();
        if matches!(label.as_str(), "ascii" | "us-ascii") {
            return Ok(Charset::Ascii);
        }

        let unsupported = || LineModeError::UnsupportedCharset(name.to_string());
        let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(unsupported)?;
        if encoding == UTF_8 {
            Ok(Charset::Utf8)
        } else if encoding == WINDOWS_1252 {
            Ok(Charset::SingleByte {
                encoding,
                codepage: CodePage::Cp1252,
            })
        } else if encoding == IBM866 {
            Ok(Charset::SingleByte {
                encoding,
                codepage: CodePage::Cp866,
            })
        } else {
            Err(unsupported())
        }
    }

    /// Bytes that switch the printer to this charset.
    pub fn select(&self) -> Vec<u8> {
        match self {
            Charset::Ascii | Charset::Utf8 => Vec::new(),
            Charset::SingleByte { codepage: cp, .. } => codepage(*cp),
        }
    }

    /// Encode text. Characters the charset cannot represent become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::Ascii => text
                .chars()
                .map(|ch| {
                    if ch.is_ascii() {
                        ch as u8
                    } else {
                        unmapped(ch, "ascii");
                        b'?'
                    }
                })
                .collect(),
            Charset::SingleByte { encoding, .. } => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if !had_errors {
                    return bytes.into_owned();
                }
                // encoding_rs substitutes numeric character references;
                // redo per character so gaps become a single `?`.
                let mut out = Vec::with_capacity(text.len());
                let mut buf = [0u8; 4];
                for ch in text.chars() {
                    let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut buf));
                    if had_errors {
                        unmapped(ch, encoding.name());
                        out.push(b'?');
                    } else {
                        out.extend_from_slice(&bytes);
                    }
                }
                out
            }
        }
    }
}

fn unmapped(ch: char, charset: &str) {
    log::warn!(
        "{}: unmapped character '{}' (U+{:04X}), replacing with '?'",
        charset,
        ch,
        ch as u32
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Charset::resolve("ascii").unwrap(), Charset::Ascii);
        assert_eq!(Charset::resolve("US-ASCII").unwrap(), Charset::Ascii);
        assert_eq!(Charset::resolve("utf-8").unwrap(), Charset::Utf8);
        assert_eq!(Charset::resolve("UTF8").unwrap(), Charset::Utf8);
        assert!(matches!(
            Charset::resolve("latin1").unwrap(),
            Charset::SingleByte {
                codepage: CodePage::Cp1252,
                ..
            }
        ));
        assert!(matches!(
            Charset::resolve("cp866").unwrap(),
            Charset::SingleByte {
                codepage: CodePage::Cp866,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_unsupported() {
        assert!(matches!(
            Charset::resolve("klingon"),
            Err(LineModeError::UnsupportedCharset(name)) if name == "klingon"
        ));
        assert!(Charset::resolve("shift_jis").is_err());
    }

    #[test]
    fn test_select() {
        assert!(Charset::Ascii.select().is_empty());
        assert!(Charset::Utf8.select().is_empty());
        let latin = Charset::resolve("windows-1252").unwrap();
        assert_eq!(latin.select(), vec![0x1B, 0x1D, 0x74, 0x20]);
    }

    #[test]
    fn test_encode_ascii() {
        assert_eq!(Charset::Ascii.encode("Total"), b"Total".to_vec());
        assert_eq!(Charset::Ascii.encode("café"), b"caf?".to_vec());
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(Charset::Utf8.encode("café"), "café".as_bytes().to_vec());
    }

    #[test]
    fn test_encode_single_byte() {
        let latin = Charset::resolve("windows-1252").unwrap();
        assert_eq!(latin.encode("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(latin.encode("€5"), vec![0x80, b'5']);
        assert_eq!(latin.encode("a日b"), b"a?b".to_vec());
    }
}
