//! # StarPRNT Text Styling Commands
//!
//! The style and code page commands the line-mode renderer needs.
//!
//! | Style | Command | Markup |
//! |-------|---------|--------|
//! | Bold | ESC E / ESC F | `<bold>` |
//! | Invert | ESC 4 / ESC 5 | `<inverse>` |
//! | Underline | ESC - 1 / ESC - 0 | `<highlighted>` |
//! | Code page | ESC GS t n | `<document charset="...">` |

use super::commands::{ESC, GS};

// ============================================================================
// BOLD
// ============================================================================

/// # Enable Bold/Emphasis (ESC E)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E |
/// | Hex     | 1B 45 |
///
/// ## Example
///
/// ```
/// use linemode::protocol::text::{bold_on, bold_off};
///
/// let mut data = Vec::new();
/// data.extend(bold_on());
/// data.extend(b"TOTAL");
/// data.extend(bold_off());
/// ```
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Disable Bold/Emphasis (ESC F)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

// ============================================================================
// INVERT
// ============================================================================

/// # Enable Inverted Printing (ESC 4)
///
/// White text on a black background. Uses noticeably more paper coating,
/// so keep inverted runs short.
#[inline]
pub fn invert_on() -> Vec<u8> {
    vec![ESC, b'4']
}

/// # Disable Inverted Printing (ESC 5)
#[inline]
pub fn invert_off() -> Vec<u8> {
    vec![ESC, b'5']
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// # Enable Underline (ESC - 1)
///
/// Used for highlighted runs; single-color printers have no other way to
/// mark text without inverting it.
#[inline]
pub fn underline_on() -> Vec<u8> {
    vec![ESC, b'-', 0x01]
}

/// # Disable Underline (ESC - 0)
#[inline]
pub fn underline_off() -> Vec<u8> {
    vec![ESC, b'-', 0x00]
}

// ============================================================================
// CODE PAGE
// ============================================================================

/// Code pages reachable from a declared charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CodePage {
    /// Code Page 866 (Cyrillic)
    Cp866 = 9,
    /// Code Page 1252 (Windows Latin-1)
    Cp1252 = 32,
}

/// # Set Code Page (ESC GS t n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS t n |
/// | Hex     | 1B 1D 74 n |
///
/// ```
/// use linemode::protocol::text::{codepage, CodePage};
///
/// assert_eq!(codepage(CodePage::Cp1252), vec![0x1B, 0x1D, 0x74, 0x20]);
/// ```
pub fn codepage(cp: CodePage) -> Vec<u8> {
    vec![ESC, GS, b't', cp as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45]);
        assert_eq!(bold_off(), vec![0x1B, 0x46]);
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert_on(), vec![0x1B, 0x34]);
        assert_eq!(invert_off(), vec![0x1B, 0x35]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline_on(), vec![0x1B, 0x2D, 0x01]);
        assert_eq!(underline_off(), vec![0x1B, 0x2D, 0x00]);
    }

    #[test]
    fn test_codepage() {
        assert_eq!(codepage(CodePage::Cp866), vec![0x1B, 0x1D, 0x74, 0x09]);
        assert_eq!(codepage(CodePage::Cp1252), vec![0x1B, 0x1D, 0x74, 0x20]);
    }
}
