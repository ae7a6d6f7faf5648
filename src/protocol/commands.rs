//! # StarPRNT Control Commands
//!
//! Escape-sequence constants and printer control commands.
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `LF`
//! - Two bytes: `ESC @`, `ESC E`, `ESC F`
//! - With parameters: `ESC - n`, `ESC GS t n`
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix, used after ESC
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state: clears the line
/// buffer, turns every text style off and restores the default code page.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use linemode::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Line feed (LF)
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_line_feed() {
        assert_eq!(line_feed(), vec![0x0A]);
    }
}
