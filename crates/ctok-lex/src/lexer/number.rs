//! Numeric constant lexing.
//!
//! A constant is scanned into a classification buffer (digit separators
//! stripped), its base and float-ness detected along the way, then the
//! suffix decides the token kind. Integer constants serialize as 4 or 8
//! little-endian bytes depending on the selected width; floating
//! constants as IEEE-754 of the suffix's width.

use ctok_util::{Error, Result};

use crate::tokens;
use crate::Lexer;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Base {
    Decimal,
    Hex,
    Octal,
    Binary,
}

impl<'a> Lexer<'a> {
    /// Lexes an integer or floating constant starting at a digit.
    pub(crate) fn lex_number(&mut self) -> Result<()> {
        let (base, digits, is_float) = self.scan_constant();
        if is_float {
            self.push_float_constant(&digits, base)
        } else {
            self.push_integer_constant(&digits, base)
        }
    }

    /// Scans the constant's digits into a buffer, stripping `'`
    /// separators and noting anything that makes it floating.
    fn scan_constant(&mut self) -> (Base, String, bool) {
        let mut digits = String::new();
        let mut is_float = false;

        let base = if self.cursor.current() == b'0' && matches!(self.cursor.peek(1), b'x' | b'X') {
            self.cursor.advance_by(2);
            loop {
                let byte = self.cursor.current();
                if byte.is_ascii_hexdigit() || matches!(byte, b'.' | b'\'' | b'p' | b'P') {
                    if matches!(byte, b'.' | b'p' | b'P') {
                        is_float = true;
                    }
                    if byte != b'\'' {
                        digits.push(char::from(byte));
                    }
                    self.cursor.advance();
                } else if byte == b'+' && matches!(digits.bytes().last(), Some(b'p' | b'P')) {
                    digits.push('+');
                    self.cursor.advance();
                } else {
                    break;
                }
            }
            Base::Hex
        } else if self.cursor.current() == b'0' && matches!(self.cursor.peek(1), b'b' | b'B') {
            self.cursor.advance_by(2);
            while matches!(self.cursor.current(), b'0'..=b'9' | b'\'') {
                if self.cursor.current() != b'\'' {
                    digits.push(char::from(self.cursor.current()));
                }
                self.cursor.advance();
            }
            Base::Binary
        } else if self.cursor.current() == b'0' {
            // Floats are only decimal or hexadecimal, so a leading zero
            // always classifies as an octal integer.
            while matches!(self.cursor.current(), b'0'..=b'9' | b'\'') {
                if self.cursor.current() != b'\'' {
                    digits.push(char::from(self.cursor.current()));
                }
                self.cursor.advance();
            }
            Base::Octal
        } else {
            loop {
                let byte = self.cursor.current();
                if byte.is_ascii_digit() || matches!(byte, b'.' | b'\'' | b'e' | b'E' | b'p' | b'P')
                {
                    if matches!(byte, b'.' | b'e' | b'E' | b'p' | b'P') {
                        is_float = true;
                    }
                    if byte != b'\'' {
                        digits.push(char::from(byte));
                    }
                    self.cursor.advance();
                } else if byte == b'+' && matches!(digits.bytes().last(), Some(b'e' | b'E')) {
                    digits.push('+');
                    self.cursor.advance();
                } else {
                    break;
                }
            }
            Base::Decimal
        };

        (base, digits, is_float)
    }

    /// Emits an integer constant, choosing the width from the suffix or,
    /// when unsuffixed, the smallest type the value fits.
    ///
    /// Non-decimal constants promote through the unsigned type of each
    /// width; decimal constants skip straight to the next signed width.
    fn push_integer_constant(&mut self, digits: &str, base: Base) -> Result<()> {
        let value = parse_integer(digits, base)?;
        let decimal = base == Base::Decimal;

        let byte = self.cursor.current();
        if byte == b'u' || byte == b'U' {
            if matches!(self.cursor.peek(1), b'l' | b'L') {
                if matches!(self.cursor.peek(2), b'l' | b'L') {
                    self.cursor.advance_by(3);
                    self.stream.push(tokens::UNSIGNED_LONG_LONG_INT_CONSTANT);
                    self.stream.push_bytes(&value.to_le_bytes());
                } else {
                    self.cursor.advance_by(2);
                    self.stream.push(tokens::UNSIGNED_LONG_INT_CONSTANT);
                    self.stream.push_bytes(&(value as u32).to_le_bytes());
                }
            } else {
                self.cursor.advance();
                if value <= u32::MAX as u64 {
                    self.stream.push(tokens::UNSIGNED_INT_CONSTANT);
                    self.stream.push_bytes(&(value as u32).to_le_bytes());
                } else {
                    self.stream.push(tokens::UNSIGNED_LONG_LONG_INT_CONSTANT);
                    self.stream.push_bytes(&value.to_le_bytes());
                }
            }
        } else if byte == b'l' || byte == b'L' {
            if matches!(self.cursor.peek(1), b'l' | b'L') {
                self.cursor.advance_by(2);
                if value <= i64::MAX as u64 || decimal {
                    self.stream.push(tokens::LONG_LONG_INT_CONSTANT);
                } else {
                    self.stream.push(tokens::UNSIGNED_LONG_LONG_INT_CONSTANT);
                }
                self.stream.push_bytes(&value.to_le_bytes());
            } else {
                self.cursor.advance();
                if value <= i32::MAX as u64 || decimal {
                    self.stream.push(tokens::LONG_INT_CONSTANT);
                } else {
                    self.stream.push(tokens::UNSIGNED_LONG_INT_CONSTANT);
                }
                self.stream.push_bytes(&(value as u32).to_le_bytes());
            }
        } else if value <= i32::MAX as u64 {
            self.stream.push(tokens::INT_CONSTANT);
            self.stream.push_bytes(&(value as u32).to_le_bytes());
        } else if value <= u32::MAX as u64 && !decimal {
            self.stream.push(tokens::UNSIGNED_INT_CONSTANT);
            self.stream.push_bytes(&(value as u32).to_le_bytes());
        } else if value <= i64::MAX as u64 {
            self.stream.push(tokens::LONG_LONG_INT_CONSTANT);
            self.stream.push_bytes(&value.to_le_bytes());
        } else {
            self.stream.push(tokens::UNSIGNED_LONG_LONG_INT_CONSTANT);
            self.stream.push_bytes(&value.to_le_bytes());
        }
        Ok(())
    }

    /// Emits a floating constant according to its suffix.
    fn push_float_constant(&mut self, digits: &str, base: Base) -> Result<()> {
        let value = match base {
            Base::Hex => parse_hex_float(digits),
            _ => parse_decimal_float(digits),
        }
        .ok_or_else(|| Error::InvalidConstant {
            text: digits.to_string(),
        })?;

        match self.cursor.current() {
            b'f' | b'F' => {
                self.cursor.advance();
                self.stream.push(tokens::FLOAT_CONSTANT);
                self.stream.push_bytes(&(value as f32).to_le_bytes());
            }
            b'l' | b'L' => {
                self.cursor.advance();
                self.stream.push(tokens::LONG_DOUBLE_CONSTANT);
                let mut bytes = [0u8; 16];
                bytes[..8].copy_from_slice(&value.to_le_bytes());
                self.stream.push_bytes(&bytes);
            }
            b'd' | b'D' => {
                return match self.cursor.peek(1) {
                    b'f' | b'F' | b'd' | b'D' | b'l' | b'L' => Err(Error::DecimalFloatUnsupported),
                    _ => Err(Error::InvalidConstant {
                        text: digits.to_string(),
                    }),
                };
            }
            _ => {
                self.stream.push(tokens::DOUBLE_CONSTANT);
                self.stream.push_bytes(&value.to_le_bytes());
            }
        }
        Ok(())
    }
}

/// Parses the buffered digits as an integer of the scanned base.
fn parse_integer(digits: &str, base: Base) -> Result<u64> {
    // "0x" with nothing usable after it scans no digits; the constant is
    // the leading zero.
    if digits.is_empty() {
        return Ok(0);
    }
    let radix = match base {
        Base::Decimal => 10,
        Base::Hex => 16,
        Base::Octal => 8,
        Base::Binary => 2,
    };
    u64::from_str_radix(digits, radix).map_err(|_| Error::InvalidConstant {
        text: digits.to_string(),
    })
}

/// Parses the longest prefix of the buffer that forms a decimal float.
///
/// The scan is greedier than the grammar (`1e` scans but only `1` is a
/// float), so parsing backs off from the end until something parses.
fn parse_decimal_float(digits: &str) -> Option<f64> {
    let mut text = digits;
    while !text.is_empty() {
        if let Ok(value) = text.parse::<f64>() {
            return Some(value);
        }
        text = &text[..text.len() - 1];
    }
    None
}

/// Parses a hexadecimal floating constant: hex mantissa with optional
/// fraction, optional binary exponent after `p`/`P`.
fn parse_hex_float(digits: &str) -> Option<f64> {
    let (mantissa, exponent_text) = match digits.split_once(['p', 'P']) {
        Some((m, e)) => (m, Some(e)),
        None => (digits, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0.0f64;
    for c in int_part.chars() {
        value = value * 16.0 + c.to_digit(16)? as f64;
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_part.chars() {
        value += c.to_digit(16)? as f64 * scale;
        scale /= 16.0;
    }

    let exponent = match exponent_text {
        Some(text) => {
            let text = text.strip_prefix('+').unwrap_or(text);
            if text.is_empty() {
                0
            } else {
                text.parse::<i32>().ok()?
            }
        }
        None => 0,
    };

    Some(value * 2.0f64.powi(exponent))
}
