//! String literal and character constant lexing.
//!
//! Literals are the one place escape sequences and multi-byte characters
//! are resolved during tokenization: the stream stores decoded code
//! points, one per word, and the reconstructor re-escapes them on the way
//! out. The `L`, `u`, `U` and `u8` prefixes select the sentinel and fall
//! back to identifier lexing when no quote follows.

use ctok_util::{Error, Result};

use crate::chars::decode_char_or_escape;
use crate::tokens::{self, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a character constant.
    ///
    /// # Arguments
    ///
    /// * `sentinel` - Constant kind implied by the prefix
    /// * `prefix_len` - Prefix bytes before the opening apostrophe
    pub(crate) fn lex_char_constant(&mut self, sentinel: Token, prefix_len: usize) -> Result<()> {
        self.cursor.advance_by(prefix_len + 1);

        let (code_point, next) = decode_char_or_escape(self.cursor.bytes(), self.cursor.pos())?;
        self.cursor.set_pos(next);

        self.stream.push(sentinel);
        self.stream.push(code_point);

        if !self.cursor.match_byte(b'\'') {
            return Err(Error::Unterminated {
                what: "character constant",
            });
        }
        Ok(())
    }

    /// Lexes a string literal.
    ///
    /// Emits the sentinel, a length placeholder, then one code point per
    /// character; the placeholder is back-patched with the count once the
    /// closing quote is found. Escapes are consumed atomically, so an
    /// escaped quote or backslash cannot terminate the literal early.
    pub(crate) fn lex_string_literal(&mut self, sentinel: Token, prefix_len: usize) -> Result<()> {
        self.cursor.advance_by(prefix_len + 1);

        self.stream.push(sentinel);
        let length_slot = self.stream.push(0);
        let mut length = 0u32;

        loop {
            if self.cursor.is_at_end() {
                return Err(Error::Unterminated {
                    what: "string literal",
                });
            }
            if self.cursor.current() == b'"' {
                self.cursor.advance();
                break;
            }
            let (code_point, next) = decode_char_or_escape(self.cursor.bytes(), self.cursor.pos())?;
            self.cursor.set_pos(next);
            self.stream.push(code_point);
            length += 1;
        }

        self.stream.patch(length_slot, length);
        Ok(())
    }

    /// Handles `L`: wide character constant, wide string, or identifier.
    pub(crate) fn lex_capital_l(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'\'' => self.lex_char_constant(tokens::WCHAR_CHARACTER_CONSTANT, 1),
            b'"' => self.lex_string_literal(tokens::WCHAR_STRING_LITERAL, 1),
            _ => self.lex_identifier(),
        }
    }

    /// Handles `U`: UTF-32 character constant, string, or identifier.
    pub(crate) fn lex_capital_u(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'\'' => self.lex_char_constant(tokens::UTF_32_CHARACTER_CONSTANT, 1),
            b'"' => self.lex_string_literal(tokens::UTF_32_STRING_LITERAL, 1),
            _ => self.lex_identifier(),
        }
    }

    /// Handles `u`: UTF-16 forms, the `u8` forms, or an identifier.
    pub(crate) fn lex_small_u(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'\'' => self.lex_char_constant(tokens::UTF_16_CHARACTER_CONSTANT, 1),
            b'"' => self.lex_string_literal(tokens::UTF_16_STRING_LITERAL, 1),
            b'8' => match self.cursor.peek(2) {
                b'\'' => self.lex_char_constant(tokens::UTF_8_CHARACTER_CONSTANT, 2),
                b'"' => self.lex_string_literal(tokens::UTF_8_STRING_LITERAL, 2),
                _ => self.lex_identifier(),
            },
            _ => self.lex_identifier(),
        }
    }
}
