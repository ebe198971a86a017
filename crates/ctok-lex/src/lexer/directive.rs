//! Preprocessing directive lexing.
//!
//! `#` introduces a directive unless it is doubled (the `##` punctuator)
//! or ends the line (a bare `#`). The directive word is matched exactly
//! against the fixed set; anything else is fatal. `#include` and `#embed`
//! are the two directives followed by a header name, which gets its own
//! sentinel-plus-payload encoding so the delimited characters survive the
//! roundtrip.

use ctok_util::{Error, Result};

use crate::chars::decode_utf8;
use crate::tokens::{self, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles `#`: the `##` punctuator, a bare `#`, or a directive.
    pub(crate) fn lex_hash(&mut self) -> Result<()> {
        if self.cursor.peek(1) == b'#' {
            return self.emit(b"##");
        }
        self.cursor.advance();
        self.lex_directive_body()
    }

    /// Lexes the directive after its introducer (`#` or `%:`).
    pub(crate) fn lex_directive_body(&mut self) -> Result<()> {
        // A hash with nothing on the line is the plain punctuator.
        if self.cursor.is_at_end() || self.cursor.current() == b'\n' {
            self.push_fixed(b"#");
            return Ok(());
        }

        while self.cursor.current() == b' ' {
            self.cursor.advance();
        }

        let start = self.cursor.pos();
        while self.cursor.current().is_ascii_lowercase() {
            self.cursor.advance();
        }

        let word = self.cursor.slice_from(start);
        let Some(token) = tokens::directive_token(word) else {
            // Take the rest of the word for the diagnostic.
            while tokens::is_identifier_byte(self.cursor.current()) {
                self.cursor.advance();
            }
            let name = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
            return Err(Error::UnknownDirective { name });
        };

        self.stream.push(token);
        if token == tokens::INCLUDE_DIRECTIVE || token == tokens::EMBED_DIRECTIVE {
            self.lex_header_name()?;
        }
        Ok(())
    }

    /// Lexes the header name after `#include`/`#embed`.
    ///
    /// Bytes before the opening delimiter pass through literally. The
    /// delimiter picks the sentinel, then the name is emitted as a length
    /// word (back-patched) and one decoded code point per token. The
    /// closing delimiter is consumed but not emitted.
    fn lex_header_name(&mut self) -> Result<()> {
        loop {
            if self.cursor.is_at_end() || self.cursor.current() == b'\n' {
                return Err(Error::Unterminated {
                    what: "header name",
                });
            }
            match self.cursor.current() {
                b'<' | b'"' => break,
                byte => {
                    self.stream.push(byte as Token);
                    self.cursor.advance();
                }
            }
        }

        let closer = if self.cursor.current() == b'"' {
            self.stream.push(tokens::HEADER_NAME_QUOTES);
            b'"'
        } else {
            self.stream.push(tokens::HEADER_NAME_LESS_GREATER);
            b'>'
        };
        self.cursor.advance();

        let length_slot = self.stream.push(0);
        let mut length = 0u32;
        while self.cursor.current() != closer {
            if self.cursor.is_at_end() {
                return Err(Error::Unterminated {
                    what: "header name",
                });
            }
            let (code_point, next) = decode_utf8(self.cursor.bytes(), self.cursor.pos());
            self.cursor.set_pos(next);
            self.stream.push(code_point);
            length += 1;
        }
        self.cursor.advance();
        self.stream.patch(length_slot, length);
        Ok(())
    }
}
