//! Core lexer: state and top-level dispatch.

use ctok_util::{Error, Result};

use crate::cursor::Cursor;
use crate::hash::fixed_hash;
use crate::stream::TokenStream;
use crate::symtab::SymbolTable;
use crate::tokens::{self, Token};

/// Tokenizer for phase-2 C source.
///
/// The lexer walks the byte buffer once, appending tokens to its stream
/// and interning identifiers into its symbol table. Dispatch keys on the
/// single byte under the cursor; every routine leaves the cursor on the
/// first byte of the next token.
pub struct Lexer<'a> {
    /// Byte cursor over the phase-2 buffer.
    pub(crate) cursor: Cursor<'a>,

    /// Output token stream.
    pub(crate) stream: TokenStream,

    /// Identifier interner.
    pub(crate) symbols: SymbolTable,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a phase-2 source buffer.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            stream: TokenStream::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Tokenizes the whole buffer.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal condition: an invalid byte, a malformed
    /// escape or universal character name, an unknown directive, or an
    /// unterminated construct.
    pub fn run(&mut self) -> Result<()> {
        while !self.cursor.is_at_end() {
            self.dispatch()?;
        }
        Ok(())
    }

    /// Consumes the lexer, yielding the stream and the symbol table.
    pub fn into_parts(self) -> (TokenStream, SymbolTable) {
        (self.stream, self.symbols)
    }

    /// Recognizes one token starting at the cursor.
    fn dispatch(&mut self) -> Result<()> {
        match self.cursor.current() {
            // Whitespace is carried through as its own byte value.
            byte @ (b'\t' | 0x0B | 0x0C | b' ') => {
                self.stream.push(byte as Token);
                self.cursor.advance();
                Ok(())
            }
            b'\n' => {
                self.stream.push(b'\n' as Token);
                self.cursor.advance();
                Ok(())
            }
            // CR and CRLF both mark the end of a line.
            b'\r' => {
                self.stream.push(b'\n' as Token);
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                Ok(())
            }

            // Single-spelling punctuators.
            byte @ (b'(' | b')' | b',' | b';' | b'?' | b'[' | b']' | b'{' | b'}' | b'~') => {
                self.push_fixed(&[byte]);
                self.cursor.advance();
                Ok(())
            }

            // Compound punctuator families.
            b'!' => self.lex_bang(),
            b'%' => self.lex_percent(),
            b'&' => self.lex_ampersand(),
            b'*' => self.lex_star(),
            b'+' => self.lex_plus(),
            b'-' => self.lex_minus(),
            b'.' => self.lex_dot(),
            b'/' => self.lex_slash(),
            b':' => self.lex_colon(),
            b'<' => self.lex_less(),
            b'=' => self.lex_equal(),
            b'>' => self.lex_greater(),
            b'^' => self.lex_caret(),
            b'|' => self.lex_pipe(),

            b'#' => self.lex_hash(),
            b'"' => self.lex_string_literal(tokens::CHARACTER_STRING_LITERAL, 0),
            b'\'' => self.lex_char_constant(tokens::CHARACTER_CONSTANT, 0),
            b'0'..=b'9' => self.lex_number(),

            // Literal prefixes first; they fall back to identifiers.
            b'L' => self.lex_capital_l(),
            b'U' => self.lex_capital_u(),
            b'u' => self.lex_small_u(),
            b'A'..=b'Z' | b'a'..=b'z' | b'_' | b'\\' => self.lex_identifier(),

            byte => Err(Error::InvalidByte {
                byte,
                offset: self.cursor.pos(),
            }),
        }
    }

    /// Appends the hash token of a fixed spelling.
    pub(crate) fn push_fixed(&mut self, spelling: &[u8]) {
        self.stream.push(fixed_hash(spelling));
    }

    /// Appends a fixed spelling's hash and consumes its bytes.
    pub(crate) fn emit(&mut self, spelling: &[u8]) -> Result<()> {
        self.push_fixed(spelling);
        self.cursor.advance_by(spelling.len());
        Ok(())
    }
}
