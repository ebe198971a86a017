//! Punctuator and comment lexing.
//!
//! Each routine inspects one or two bytes past the cursor and emits the
//! hash of the longest matching spelling. Digraphs emit their canonical
//! punctuator's hash, so `<:` and `[` are the same token. Comments
//! collapse to a single space token.

use ctok_util::{Error, Result};

use crate::tokens::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Result<()> {
        if self.cursor.peek(1) == b'=' {
            self.emit(b"!=")
        } else {
            self.emit(b"!")
        }
    }

    /// Handles: `%`, `%=`, and the digraphs `%>`, `%:`, `%:%:`
    pub(crate) fn lex_percent(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'=' => self.emit(b"%="),
            b'>' => {
                self.push_fixed(b"}");
                self.cursor.advance_by(2);
                Ok(())
            }
            b':' => {
                if self.cursor.peek(2) == b'%' && self.cursor.peek(3) == b':' {
                    self.push_fixed(b"##");
                    self.cursor.advance_by(4);
                    Ok(())
                } else {
                    // %: stands for #: hand the rest to the directive
                    // handler.
                    self.cursor.advance_by(2);
                    self.lex_directive_body()
                }
            }
            _ => self.emit(b"%"),
        }
    }

    /// Handles: `&`, `&&`, `&=`
    pub(crate) fn lex_ampersand(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'&' => self.emit(b"&&"),
            b'=' => self.emit(b"&="),
            _ => self.emit(b"&"),
        }
    }

    /// Handles: `*`, `*=`
    pub(crate) fn lex_star(&mut self) -> Result<()> {
        if self.cursor.peek(1) == b'=' {
            self.emit(b"*=")
        } else {
            self.emit(b"*")
        }
    }

    /// Handles: `+`, `++`, `+=`
    pub(crate) fn lex_plus(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'+' => self.emit(b"++"),
            b'=' => self.emit(b"+="),
            _ => self.emit(b"+"),
        }
    }

    /// Handles: `-`, `--`, `-=`, `->`
    pub(crate) fn lex_minus(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'-' => self.emit(b"--"),
            b'=' => self.emit(b"-="),
            b'>' => self.emit(b"->"),
            _ => self.emit(b"-"),
        }
    }

    /// Handles: `.`, `...`
    ///
    /// Two dots without a third are two member operators.
    pub(crate) fn lex_dot(&mut self) -> Result<()> {
        if self.cursor.peek(1) == b'.' && self.cursor.peek(2) == b'.' {
            self.emit(b"...")
        } else {
            self.emit(b".")
        }
    }

    /// Handles: `/`, `/=`, and both comment forms.
    ///
    /// A comment of either kind is replaced by a single space token. A
    /// line comment leaves the cursor on the newline so the line end is
    /// tokenized normally.
    pub(crate) fn lex_slash(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'/' => {
                self.stream.push(b' ' as Token);
                self.cursor.advance_by(2);
                while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
                    self.cursor.advance();
                }
                Ok(())
            }
            b'*' => {
                self.stream.push(b' ' as Token);
                self.cursor.advance_by(2);
                loop {
                    if self.cursor.is_at_end() {
                        return Err(Error::Unterminated {
                            what: "block comment",
                        });
                    }
                    if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
                        self.cursor.advance_by(2);
                        return Ok(());
                    }
                    self.cursor.advance();
                }
            }
            b'=' => self.emit(b"/="),
            _ => self.emit(b"/"),
        }
    }

    /// Handles: `:`, `::`, and the digraph `:>`
    pub(crate) fn lex_colon(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b':' => self.emit(b"::"),
            b'>' => {
                self.push_fixed(b"]");
                self.cursor.advance_by(2);
                Ok(())
            }
            _ => self.emit(b":"),
        }
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`, and the digraphs `<:`, `<%`
    pub(crate) fn lex_less(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'<' => {
                if self.cursor.peek(2) == b'=' {
                    self.emit(b"<<=")
                } else {
                    self.emit(b"<<")
                }
            }
            b'=' => self.emit(b"<="),
            b':' => {
                self.push_fixed(b"[");
                self.cursor.advance_by(2);
                Ok(())
            }
            b'%' => {
                self.push_fixed(b"{");
                self.cursor.advance_by(2);
                Ok(())
            }
            _ => self.emit(b"<"),
        }
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> Result<()> {
        if self.cursor.peek(1) == b'=' {
            self.emit(b"==")
        } else {
            self.emit(b"=")
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`
    pub(crate) fn lex_greater(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'>' => {
                if self.cursor.peek(2) == b'=' {
                    self.emit(b">>=")
                } else {
                    self.emit(b">>")
                }
            }
            b'=' => self.emit(b">="),
            _ => self.emit(b">"),
        }
    }

    /// Handles: `^`, `^=`
    pub(crate) fn lex_caret(&mut self) -> Result<()> {
        if self.cursor.peek(1) == b'=' {
            self.emit(b"^=")
        } else {
            self.emit(b"^")
        }
    }

    /// Handles: `|`, `||`, `|=`
    pub(crate) fn lex_pipe(&mut self) -> Result<()> {
        match self.cursor.peek(1) {
            b'|' => self.emit(b"||"),
            b'=' => self.emit(b"|="),
            _ => self.emit(b"|"),
        }
    }
}
