//! ctok-lex - Lexical decomposition of C23 source.
//!
//! This crate covers translation phases 1 through 3: optional punch-card
//! DEL stripping, backslash-newline splicing, and tokenization into the
//! 32-bit token stream described in the `tokens` module. The output of
//! [`decompose`] is the canonical intermediate representation consumed by
//! the codec and the reconstructor.

pub mod chars;
pub mod cursor;
pub mod hash;
mod lexer;
pub mod phases;
pub mod stream;
pub mod symtab;
pub mod tokens;

pub use lexer::Lexer;
pub use stream::{TokenReader, TokenStream};
pub use symtab::SymbolTable;

use ctok_util::Result;

/// Decomposes a C source buffer into a token stream and a symbol table.
///
/// Runs translation phases 1 and 2 over the buffer in place (DEL removal
/// only when `punch` is set), then tokenizes the result.
///
/// # Arguments
///
/// * `source` - Raw source bytes, consumed by the phase passes
/// * `punch` - Enable the punch-card extension (strip every 0x7F byte)
pub fn decompose(mut source: Vec<u8>, punch: bool) -> Result<(TokenStream, SymbolTable)> {
    if punch {
        phases::strip_del(&mut source);
    }
    phases::splice_lines(&mut source);

    let mut lexer = Lexer::new(&source);
    lexer.run()?;
    Ok(lexer.into_parts())
}
