//! Token file writer.

use std::path::Path;

use ctok_lex::{SymbolTable, TokenStream};
use ctok_util::{fs, Result};

use crate::SIGNATURE;

/// Serializes a token stream and its symbol table to a `.tok` file.
///
/// Symbol entries are written in chart order, so two runs over the same
/// source produce byte-identical artifacts.
pub fn write_token_file(path: &Path, stream: &TokenStream, symbols: &SymbolTable) -> Result<()> {
    let mut buffer = Vec::with_capacity(12 + stream.len() * 4);

    buffer.extend_from_slice(SIGNATURE);
    buffer.extend_from_slice(&(stream.len() as u32).to_le_bytes());
    for &word in stream.words() {
        buffer.extend_from_slice(&word.to_le_bytes());
    }

    for (slot, name) in symbols.entries() {
        buffer.extend_from_slice(&slot.to_le_bytes());
        buffer.extend_from_slice(name.as_bytes());
        buffer.push(0);
    }

    fs::write_bytes(path, &buffer)
}
