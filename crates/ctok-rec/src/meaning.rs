//! The reverse token table.
//!
//! One entry per token value. ASCII values carry their own byte, fixed
//! spellings sit at their hash slot, sentinels are markers that route to
//! the payload handlers, and identifier slots are filled in from a symbol
//! table or from a token file's symbol section.

use ctok_lex::hash::fixed_hash;
use ctok_lex::tokens::{self, Token};
use ctok_lex::SymbolTable;

/// Entry count: one per token value, 0 through 4819 inclusive.
const TABLE_SIZE: usize = 4820;

/// What a token value stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meaning {
    /// No meaning; such a token in a stream is malformed.
    Empty,

    /// A fixed spelling: keyword, punctuator, or directive.
    Fixed(&'static str),

    /// A sentinel introducing a typed payload.
    Marker,

    /// An identifier spelling loaded for this stream.
    Name(String),
}

/// Reverse table over the whole token value space.
pub struct MeaningTable {
    entries: Vec<Meaning>,
}

impl MeaningTable {
    /// Builds the table with every fixed token in place and all
    /// identifier slots empty.
    pub fn new() -> Self {
        let mut entries = vec![Meaning::Empty; TABLE_SIZE];

        for &spelling in tokens::KEYWORDS.iter().chain(tokens::PUNCTUATORS) {
            entries[fixed_hash(spelling.as_bytes()) as usize] = Meaning::Fixed(spelling);
        }
        for &(spelling, token) in tokens::DIRECTIVES {
            entries[token as usize] = Meaning::Fixed(spelling);
        }
        for &sentinel in tokens::SENTINELS {
            entries[sentinel as usize] = Meaning::Marker;
        }

        Self { entries }
    }

    /// Builds the table and populates identifier slots from a live
    /// symbol table (the roundtrip path, no artifact involved).
    pub fn from_symbol_table(symbols: &SymbolTable) -> Self {
        let mut table = Self::new();
        for (slot, name) in symbols.entries() {
            table.insert_name(slot, name.to_string());
        }
        table
    }

    /// Stores an identifier spelling at its slot.
    pub fn insert_name(&mut self, slot: Token, name: String) {
        self.entries[slot as usize] = Meaning::Name(name);
    }

    /// The meaning of a token value; out-of-range values are `Empty`.
    pub fn get(&self, token: Token) -> &Meaning {
        self.entries.get(token as usize).unwrap_or(&Meaning::Empty)
    }
}

impl Default for MeaningTable {
    fn default() -> Self {
        Self::new()
    }
}
