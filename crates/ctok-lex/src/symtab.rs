//! The identifier symbol table.
//!
//! A fixed-capacity, open-addressed map from identifier hash to stored
//! spelling. Slots below 747 are never used; they belong to the ASCII and
//! keyword/punctuator token ranges. The table also keeps a chart: the
//! occupied slot indices in first-insertion order, which is the order the
//! token file serializes them in.

use ctok_util::{Error, Result};

use crate::hash::ident_hash;
use crate::tokens::Token;

/// Total slot count, including the unused sub-747 range.
pub const SYMBOL_TABLE_SIZE: usize = 4819;

/// First slot an identifier may occupy.
pub const FIRST_IDENT_SLOT: Token = 747;

/// Fixed-capacity identifier interner.
pub struct SymbolTable {
    slots: Vec<Option<Box<str>>>,
    chart: Vec<Token>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: vec![None; SYMBOL_TABLE_SIZE],
            chart: Vec::new(),
        }
    }

    /// Interns an identifier, returning its slot.
    ///
    /// Probing starts at the identifier hash and walks forward, wrapping
    /// from the last slot back to [`FIRST_IDENT_SLOT`] at most once. A
    /// slot holding the same spelling is returned as-is; a free slot gets
    /// a fresh owned copy and is appended to the chart.
    ///
    /// # Errors
    ///
    /// [`Error::SymbolTableFull`] when a full cycle finds neither a free
    /// slot nor a match.
    pub fn intern(&mut self, name: &str) -> Result<Token> {
        let mut slot = ident_hash(name.as_bytes());
        let mut cycled = false;

        loop {
            if slot as usize >= SYMBOL_TABLE_SIZE {
                if cycled {
                    return Err(Error::SymbolTableFull);
                }
                slot = FIRST_IDENT_SLOT;
                cycled = true;
            }
            match &self.slots[slot as usize] {
                None => break,
                Some(existing) if existing.as_ref() == name => return Ok(slot),
                Some(_) => slot += 1,
            }
        }

        self.slots[slot as usize] = Some(name.into());
        self.chart.push(slot);
        Ok(slot)
    }

    /// The spelling stored at a slot, if any.
    pub fn name(&self, slot: Token) -> Option<&str> {
        self.slots
            .get(slot as usize)
            .and_then(|entry| entry.as_deref())
    }

    /// Occupied slots in first-insertion order.
    pub fn chart(&self) -> &[Token] {
        &self.chart
    }

    /// Chart entries paired with their spellings, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (Token, &str)> {
        self.chart.iter().filter_map(move |&slot| {
            self.slots[slot as usize]
                .as_deref()
                .map(|name| (slot, name))
        })
    }

    /// Number of distinct identifiers interned.
    pub fn len(&self) -> usize {
        self.chart.len()
    }

    /// Whether no identifier has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
