//! Property tests over the hash and interning contracts.

use proptest::prelude::*;

use ctok_lex::hash::{fixed_hash, ident_hash};
use ctok_lex::tokens::{keyword_token, KEYWORDS, PUNCTUATORS};
use ctok_lex::{Lexer, SymbolTable};

#[test]
fn hash_spaces_are_pairwise_disjoint() {
    // ASCII occupies [0, 127], fixed hashes [128, 746], identifier hashes
    // [747, 4819]; range membership alone proves disjointness.
    for spelling in KEYWORDS.iter().chain(PUNCTUATORS) {
        let hash = fixed_hash(spelling.as_bytes());
        assert!((128..=746).contains(&hash), "{spelling} -> {hash}");
    }
}

proptest! {
    #[test]
    fn ident_hash_stays_in_range(name in proptest::collection::vec(any::<u8>(), 0..256)) {
        let hash = ident_hash(&name);
        prop_assert!((747..=4819).contains(&hash));
    }

    #[test]
    fn fixed_hash_stays_in_range(spelling in proptest::collection::vec(any::<u8>(), 1..16)) {
        let hash = fixed_hash(&spelling);
        prop_assert!((128..=746).contains(&hash));
    }

    #[test]
    fn equal_spellings_intern_to_equal_slots(name in "[a-z_][a-z0-9_]{0,12}") {
        prop_assume!(keyword_token(name.as_bytes()).is_none());
        let mut table = SymbolTable::new();
        let first = table.intern(&name).unwrap();
        let second = table.intern(&name).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(table.len(), 1);
    }

    #[test]
    fn distinct_spellings_intern_to_distinct_slots(
        a in "[a-z][a-z0-9]{0,10}",
        b in "[a-z][a-z0-9]{0,10}",
    ) {
        prop_assume!(a != b);
        prop_assume!(keyword_token(a.as_bytes()).is_none());
        prop_assume!(keyword_token(b.as_bytes()).is_none());
        let mut table = SymbolTable::new();
        let slot_a = table.intern(&a).unwrap();
        let slot_b = table.intern(&b).unwrap();
        prop_assert_ne!(slot_a, slot_b);
    }

    #[test]
    fn identifier_sequences_tokenize(names in proptest::collection::vec("[a-z][a-z0-9_]{0,10}", 1..20)) {
        let source = names.join(" ");
        let mut lexer = Lexer::new(source.as_bytes());
        prop_assert!(lexer.run().is_ok());
        let (stream, symbols) = lexer.into_parts();
        // One token per name plus the separating spaces.
        prop_assert_eq!(stream.len(), names.len() * 2 - 1);
        // Interned count matches the distinct non-keyword spellings.
        let distinct: std::collections::HashSet<_> = names
            .iter()
            .filter(|n| keyword_token(n.as_bytes()).is_none())
            .collect();
        prop_assert_eq!(symbols.len(), distinct.len());
    }

    #[test]
    fn unsuffixed_decimal_widths(value in any::<u32>()) {
        let source = value.to_string();
        let mut lexer = Lexer::new(source.as_bytes());
        lexer.run().unwrap();
        let (stream, _) = lexer.into_parts();
        let words = stream.words();
        if value <= i32::MAX as u32 {
            prop_assert_eq!(words, &[ctok_lex::tokens::INT_CONSTANT, value]);
        } else {
            // Decimal skips unsigned int and lands on long long.
            prop_assert_eq!(
                words,
                &[ctok_lex::tokens::LONG_LONG_INT_CONSTANT, value, 0]
            );
        }
    }
}
