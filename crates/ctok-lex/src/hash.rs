//! The two hash functions behind the token value space.
//!
//! Fixed spellings (keywords and punctuators) and identifiers hash into
//! disjoint ranges, and both stay clear of the literal ASCII values 0–127,
//! so a token's numeric value alone tells a reader what kind of thing it
//! is.

use crate::tokens::Token;

/// Hashes a keyword or punctuator spelling into [128, 746].
///
/// For spellings of two or more bytes the pre-hash packs the first byte
/// pair into the high half and the last byte pair into the low half, each
/// pair read little-endian. One-byte spellings replicate the byte into
/// every lane with 12 added to the lowest so that `"<"` and `"<<"` (whose
/// pairs would otherwise coincide) stay apart.
///
/// The final value is `pre_hash % 619 + 128`; the 128 offset keeps the
/// range clear of literal ASCII tokens.
pub fn fixed_hash(spelling: &[u8]) -> Token {
    debug_assert!(!spelling.is_empty());

    let pre_hash = if spelling.len() >= 2 {
        let first = u16::from_le_bytes([spelling[0], spelling[1]]) as u32;
        let last = u16::from_le_bytes([spelling[spelling.len() - 2], spelling[spelling.len() - 1]])
            as u32;
        (first << 16) | last
    } else {
        let c = spelling[0] as u32;
        (c + 12) | c << 8 | c << 16 | c << 24
    };

    pre_hash % 619 + 128
}

/// Hashes an identifier into [747, 4819].
///
/// The sum of the bytes modulo 4073 (the first prime above the 4095
/// distinct identifiers the translation limits require), offset past the
/// fixed-hash range. Collisions are resolved by the symbol table's probe
/// sequence, not here.
pub fn ident_hash(identifier: &[u8]) -> Token {
    let sum = identifier
        .iter()
        .fold(0u32, |acc, &b| acc.wrapping_add(b as u32));
    sum % 4073 + 747
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_hash_known_values() {
        // Slots pinned by the .tok revision 001 reverse table.
        assert_eq!(fixed_hash(b"while"), 170);
        assert_eq!(fixed_hash(b"int"), 430);
        assert_eq!(fixed_hash(b"->"), 139);
        assert_eq!(fixed_hash(b"#"), 186);
        assert_eq!(fixed_hash(b"##"), 174);
        assert_eq!(fixed_hash(b"..."), 383);
        assert_eq!(fixed_hash(b"<="), 745);
        assert_eq!(fixed_hash(b"const"), 743);
        assert_eq!(fixed_hash(b"_Decimal64"), 156);
    }

    #[test]
    fn test_fixed_hash_single_byte_range() {
        for b in 0x21u8..=0x7E {
            let hash = fixed_hash(&[b]);
            assert!((128..=746).contains(&hash));
        }
    }

    #[test]
    fn test_single_char_differs_from_doubled() {
        assert_ne!(fixed_hash(b"<"), fixed_hash(b"<<"));
        assert_ne!(fixed_hash(b">"), fixed_hash(b">>"));
        assert_ne!(fixed_hash(b"+"), fixed_hash(b"++"));
    }

    #[test]
    fn test_ident_hash_range() {
        for name in ["x", "foo", "a_very_long_identifier_name", ""] {
            let hash = ident_hash(name.as_bytes());
            assert!((747..=4819).contains(&hash), "{name} out of range");
        }
    }

    #[test]
    fn test_ident_hash_is_byte_sum() {
        assert_eq!(ident_hash(b"x"), b'x' as u32 % 4073 + 747);
        assert_eq!(ident_hash(b"ab"), ident_hash(b"ba"));
    }
}
