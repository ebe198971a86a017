//! Token values and the reserved vocabulary.
//!
//! A token is a bare `u32` whose value encodes its own meaning:
//!
//! * 0–127: the ASCII byte itself (whitespace and characters emitted
//!   literally inside directives).
//! * 128–746: either the keyword/punctuator hash of a fixed spelling, a
//!   preprocessing-directive token, or one of the sentinel values below
//!   that introduce a typed payload of following words.
//! * 747–4818: a slot in the identifier symbol table.
//!
//! The sentinel and directive values are format constants of the `.tok`
//! revision 001 layout; they occupy slots no reserved spelling hashes to,
//! which `tests` below asserts.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::hash::fixed_hash;

/// A 32-bit token word.
pub type Token = u32;

/// Smallest fixed-token value; everything below is literal ASCII.
pub const FIXED_BASE: Token = 128;
/// Largest fixed-token value produced by the keyword/punctuator hash.
pub const FIXED_LIMIT: Token = 746;

// String literal sentinels. Payload: one length word, then one code point
// per word.
pub const CHARACTER_STRING_LITERAL: Token = 128;
pub const UTF_8_STRING_LITERAL: Token = 129;
pub const WCHAR_STRING_LITERAL: Token = 130;
pub const UTF_16_STRING_LITERAL: Token = 131;
pub const UTF_32_STRING_LITERAL: Token = 132;

// Header name sentinels. Payload shaped like a string literal.
pub const HEADER_NAME_LESS_GREATER: Token = 140;
pub const HEADER_NAME_QUOTES: Token = 141;

// Character constant sentinels. Payload: one code point word.
pub const CHARACTER_CONSTANT: Token = 151;
pub const UTF_8_CHARACTER_CONSTANT: Token = 152;
pub const WCHAR_CHARACTER_CONSTANT: Token = 153;
pub const UTF_16_CHARACTER_CONSTANT: Token = 154;
pub const UTF_32_CHARACTER_CONSTANT: Token = 155;

// Numeric constant sentinels. Payload: the value, little-endian, one word
// per 4 bytes of the constant's width.
pub const INT_CONSTANT: Token = 157;
pub const UNSIGNED_INT_CONSTANT: Token = 158;
pub const LONG_INT_CONSTANT: Token = 159;
pub const UNSIGNED_LONG_INT_CONSTANT: Token = 160;
pub const LONG_LONG_INT_CONSTANT: Token = 161;
pub const UNSIGNED_LONG_LONG_INT_CONSTANT: Token = 162;
pub const FLOAT_CONSTANT: Token = 163;
pub const DOUBLE_CONSTANT: Token = 164;
pub const LONG_DOUBLE_CONSTANT: Token = 165;
pub const DECIMAL32_CONSTANT: Token = 166;
pub const DECIMAL64_CONSTANT: Token = 167;
pub const DECIMAL128_CONSTANT: Token = 168;

// Preprocessing directive tokens, one fixed value per directive.
pub const IF_DIRECTIVE: Token = 204;
pub const IFDEF_DIRECTIVE: Token = 205;
pub const IFNDEF_DIRECTIVE: Token = 206;
pub const ELIF_DIRECTIVE: Token = 207;
pub const ELIFDEF_DIRECTIVE: Token = 208;
pub const ELIFNDEF_DIRECTIVE: Token = 209;
pub const ELSE_DIRECTIVE: Token = 210;
pub const ENDIF_DIRECTIVE: Token = 211;
pub const INCLUDE_DIRECTIVE: Token = 212;
pub const EMBED_DIRECTIVE: Token = 213;
pub const DEFINE_DIRECTIVE: Token = 214;
pub const UNDEF_DIRECTIVE: Token = 215;
pub const LINE_DIRECTIVE: Token = 216;
pub const ERROR_DIRECTIVE: Token = 217;
pub const WARNING_DIRECTIVE: Token = 218;
pub const PRAGMA_DIRECTIVE: Token = 219;

/// Every sentinel value that introduces a typed payload.
pub const SENTINELS: &[Token] = &[
    CHARACTER_STRING_LITERAL,
    UTF_8_STRING_LITERAL,
    WCHAR_STRING_LITERAL,
    UTF_16_STRING_LITERAL,
    UTF_32_STRING_LITERAL,
    HEADER_NAME_LESS_GREATER,
    HEADER_NAME_QUOTES,
    CHARACTER_CONSTANT,
    UTF_8_CHARACTER_CONSTANT,
    WCHAR_CHARACTER_CONSTANT,
    UTF_16_CHARACTER_CONSTANT,
    UTF_32_CHARACTER_CONSTANT,
    INT_CONSTANT,
    UNSIGNED_INT_CONSTANT,
    LONG_INT_CONSTANT,
    UNSIGNED_LONG_INT_CONSTANT,
    LONG_LONG_INT_CONSTANT,
    UNSIGNED_LONG_LONG_INT_CONSTANT,
    FLOAT_CONSTANT,
    DOUBLE_CONSTANT,
    LONG_DOUBLE_CONSTANT,
    DECIMAL32_CONSTANT,
    DECIMAL64_CONSTANT,
    DECIMAL128_CONSTANT,
];

/// Directive spellings and their token values, in the order the file
/// format assigns them.
pub const DIRECTIVES: &[(&str, Token)] = &[
    ("#if", IF_DIRECTIVE),
    ("#ifdef", IFDEF_DIRECTIVE),
    ("#ifndef", IFNDEF_DIRECTIVE),
    ("#elif", ELIF_DIRECTIVE),
    ("#elifdef", ELIFDEF_DIRECTIVE),
    ("#elifndef", ELIFNDEF_DIRECTIVE),
    ("#else", ELSE_DIRECTIVE),
    ("#endif", ENDIF_DIRECTIVE),
    ("#include", INCLUDE_DIRECTIVE),
    ("#embed", EMBED_DIRECTIVE),
    ("#define", DEFINE_DIRECTIVE),
    ("#undef", UNDEF_DIRECTIVE),
    ("#line", LINE_DIRECTIVE),
    ("#error", ERROR_DIRECTIVE),
    ("#warning", WARNING_DIRECTIVE),
    ("#pragma", PRAGMA_DIRECTIVE),
];

/// The C23 keyword set. Every spelling here is emitted as its own hash.
pub const KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "auto",
    "bool",
    "break",
    "case",
    "char",
    "const",
    "constexpr",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "false",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "nullptr",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "struct",
    "switch",
    "thread_local",
    "true",
    "typedef",
    "typeof",
    "typeof_unqual",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
    "_Atomic",
    "_BitInt",
    "_Complex",
    "_Decimal128",
    "_Decimal32",
    "_Decimal64",
    "_Generic",
    "_Imaginary",
    "_Noreturn",
];

/// Alternate spellings that canonicalize to another keyword's hash.
pub const ALTERNATE_SPELLINGS: &[(&str, &str)] = &[
    ("_Alignas", "alignas"),
    ("_Alignof", "alignof"),
    ("_Bool", "bool"),
    ("_Static_assert", "static_assert"),
    ("_Thread_local", "thread_local"),
];

/// Punctuators emitted as their own hash. Digraphs are absent: they are
/// canonicalized to the spellings below during dispatch.
pub const PUNCTUATORS: &[&str] = &[
    "!", "!=", "#", "##", "%", "%=", "&", "&&", "&=", "(", ")", "*", "*=", "+", "++", "+=", ",",
    "-", "--", "-=", "->", ".", "...", "/", "/=", ":", "::", ";", "<", "<<", "<<=", "<=", "=",
    "==", ">", ">=", ">>", ">>=", "?", "[", "]", "^", "^=", "{", "|", "|=", "||", "}", "~",
];

/// Looks up a reserved spelling, returning its token value.
///
/// Alternate spellings resolve to the canonical keyword's hash, so
/// `_Bool` and `bool` produce the same token.
pub fn keyword_token(spelling: &[u8]) -> Option<Token> {
    static TABLE: OnceLock<FxHashMap<&'static [u8], Token>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut map = FxHashMap::default();
        for kw in KEYWORDS {
            map.insert(kw.as_bytes(), fixed_hash(kw.as_bytes()));
        }
        for (alt, canonical) in ALTERNATE_SPELLINGS {
            map.insert(alt.as_bytes(), fixed_hash(canonical.as_bytes()));
        }
        map
    });
    table.get(spelling).copied()
}

/// Looks up a preprocessing directive by its word (without the `#`).
pub fn directive_token(word: &[u8]) -> Option<Token> {
    static TABLE: OnceLock<FxHashMap<&'static [u8], Token>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        DIRECTIVES
            .iter()
            .map(|&(name, token)| (&name.as_bytes()[1..], token))
            .collect()
    });
    table.get(word).copied()
}

/// Whether a byte may continue an identifier.
///
/// Letters, digits, `_`, `$`, the backslash that introduces a universal
/// character name, and UTF-8 continuation bytes all qualify.
pub fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte == b'\\' || byte >= 0x80
}
