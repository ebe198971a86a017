//! Error types for the ctok pipeline.
//!
//! Every condition that aborts a run is a variant here. All of them are
//! fatal for the file being processed; the driver turns them into a
//! diagnostic on standard error and exit code 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised anywhere in the decompose/recompose pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// File could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A byte outside every token class appeared at the top level.
    #[error("invalid character 0x{byte:02X} at byte offset {offset}")]
    InvalidByte { byte: u8, offset: usize },

    /// An escape sequence with an unknown introducer character.
    #[error("unsupported escape sequence \"\\{follower}\"")]
    UnsupportedEscape { follower: char },

    /// A `\x` escape with no hexadecimal digits after it.
    #[error("\\x escape sequence has no hexadecimal digits")]
    EmptyHexEscape,

    /// A `\u`/`\U` escape with fewer digits than its fixed length.
    #[error("\\{escape} escape sequence is too short: exactly {expected} hexadecimal digits are expected")]
    EscapeTooShort { escape: char, expected: usize },

    /// `#something` where something is not a known directive.
    #[error("unrecognized preprocessing directive \"#{name}\"")]
    UnknownDirective { name: String },

    /// A backslash in an identifier that does not introduce a `\u`/`\U`
    /// universal character name.
    #[error("invalid identifier \"{identifier}\"")]
    InvalidIdentifier { identifier: String },

    /// Universal character name with too few hex digits.
    #[error("invalid universal character name in identifier \"{identifier}\": {got} hex digits present, {expected} expected")]
    UcnTooShort {
        identifier: String,
        got: usize,
        expected: usize,
    },

    /// Universal character name that denotes U+0000.
    #[error("invalid universal character name in identifier \"{identifier}\": U+0000 is not allowed")]
    UcnZero { identifier: String },

    /// Universal character name below U+00A0 that is not `$`, `@` or `` ` ``.
    #[error("invalid universal character name in identifier \"{identifier}\": values below U+00A0 other than U+0024 ($), U+0040 (@) and U+0060 (`) are not allowed")]
    UcnBelowA0 { identifier: String, value: u32 },

    /// Universal character name in the UTF-16 surrogate range.
    #[error("invalid universal character name in identifier \"{identifier}\": values in range U+D800 to U+DFFF inclusive are not allowed")]
    UcnSurrogate { identifier: String, value: u32 },

    /// Universal character name above U+10FFFF.
    #[error("invalid universal character name in identifier \"{identifier}\": values greater than U+10FFFF are not allowed")]
    UcnTooLarge { identifier: String, value: u32 },

    /// The fixed-capacity symbol table has no free slot left.
    #[error("maximum number of identifiers reached")]
    SymbolTableFull,

    /// A construct that must be closed reached the end of input first.
    #[error("unterminated {what}")]
    Unterminated { what: &'static str },

    /// A numeric constant that cannot be interpreted in its base.
    #[error("invalid numeric constant \"{text}\"")]
    InvalidConstant { text: String },

    /// `df`/`dd`/`dl` floating suffixes are recognized but not carried.
    #[error("decimal floating constants are currently unsupported")]
    DecimalFloatUnsupported,

    /// Token file signature does not start with `%TOK-`.
    #[error("{}: file signature mismatch, file potentially corrupted; rerun with --yolo to ignore all checks", path.display())]
    BadSignature { path: PathBuf },

    /// Token file revision is newer than this implementation.
    #[error("{}: unsupported file revision {revision}, maximum supported revision is {max}; rerun with --yolo to ignore all checks", path.display())]
    BadRevision {
        path: PathBuf,
        revision: u32,
        max: u32,
    },

    /// Symbol entry whose slot index lies outside the valid token range.
    #[error("malformed file {}: symbol \"{name}\" has value {slot}, outside range {lo}..={hi} for file revision 1", path.display())]
    SymbolOutOfRange {
        path: PathBuf,
        name: String,
        slot: u32,
        lo: u32,
        hi: u32,
    },

    /// Token file ended in the middle of a field.
    #[error("{}: unexpected end of file", path.display())]
    TruncatedFile { path: PathBuf },

    /// A token value with no meaning in the reverse table.
    #[error("token {token} has no meaning in this stream")]
    UnknownToken { token: u32 },

    /// The stream ended inside a sentinel payload.
    #[error("token stream ends inside a {what} payload")]
    TruncatedStream { what: &'static str },
}

/// Result alias used across the ctok crates.
pub type Result<T> = std::result::Result<T, Error>;
