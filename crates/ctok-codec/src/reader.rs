//! Token file reader.
//!
//! Validation is strict by default: the signature prefix and the revision
//! number must both check out, and every symbol slot must lie inside the
//! token range. Yolo mode downgrades the signature and revision checks to
//! warnings; the slot range check stays fatal because an out-of-range
//! slot cannot be represented at all.

use std::path::Path;

use ctok_lex::TokenStream;
use ctok_util::{fs, Error, Result};

use crate::{MAX_REVISION, SIGNATURE_PREFIX, SYMBOL_SLOT_MAX, SYMBOL_SLOT_MIN};

/// A parsed `.tok` artifact.
pub struct TokenFile {
    /// The raw token stream.
    pub stream: TokenStream,

    /// Symbol entries in file order: slot index and spelling.
    pub symbols: Vec<(u32, String)>,
}

/// Reads and validates a `.tok` file.
///
/// # Arguments
///
/// * `path` - Artifact to read
/// * `yolo` - Downgrade signature/revision mismatches to warnings
pub fn read_token_file(path: &Path, yolo: bool) -> Result<TokenFile> {
    let bytes = fs::read_bytes(path)?;
    let truncated = || Error::TruncatedFile {
        path: path.to_path_buf(),
    };

    let signature = bytes.get(..8).ok_or_else(truncated)?;
    if &signature[..5] != SIGNATURE_PREFIX {
        if yolo {
            tracing::warn!(
                path = %path.display(),
                "signature check failed: expect instability from YOLO mode"
            );
        } else {
            return Err(Error::BadSignature {
                path: path.to_path_buf(),
            });
        }
    }

    let revision = parse_revision(&signature[5..8]);
    if revision > MAX_REVISION {
        if yolo {
            tracing::warn!(
                path = %path.display(),
                revision,
                "revision check failed: expect instability from YOLO mode"
            );
        } else {
            return Err(Error::BadRevision {
                path: path.to_path_buf(),
                revision,
                max: MAX_REVISION,
            });
        }
    }

    let count_bytes = bytes.get(8..12).ok_or_else(truncated)?;
    let token_count = u32::from_le_bytes([
        count_bytes[0],
        count_bytes[1],
        count_bytes[2],
        count_bytes[3],
    ]) as usize;

    let payload_end = 12 + token_count.checked_mul(4).ok_or_else(truncated)?;
    let payload = bytes.get(12..payload_end).ok_or_else(truncated)?;
    let words = payload
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let mut symbols = Vec::new();
    let mut pos = payload_end;
    while pos + 4 <= bytes.len() {
        let slot = u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]);
        pos += 4;

        let name_end = bytes[pos..]
            .iter()
            .position(|&b| b == 0)
            .map(|nul| pos + nul)
            .ok_or_else(truncated)?;
        let name = String::from_utf8_lossy(&bytes[pos..name_end]).into_owned();
        pos = name_end + 1;

        if !(SYMBOL_SLOT_MIN..=SYMBOL_SLOT_MAX).contains(&slot) {
            return Err(Error::SymbolOutOfRange {
                path: path.to_path_buf(),
                name,
                slot,
                lo: SYMBOL_SLOT_MIN,
                hi: SYMBOL_SLOT_MAX,
            });
        }
        symbols.push((slot, name));
    }

    Ok(TokenFile {
        stream: TokenStream::from_words(words),
        symbols,
    })
}

/// Parses the three revision digits of the signature; anything that is
/// not a decimal number reads as revision 0.
fn parse_revision(digits: &[u8]) -> u32 {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|text| text.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctok_lex::SymbolTable;

    use crate::write_token_file;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn test_write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "roundtrip.tok");

        let mut stream = TokenStream::new();
        stream.push(430);
        stream.push(32);
        let mut symbols = SymbolTable::new();
        let slot = symbols.intern("main").unwrap();
        stream.push(slot);

        write_token_file(&path, &stream, &symbols).unwrap();
        let file = read_token_file(&path, false).unwrap();

        assert_eq!(file.stream.words(), stream.words());
        assert_eq!(file.symbols, vec![(slot, "main".to_string())]);
    }

    #[test]
    fn test_bad_signature_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "bad.tok");
        std::fs::write(&path, b"%NOP-001\0\0\0\0").unwrap();

        assert!(matches!(
            read_token_file(&path, false),
            Err(Error::BadSignature { .. })
        ));
    }

    #[test]
    fn test_bad_signature_tolerated_in_yolo() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "bad.tok");
        std::fs::write(&path, b"%NOP-001\0\0\0\0").unwrap();

        let file = read_token_file(&path, true).unwrap();
        assert!(file.stream.is_empty());
    }

    #[test]
    fn test_future_revision_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "future.tok");
        std::fs::write(&path, b"%TOK-002\0\0\0\0").unwrap();

        assert!(matches!(
            read_token_file(&path, false),
            Err(Error::BadRevision { revision: 2, .. })
        ));
        assert!(read_token_file(&path, true).is_ok());
    }

    #[test]
    fn test_symbol_slot_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "oob.tok");

        let mut bytes = b"%TOK-001".to_vec();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&4820u32.to_le_bytes());
        bytes.extend_from_slice(b"ghost\0");
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            read_token_file(&path, false),
            Err(Error::SymbolOutOfRange { slot: 4820, .. })
        ));
    }

    #[test]
    fn test_symbol_slot_below_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "low.tok");

        let mut bytes = b"%TOK-001".to_vec();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&127u32.to_le_bytes());
        bytes.extend_from_slice(b"low\0");
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            read_token_file(&path, false),
            Err(Error::SymbolOutOfRange { slot: 127, .. })
        ));
    }

    #[test]
    fn test_truncated_token_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "short.tok");

        let mut bytes = b"%TOK-001".to_vec();
        bytes.extend_from_slice(&5u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3, 4]); // one word, five promised
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            read_token_file(&path, false),
            Err(Error::TruncatedFile { .. })
        ));
    }

    #[test]
    fn test_symbol_name_missing_nul() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "nonul.tok");

        let mut bytes = b"%TOK-001".to_vec();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&800u32.to_le_bytes());
        bytes.extend_from_slice(b"dangling");
        std::fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            read_token_file(&path, false),
            Err(Error::TruncatedFile { .. })
        ));
    }
}
