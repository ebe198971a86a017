//! Whole-file I/O helpers.
//!
//! Both directions operate on full buffers: the decomposer wants the whole
//! source in memory before phase 1 runs, and the artifact writer assembles
//! the file in memory before a single truncating write.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Reads an entire file into a byte buffer.
///
/// # Arguments
///
/// * `path` - File to read
///
/// # Errors
///
/// Returns [`Error::Io`] with the offending path attached.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a byte buffer to a file, truncating any previous contents.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.c");
        let err = read_bytes(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("nope.c"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tok");
        write_bytes(&path, b"%TOK-001").unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"%TOK-001");
    }

    #[test]
    fn test_write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tok");
        write_bytes(&path, b"a longer first write").unwrap();
        write_bytes(&path, b"short").unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"short");
    }
}
