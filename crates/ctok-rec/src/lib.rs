//! ctok-rec - Reconstruction of C source from a token stream.
//!
//! The reverse of decomposition: a meaning table maps every token value
//! back to text, and sentinel tokens dispatch to typed payload handlers
//! that rebuild literals, header names, and numeric constants. The output
//! is textually faithful, not byte-identical: comments stay collapsed and
//! characters above ASCII come back as escape sequences.

mod emit;
mod meaning;
mod recompose;

pub use meaning::{Meaning, MeaningTable};
pub use recompose::recompose;

use std::path::Path;

use ctok_util::{fs, Result};

/// Recomposes a `.tok` file into C source text.
///
/// # Arguments
///
/// * `input` - Token artifact path
/// * `output` - Text file to write (truncating)
/// * `yolo` - Downgrade artifact validation failures to warnings
pub fn recompose_file(input: &Path, output: &Path, yolo: bool) -> Result<()> {
    let file = ctok_codec::read_token_file(input, yolo)?;

    let mut meanings = MeaningTable::new();
    for (slot, name) in file.symbols {
        meanings.insert_name(slot, name);
    }

    let mut text = Vec::new();
    recompose(&file.stream, &meanings, &mut text)?;
    fs::write_bytes(output, &text)
}
