//! ctok-drv - The `ctok` command line driver.
//!
//! Wires the pipeline crates into the three modes:
//!
//! * decompose (default): C source in, `.tok` artifact out
//! * recompose (`-r`): `.tok` artifact in, C source out
//! * roundtrip (`-rt`): decompose then recompose in one pass
//!
//! The option grammar uses single-dash multi-character flags (`-rt`,
//! `-yolo`) and ignores unknown arguments with a warning, so parsing is a
//! plain loop over the argument list.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use ctok_rec::MeaningTable;

/// Operating mode, selected by `-r` / `-rt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Decompose,
    Recompose,
    Roundtrip,
}

/// Parsed command line.
#[derive(Debug)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
    pub punch: bool,
    pub yolo: bool,
}

/// Parses the argument list (without the program name).
///
/// The first positional argument is the input path; everything else is an
/// option. Unknown arguments warn and are ignored.
pub fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let Some(input) = args.next() else {
        bail!("please enter a filename or file path as the first argument");
    };

    let mut options = Options {
        input: PathBuf::from(input),
        output: PathBuf::from("a.tok"),
        mode: Mode::Decompose,
        punch: false,
        yolo: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--punch" => options.punch = true,
            "-o" => {
                if let Some(path) = args.next() {
                    options.output = PathBuf::from(path);
                }
            }
            "-r" => options.mode = Mode::Recompose,
            "-rt" => options.mode = Mode::Roundtrip,
            "-yolo" | "--yolo" => options.yolo = true,
            other => {
                tracing::warn!("unrecognized argument ignored: {other:?}");
            }
        }
    }

    Ok(options)
}

/// Runs one mode to completion.
pub fn run(options: &Options) -> Result<()> {
    match options.mode {
        Mode::Decompose => {
            let source = ctok_util::fs::read_bytes(&options.input)?;
            tracing::debug!(bytes = source.len(), "decomposing");
            let (stream, symbols) = ctok_lex::decompose(source, options.punch)?;
            tracing::debug!(
                tokens = stream.len(),
                identifiers = symbols.len(),
                "writing token file"
            );
            ctok_codec::write_token_file(&options.output, &stream, &symbols)?;
        }
        Mode::Recompose => {
            ctok_rec::recompose_file(&options.input, &options.output, options.yolo)?;
        }
        Mode::Roundtrip => {
            let source = ctok_util::fs::read_bytes(&options.input)?;
            let (stream, symbols) = ctok_lex::decompose(source, options.punch)?;

            // The live symbol table stands in for the artifact's symbol
            // section.
            let meanings = MeaningTable::from_symbol_table(&symbols);
            let mut text = Vec::new();
            ctok_rec::recompose(&stream, &meanings, &mut text)?;
            ctok_util::fs::write_bytes(&options.output, &text)?;
        }
    }
    Ok(())
}

/// Entry point: subscriber setup, parsing, mode dispatch, exit code.
pub fn main_entry() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let result = parse_args(std::env::args().skip(1)).and_then(|options| run(&options));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
