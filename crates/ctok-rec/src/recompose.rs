//! The stream walker.
//!
//! Plain tokens print their meaning; marker tokens consume their typed
//! payload from the same reader before the walk continues. The reader is
//! the only cursor, so a handler that reads too little or too much would
//! desynchronize the walk; each handler consumes exactly the payload
//! shape its sentinel declares.

use std::io::Write;

use ctok_lex::tokens::{self, Token};
use ctok_lex::{TokenReader, TokenStream};
use ctok_util::{Error, Result};

use crate::emit::{push_character, push_utf8};
use crate::meaning::{Meaning, MeaningTable};

/// Renders a token stream as C source text.
///
/// # Errors
///
/// [`Error::UnknownToken`] for a token with no meaning (an identifier
/// slot the stream never declared), [`Error::TruncatedStream`] when the
/// stream ends inside a payload.
pub fn recompose(stream: &TokenStream, meanings: &MeaningTable, out: &mut Vec<u8>) -> Result<()> {
    let mut reader = stream.reader();

    while let Some(token) = reader.next() {
        if token < 128 {
            push_ascii(token as u8, out);
            continue;
        }
        match meanings.get(token) {
            Meaning::Fixed(text) => out.extend_from_slice(text.as_bytes()),
            Meaning::Name(name) => out.extend_from_slice(name.as_bytes()),
            Meaning::Marker => expand_sentinel(token, &mut reader, out)?,
            Meaning::Empty => return Err(Error::UnknownToken { token }),
        }
    }
    Ok(())
}

/// Writes a literal ASCII token. Whitespace and printable characters are
/// themselves; other control values have no textual form.
fn push_ascii(byte: u8, out: &mut Vec<u8>) {
    if matches!(byte, 0x09..=0x0D) || (0x20..=0x7E).contains(&byte) {
        out.push(byte);
    }
}

/// Expands one sentinel and its payload.
fn expand_sentinel(token: Token, reader: &mut TokenReader<'_>, out: &mut Vec<u8>) -> Result<()> {
    match token {
        tokens::CHARACTER_STRING_LITERAL => string_literal(b"\"", reader, out),
        tokens::UTF_8_STRING_LITERAL => string_literal(b"u8\"", reader, out),
        tokens::WCHAR_STRING_LITERAL => string_literal(b"L\"", reader, out),
        tokens::UTF_16_STRING_LITERAL => string_literal(b"u\"", reader, out),
        tokens::UTF_32_STRING_LITERAL => string_literal(b"U\"", reader, out),

        tokens::HEADER_NAME_LESS_GREATER => header_name(b'<', b'>', reader, out),
        tokens::HEADER_NAME_QUOTES => header_name(b'"', b'"', reader, out),

        tokens::CHARACTER_CONSTANT => char_constant(b"'", reader, out),
        tokens::UTF_8_CHARACTER_CONSTANT => char_constant(b"u8'", reader, out),
        tokens::WCHAR_CHARACTER_CONSTANT => char_constant(b"L'", reader, out),
        tokens::UTF_16_CHARACTER_CONSTANT => char_constant(b"u'", reader, out),
        tokens::UTF_32_CHARACTER_CONSTANT => char_constant(b"U'", reader, out),

        tokens::INT_CONSTANT => {
            let word = next_word(reader, "int constant")?;
            let _ = write!(out, "{}", word as i32);
            Ok(())
        }
        tokens::UNSIGNED_INT_CONSTANT => {
            let word = next_word(reader, "unsigned int constant")?;
            let _ = write!(out, "{word}u");
            Ok(())
        }
        tokens::LONG_INT_CONSTANT => {
            let word = next_word(reader, "long constant")?;
            let _ = write!(out, "{}l", word as i32);
            Ok(())
        }
        tokens::UNSIGNED_LONG_INT_CONSTANT => {
            let word = next_word(reader, "unsigned long constant")?;
            let _ = write!(out, "{word}ul");
            Ok(())
        }
        tokens::LONG_LONG_INT_CONSTANT => {
            let value = next_u64(reader, "long long constant")?;
            let _ = write!(out, "{}ll", value as i64);
            Ok(())
        }
        tokens::UNSIGNED_LONG_LONG_INT_CONSTANT => {
            let value = next_u64(reader, "unsigned long long constant")?;
            let _ = write!(out, "{value}ull");
            Ok(())
        }

        tokens::FLOAT_CONSTANT => {
            let word = next_word(reader, "float constant")?;
            let _ = write!(out, "{:.6}f", f32::from_bits(word));
            Ok(())
        }
        tokens::DOUBLE_CONSTANT => {
            let value = next_u64(reader, "double constant")?;
            let _ = write!(out, "{:.6}", f64::from_bits(value));
            Ok(())
        }
        tokens::LONG_DOUBLE_CONSTANT => {
            // Four payload words; the value lives in the first two.
            let value = next_u64(reader, "long double constant")?;
            next_u64(reader, "long double constant")?;
            let _ = write!(out, "{:.6}l", f64::from_bits(value));
            Ok(())
        }

        tokens::DECIMAL32_CONSTANT | tokens::DECIMAL64_CONSTANT | tokens::DECIMAL128_CONSTANT => {
            Err(Error::DecimalFloatUnsupported)
        }

        other => Err(Error::UnknownToken { token: other }),
    }
}

/// Quote-delimited literal: opening text, counted characters, `"`.
fn string_literal(open: &[u8], reader: &mut TokenReader<'_>, out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(open);
    let length = next_word(reader, "string literal")?;
    for _ in 0..length {
        let code_point = next_word(reader, "string literal")?;
        push_character(code_point, out);
    }
    out.push(b'"');
    Ok(())
}

/// Header name: counted code points emitted as UTF-8 between delimiters.
fn header_name(open: u8, close: u8, reader: &mut TokenReader<'_>, out: &mut Vec<u8>) -> Result<()> {
    out.push(open);
    let length = next_word(reader, "header name")?;
    for _ in 0..length {
        let code_point = next_word(reader, "header name")?;
        push_utf8(code_point, out);
    }
    out.push(close);
    Ok(())
}

/// Character constant: prefix, one character, closing apostrophe.
fn char_constant(open: &[u8], reader: &mut TokenReader<'_>, out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(open);
    let code_point = next_word(reader, "character constant")?;
    push_character(code_point, out);
    out.push(b'\'');
    Ok(())
}

fn next_word(reader: &mut TokenReader<'_>, what: &'static str) -> Result<u32> {
    reader.next().ok_or(Error::TruncatedStream { what })
}

fn next_u64(reader: &mut TokenReader<'_>, what: &'static str) -> Result<u64> {
    reader.next_u64().ok_or(Error::TruncatedStream { what })
}
