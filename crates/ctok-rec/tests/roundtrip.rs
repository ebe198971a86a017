//! Decompose/recompose roundtrip tests.
//!
//! The primary property: for accepted source `S`, recomposing its stream
//! yields text `S2` with `decompose(S2) == decompose(S)`. Byte equality
//! of the text is not promised in general (comments and exotic spellings
//! are lossy), but many plain sources do come back verbatim.

use ctok_lex::decompose;
use ctok_rec::{recompose, MeaningTable};

/// Decompose, recompose, and return the reconstructed text.
fn reconstruct(source: &str) -> String {
    let (stream, symbols) = decompose(source.as_bytes().to_vec(), false).expect("decompose");
    let meanings = MeaningTable::from_symbol_table(&symbols);
    let mut text = Vec::new();
    recompose(&stream, &meanings, &mut text).expect("recompose");
    String::from_utf8(text).expect("reconstructed text is UTF-8")
}

/// Assert the stream-equality roundtrip property for `source`.
fn assert_stable(source: &str) {
    let (first, _) = decompose(source.as_bytes().to_vec(), false).expect("decompose");
    let text = reconstruct(source);
    let (second, _) = decompose(text.as_bytes().to_vec(), false)
        .unwrap_or_else(|err| panic!("reconstructed text failed to tokenize: {err}\n{text}"));
    assert_eq!(
        first.words(),
        second.words(),
        "stream changed across roundtrip\nreconstructed: {text}"
    );
}

#[test]
fn test_simple_declaration_is_verbatim() {
    assert_eq!(reconstruct("int x = 42;"), "int x = 42;");
}

#[test]
fn test_string_literal_is_verbatim() {
    assert_eq!(reconstruct("\"hi\\n\""), "\"hi\\n\"");
}

#[test]
fn test_include_is_verbatim() {
    assert_eq!(reconstruct("#include <stdio.h>"), "#include <stdio.h>");
}

#[test]
fn test_suffixed_constants_normalize() {
    assert_eq!(reconstruct("0xFFu + 1LL"), "255u + 1ll");
}

#[test]
fn test_comment_collapses_to_space() {
    assert_eq!(reconstruct("// hi\nx;"), " \nx;");
}

#[test]
fn test_emoji_char_constant_becomes_ucn() {
    assert_eq!(reconstruct("U'😳'"), "U'\\U0001F633'");
}

#[test]
fn test_function_definition_stable() {
    assert_stable(
        "int main(void) {\n    unsigned long total = 0ul;\n    for (int i = 0; i < 10; ++i) {\n        total += i;\n    }\n    return 0;\n}\n",
    );
}

#[test]
fn test_all_directives_stable() {
    assert_stable(
        "#if A\n#elif B\n#elifdef C\n#elifndef D\n#else\n#endif\n#ifdef E\n#endif\n#ifndef F\n#endif\n#define G 1\n#undef G\n#line 7\n#pragma once\n",
    );
}

#[test]
fn test_include_forms_stable() {
    assert_stable("#include <stdio.h>\n#include \"local.h\"\n#embed <logo.png>\n");
}

#[test]
fn test_string_prefixes_stable() {
    assert_stable("char *a = \"plain\";\n");
    assert_stable("L\"wide\" u\"sixteen\" U\"thirtytwo\" u8\"eight\"");
}

#[test]
fn test_char_constant_forms_stable() {
    assert_stable("'a' L'b' u'c' U'd' u8'e' '\\n' '\\0' '\\x41' '\\101'");
}

#[test]
fn test_numeric_zoo_stable() {
    assert_stable("0 1 42 0x10 0755 0b101 1'000'000");
    assert_stable("1u 2l 3ul 4ll 5ull 6U 7L");
    assert_stable("1.5 2.5f 3.5l 1e3 1e+3");
    assert_stable("2147483647 2147483648 0xFFFFFFFF 0x100000000");
}

#[test]
fn test_operator_zoo_stable() {
    assert_stable("a+++b --c <<= >>= ... :: -> != <= >= && || ^= %= ~!");
}

#[test]
fn test_digraphs_canonicalize_then_stay_stable() {
    let text = reconstruct("<: :> <% %> %:%:");
    assert_eq!(text, "[ ] { } ##");
    assert_stable("<: :> <% %> %:%:");
}

#[test]
fn test_keywords_and_alternates_stable() {
    assert_stable(
        "alignas alignof auto bool break case char const constexpr continue default do double else enum extern false float for goto if inline int long nullptr register restrict return short signed sizeof static static_assert struct switch thread_local true typedef typeof typeof_unqual union unsigned void volatile while",
    );
    assert_stable("_Atomic _BitInt _Complex _Decimal128 _Decimal32 _Decimal64 _Generic _Imaginary _Noreturn");
    // Alternate spellings normalize to their canonical forms.
    assert_eq!(reconstruct("_Bool _Alignas"), "bool alignas");
    assert_stable("_Bool _Alignas _Alignof _Thread_local _Static_assert");
}

#[test]
fn test_escaped_quotes_stable() {
    assert_stable("\"a\\\"b\" \"\\\\\" '\\''");
}

#[test]
fn test_ucn_identifier_stable() {
    assert_stable("int caf\\u00E9 = 1;");
}

#[test]
fn test_line_continuation_splices_before_tokenizing() {
    // The continuation disappears in phase 2, so both spellings share a
    // stream.
    let (spliced, _) = decompose(b"int ma\\\nin;".to_vec(), false).unwrap();
    let (plain, _) = decompose(b"int main;".to_vec(), false).unwrap();
    assert_eq!(spliced.words(), plain.words());
}

#[test]
fn test_block_comment_stable() {
    assert_eq!(reconstruct("a/*comment*/b"), "a b");
    assert_stable("a/*comment*/b");
}

#[test]
fn test_whitespace_preserved_exactly() {
    assert_eq!(reconstruct("a \t b\n\nc"), "a \t b\n\nc");
}

#[test]
fn test_crlf_normalizes_to_lf() {
    assert_eq!(reconstruct("a\r\nb\rc"), "a\nb\nc");
}

#[test]
fn test_small_program_through_token_file() {
    // Full pipeline including the binary artifact.
    let dir = tempfile::tempdir().unwrap();
    let tok_path = dir.path().join("prog.tok");
    let out_path = dir.path().join("prog.c");

    let source = "#include <stdio.h>\n\nint main(void) {\n    printf(\"%d\\n\", 42);\n    return 0;\n}\n";
    let (stream, symbols) = decompose(source.as_bytes().to_vec(), false).unwrap();
    ctok_codec::write_token_file(&tok_path, &stream, &symbols).unwrap();

    ctok_rec::recompose_file(&tok_path, &out_path, false).unwrap();
    let text = std::fs::read_to_string(&out_path).unwrap();

    let (again, _) = decompose(text.clone().into_bytes(), false).unwrap();
    assert_eq!(stream.words(), again.words(), "reconstructed: {text}");
}
