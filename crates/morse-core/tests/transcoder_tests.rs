//! Transcoder Tests
//!
//! Encode/decode behavior against the built-in table and custom tables.

use morse_core::{
    CaseFold, DecodedUnit, EmptyCode, EncodedUnit, TableError, TableSet, Transcoder, ITU_TABLE,
};

// ============================================================================
// Built-in Table
// ============================================================================

#[test]
fn test_default_uses_itu() {
    let t = Transcoder::default();
    assert_eq!(t.table().len(), ITU_TABLE.len());
}

#[test]
fn test_encode_sos() {
    let t = Transcoder::default();
    assert_eq!(t.encode("sos"), ".../---/.../");
}

#[test]
fn test_encode_sentence() {
    let t = Transcoder::default();
    assert_eq!(t.encode("Hi there"), "..../..//-/...././.-././");
}

#[test]
fn test_decode_sentence_default_policy() {
    let t = Transcoder::default();
    assert_eq!(t.decode("..../..//-/...././.-././"), "HI???? THERE");
}

#[test]
fn test_decode_sentence_skip_empty() {
    let t = Transcoder::default();
    assert_eq!(
        t.decode_with("..../..//-/...././.-././", EmptyCode::Skip),
        "HI THERE"
    );
}

#[test]
fn test_encode_punctuation_and_digits() {
    let t = Transcoder::default();
    assert_eq!(t.encode("73!"), "--.../...--/-.-.--/");
}

#[test]
fn test_encode_mixed_unknown() {
    let t = Transcoder::default();
    assert_eq!(t.encode("A#B"), ".-/??#??/-.../");
}

#[test]
fn test_encode_unknown_keeps_original_case() {
    let t = Transcoder::default();
    assert_eq!(t.encode("é"), "??é??/");
}

#[test]
fn test_encode_sharp_s_is_unknown() {
    let t = Transcoder::default();
    assert_eq!(t.encode("ß"), "??ß??/");
}

#[test]
fn test_decode_mixed_unknown() {
    let t = Transcoder::default();
    assert_eq!(t.decode(".-/......../-.../"), "A??........??B");
}

#[test]
fn test_encode_unknown_then_word_break_does_not_round_trip() {
    let t = Transcoder::default();
    let code = t.encode("# A");
    assert_eq!(code, "??#??//.-/");
    assert_eq!(t.decode(&code), "????#???????? A");
}

#[test]
fn test_multiline_encode() {
    let t = Transcoder::default();
    assert_eq!(t.encode("E\nT\n"), "./-/");
}

#[test]
fn test_empty_inputs() {
    let t = Transcoder::default();
    assert_eq!(t.encode(""), "");
    assert_eq!(t.decode(""), "");
    assert!(t.encode_units("").is_empty());
    assert!(t.decode_units("").is_empty());
}

#[test]
fn test_double_space() {
    let t = Transcoder::default();
    let code = t.encode("E  E");
    assert_eq!(code, ".///./");
    assert_eq!(t.decode_with(&code, EmptyCode::Skip), "E  E");
    assert_eq!(t.decode(&code), "E???? ???? E");
}

// ============================================================================
// Table Swap
// ============================================================================

#[test]
fn test_swap_affects_only_later_calls() {
    let mut t = Transcoder::default();
    let before = t.encode("E");
    t.set_table([("E", "-")]).unwrap();
    let after = t.encode("E");

    assert_eq!(before, "./");
    assert_eq!(after, "-/");
    assert_eq!(t.decode(&before), "??.??");
}

#[test]
fn test_failed_swap_keeps_behavior() {
    let mut t = Transcoder::default();
    let encoded = t.encode("Hello");
    let decoded = t.decode(&encoded);

    let err = t.set_table([("E", "."), ("", "-")]).unwrap_err();
    assert!(matches!(err, TableError::InvalidKey { .. }));

    assert_eq!(t.encode("Hello"), encoded);
    assert_eq!(t.decode(&encoded), decoded);
}

#[test]
fn test_cyrillic_table() {
    let mut t = Transcoder::default();
    t.set_table([("Д", "-.."), ("А", ".-")]).unwrap();
    assert_eq!(t.encode("да"), "-../.-/");
    assert_eq!(t.decode("-../.-/"), "ДА");
}

#[test]
fn test_lowercase_table() {
    let table = TableSet::from_chars([('a', ".-")]).with_case_fold(CaseFold::Lower);
    let t = Transcoder::new(table);
    assert_eq!(t.encode("A"), ".-/");
    assert_eq!(t.decode(".-/"), "a");
}

#[test]
fn test_collision_later_wins() {
    let mut t = Transcoder::default();
    t.set_table([("A", ".-"), ("Ä", ".-")]).unwrap();
    assert_eq!(t.encode("A"), ".-/");
    assert_eq!(t.decode(".-/"), "Ä");
    assert_eq!(t.table().shadowed(), vec!['A']);
}

// ============================================================================
// Units
// ============================================================================

#[test]
fn test_units_match_rendering() {
    let t = Transcoder::default();
    let units = t.encode_units("E T");
    assert_eq!(
        units,
        vec![
            EncodedUnit::Code("."),
            EncodedUnit::WordBreak,
            EncodedUnit::Code("-"),
        ]
    );
    assert_eq!(morse_core::render_encoded(&units), t.encode("E T"));
}

#[test]
fn test_decode_units_skip_empty() {
    let t = Transcoder::default();
    assert_eq!(
        t.decode_units_with(".//-/", EmptyCode::Skip),
        vec![
            DecodedUnit::Char('E'),
            DecodedUnit::WordBreak,
            DecodedUnit::Char('T'),
        ]
    );
}

// ============================================================================
// Thread Safety
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_send_sync() {
    assert_send_sync::<TableSet>();
    assert_send_sync::<Transcoder>();
    assert_send_sync::<DecodedUnit>();
    assert_send_sync::<EncodedUnit<'static>>();
    assert_send_sync::<TableError>();
}
