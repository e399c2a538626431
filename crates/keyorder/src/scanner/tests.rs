use alloc::string::{String, ToString};
use alloc::vec::Vec;

use test_log::test;

use super::*;

fn scan(doc: &str) -> KeyMap {
    crate::parse_slice(doc.as_bytes()).expect("document should scan")
}

fn scan_err(doc: &str) -> ScanError {
    crate::parse_slice(doc.as_bytes()).expect_err("document should be rejected")
}

fn keys(map: &KeyMap, path: &str) -> Vec<String> {
    map.get(path).unwrap_or_default().to_vec()
}

#[test]
fn flat_object_keys_in_declaration_order() {
    let map = scan(r#"{"zebra":1,"apple":"x","mango":true}"#);
    assert_eq!(keys(&map, "root"), ["zebra", "apple", "mango"]);
    assert_eq!(map.len(), 1);
}

#[test]
fn nested_object_recorded_under_dotted_path() {
    let map = scan(r#"{"name":"Tom","age":25,"favoriteFruits":{"a":"x","b":"y"}}"#);
    assert_eq!(keys(&map, "root"), ["name", "age", "favoriteFruits"]);
    assert_eq!(keys(&map, "root.favoriteFruits"), ["a", "b"]);
}

#[test]
fn deeper_nesting_extends_the_path() {
    let map = scan(r#"{"a":{"b":{"c":1},"d":2},"e":3}"#);
    assert_eq!(keys(&map, "root"), ["a", "e"]);
    assert_eq!(keys(&map, "root.a"), ["b", "d"]);
    assert_eq!(keys(&map, "root.a.b"), ["c"]);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    let map = scan("  \t{ \"a\" :\r\n 1 , \"b\" : \"two\" }\n");
    assert_eq!(keys(&map, "root"), ["a", "b"]);
}

#[test]
fn escaped_quote_stays_inside_the_key() {
    let map = scan(r#"{"is\"Cop":false}"#);
    assert_eq!(keys(&map, "root"), ["is\"Cop"]);
}

#[test]
fn escaped_backslash_stays_inside_the_key() {
    let map = scan(r#"{"a\\b":1}"#);
    assert_eq!(keys(&map, "root"), ["a\\b"]);
}

#[test]
fn escape_flag_is_consumed_by_the_next_byte() {
    // `\n` is not decoded; the backslash is dropped and `n` kept. The flag
    // must not linger, or the closing quote would be swallowed.
    let map = scan(r#"{"a\nb":1}"#);
    assert_eq!(keys(&map, "root"), ["anb"]);
}

#[test]
fn unicode_escapes_pass_through_as_literal_bytes() {
    let map = scan(r#"{"snow\u2603man":1}"#);
    assert_eq!(keys(&map, "root"), ["snowu2603man"]);
}

#[test]
fn multibyte_key_bytes_are_kept_verbatim() {
    let map = scan(r#"{"schlüssel":1,"雪":2}"#);
    assert_eq!(keys(&map, "root"), ["schlüssel", "雪"]);
}

#[test]
fn duplicate_keys_are_recorded_twice() {
    let map = scan(r#"{"a":1,"a":2}"#);
    assert_eq!(keys(&map, "root"), ["a", "a"]);
}

#[test]
fn string_value_contents_leave_no_trace() {
    let map = scan(r#"{"a":"{\"not\":\"an object\"}","b":1}"#);
    assert_eq!(keys(&map, "root"), ["a", "b"]);
    assert_eq!(map.len(), 1);
}

#[test]
fn bare_values_terminate_on_comma_and_brace() {
    let map = scan(r#"{"a":25,"b":true,"c":null,"d":-1.5e3}"#);
    assert_eq!(keys(&map, "root"), ["a", "b", "c", "d"]);
}

#[test]
fn object_as_last_value_closes_cleanly() {
    let map = scan(r#"{"a":{"b":1}}"#);
    assert_eq!(keys(&map, "root"), ["a"]);
    assert_eq!(keys(&map, "root.a"), ["b"]);
}

#[test]
fn sibling_after_nested_object_lands_on_the_parent() {
    let map = scan(r#"{"a":{"b":1},"c":2}"#);
    assert_eq!(keys(&map, "root"), ["a", "c"]);
}

#[test]
fn arrays_are_skipped_without_recording_keys() {
    let map = scan(r#"{"list":[1,"two",null],"after":1}"#);
    assert_eq!(keys(&map, "root"), ["list", "after"]);
    assert_eq!(map.len(), 1);
}

#[test]
fn array_skip_survives_brackets_inside_strings() {
    let map = scan(r#"{"list":["]","[\"]"],"after":1}"#);
    assert_eq!(keys(&map, "root"), ["list", "after"]);
}

#[test]
fn array_skip_survives_nested_arrays_and_objects() {
    let map = scan(r#"{"list":[[1,[2]],{"k":"]"},[]],"after":1}"#);
    assert_eq!(keys(&map, "root"), ["list", "after"]);
    // Keys of objects inside arrays are out of scope.
    assert!(map.get("root.list").is_none());
}

#[test]
fn trailing_bytes_after_root_close_are_ignored() {
    let map = scan("{\"a\":1}   \n garbage }{ ");
    assert_eq!(keys(&map, "root"), ["a"]);
}

#[test]
fn state_spans_chunk_boundaries_one_byte_at_a_time() {
    let doc = br#"{"is\"Cop":false,"nested":{"x":"va\\lue"}}"#;
    let mut scanner = Scanner::new(ScannerOptions::default());
    for byte in doc {
        scanner.feed(core::slice::from_ref(byte)).unwrap();
    }
    let map = scanner.finish().unwrap();
    assert_eq!(keys(&map, "root"), ["is\"Cop", "nested"]);
    assert_eq!(keys(&map, "root.nested"), ["x"]);
}

#[test]
fn custom_root_sentinel_is_used_for_all_paths() {
    let options = ScannerOptions {
        root_path_name: "$".into(),
    };
    let map = crate::parse_slice_with(br#"{"a":{"b":1}}"#, options).unwrap();
    assert_eq!(keys(&map, "$"), ["a"]);
    assert_eq!(keys(&map, "$.a"), ["b"]);
}

#[test]
fn fresh_parses_share_no_state() {
    let first = scan(r#"{"only":{"here":1}}"#);
    let second = scan(r#"{"other":2}"#);
    assert_eq!(keys(&first, "root"), ["only"]);
    assert_eq!(keys(&second, "root"), ["other"]);
    assert!(second.get("root.only").is_none());
}

#[test]
fn missing_colon_is_rejected_with_offset() {
    let err = scan_err(r#"{"a" "b":1}"#);
    assert_eq!(err.offset(), 5);
    match err.kind() {
        ErrorKind::Syntax(SyntaxError::InvalidCharacter { found, state }) => {
            assert_eq!(*found, '"');
            assert_eq!(*state, "key separator");
        }
        other => panic!("expected invalid character, got {other:?}"),
    }
}

#[test]
fn document_must_open_with_a_brace() {
    let err = scan_err(r#"["a","b"]"#);
    assert!(matches!(
        err.kind(),
        ErrorKind::Syntax(SyntaxError::InvalidCharacter { found: '[', .. })
    ));
    assert_eq!(err.offset(), 0);
}

#[test]
fn unquoted_key_is_rejected() {
    let err = scan_err(r#"{a:1}"#);
    assert!(matches!(
        err.kind(),
        ErrorKind::Syntax(SyntaxError::InvalidCharacter { found: 'a', .. })
    ));
}

#[test]
fn junk_between_value_and_separator_is_rejected() {
    let err = scan_err(r#"{"a":"x" q}"#);
    assert!(matches!(
        err.kind(),
        ErrorKind::Syntax(SyntaxError::InvalidCharacter { found: 'q', .. })
    ));
}

#[test]
fn truncated_document_fails_on_finish() {
    let mut scanner = Scanner::new(ScannerOptions::default());
    scanner.feed(br#"{"a":1"#).unwrap();
    let err = scanner.finish().expect_err("incomplete document");
    assert!(matches!(
        err.kind(),
        ErrorKind::Syntax(SyntaxError::UnexpectedEndOfInput)
    ));
    assert_eq!(err.offset(), 6);
}

#[test]
fn empty_input_fails_on_finish() {
    let err = crate::parse_slice(b"").expect_err("empty input");
    assert!(matches!(
        err.kind(),
        ErrorKind::Syntax(SyntaxError::UnexpectedEndOfInput)
    ));
}

#[test]
fn offset_counts_bytes_across_feeds() {
    let mut scanner = Scanner::new(ScannerOptions::default());
    scanner.feed(br#"{"a""#).unwrap();
    scanner.feed(br#":1}"#).unwrap();
    assert_eq!(scanner.offset(), 7);
}

#[test]
fn key_with_non_utf8_bytes_is_converted_lossily() {
    let doc: Vec<u8> = [b"{\"a" as &[u8], &[0xff], b"b\":1}"].concat();
    let map = crate::parse_slice(&doc).unwrap();
    assert_eq!(keys(&map, "root"), ["a\u{fffd}b".to_string()]);
}
