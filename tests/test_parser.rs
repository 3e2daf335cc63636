use std::io::Write;

use pretty_assertions::assert_eq;
use treefold::parser::{read_values, read_values_file, read_values_str};

#[test]
fn test_one_value_per_line() {
    let values = read_values_str("10\n5\n15\n3\n7\n");
    assert_eq!(values, vec![10, 5, 15, 3, 7]);
}

#[test]
fn test_whitespace_only_lines_are_skipped() {
    let values = read_values_str("1\n  \n\t\n\n2\n");
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_malformed_lines_are_skipped_silently() {
    let values = read_values_str("abc\n12\nx9\n--3\n34\n");
    assert_eq!(values, vec![12, 34]);
}

#[test]
fn test_trailing_content_is_ignored() {
    let values = read_values_str("42 ignored\n7extra\n12.5\n");
    assert_eq!(values, vec![42, 7, 12]);
}

#[test]
fn test_leading_whitespace_and_signs() {
    let values = read_values_str("   8\n\t-7\n+3\n- 1\n");
    // "- 1" has a sign with no adjacent digits and is skipped
    assert_eq!(values, vec![8, -7, 3]);
}

#[test]
fn test_out_of_range_lines_are_skipped() {
    let input = format!("99999999999\n{}\n{}\n-99999999999\n", i32::MAX, i32::MIN);
    assert_eq!(read_values_str(input), vec![i32::MAX, i32::MIN]);
}

#[test]
fn test_empty_input() {
    assert_eq!(read_values_str(""), Vec::<i32>::new());
    assert_eq!(read_values_str("   \nabc\n"), Vec::<i32>::new());
}

#[test]
fn test_crlf_line_endings() {
    let values = read_values("5\r\n6\r\n".as_bytes()).unwrap();
    assert_eq!(values, vec![5, 6]);
}

#[test]
fn test_last_line_without_newline() {
    let values = read_values("1\n2".as_bytes()).unwrap();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_non_utf8_lines_are_skipped() {
    let values = read_values(&b"\xff\xfe\n7\n"[..]).unwrap();
    assert_eq!(values, vec![7]);
}

#[test]
fn test_read_values_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "10\n\nabc\n-4\n").unwrap();

    let values = read_values_file(file.path()).unwrap();
    assert_eq!(values, vec![10, -4]);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_values_file(dir.path().join("does-not-exist.txt"));
    assert!(result.is_err());
}
