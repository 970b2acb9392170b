use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("empty.fl", "");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.source(), "");
    assert_eq!(buf.line(1), Some(""));
    assert_eq!(buf.line(2), None);
}

#[test]
fn keeps_filepath_verbatim() {
    let buf = SourceBuffer::new("../main.fl", "x");
    assert_eq!(buf.filepath(), "../main.fl");
}

#[test]
fn line_starts_are_indexed() {
    let buf = SourceBuffer::new("t.fl", "let\nx = 1\n");
    assert_eq!(buf.line_starts, vec![0, 4, 10]);
}

// === Line Lookup ===

#[test]
fn line_lookup_is_one_based() {
    let buf = SourceBuffer::new("t.fl", "first\nsecond\nthird");
    assert_eq!(buf.line(0), None);
    assert_eq!(buf.line(1), Some("first"));
    assert_eq!(buf.line(2), Some("second"));
    assert_eq!(buf.line(3), Some("third"));
    assert_eq!(buf.line(4), None);
}

#[test]
fn trailing_newline_opens_empty_line() {
    let buf = SourceBuffer::new("t.fl", "abc\n");
    assert_eq!(buf.line(1), Some("abc"));
    assert_eq!(buf.line(2), Some(""));
    assert_eq!(buf.line(3), None);
}

#[test]
fn crlf_terminators_are_stripped() {
    let buf = SourceBuffer::new("t.fl", "one\r\ntwo\r\n");
    assert_eq!(buf.line(1), Some("one"));
    assert_eq!(buf.line(2), Some("two"));
    assert_eq!(buf.line(3), Some(""));
}

#[test]
fn blank_lines_are_preserved() {
    let buf = SourceBuffer::new("t.fl", "a\n\n\nb");
    assert_eq!(buf.line(2), Some(""));
    assert_eq!(buf.line(3), Some(""));
    assert_eq!(buf.line(4), Some("b"));
}

#[test]
fn line_width_counts_characters() {
    let buf = SourceBuffer::new("t.fl", "abc\n\u{e9}t\u{e9}");
    assert_eq!(buf.line_width(1), Some(3));
    // Three characters, five bytes.
    assert_eq!(buf.line_width(2), Some(3));
    assert_eq!(buf.line_width(3), None);
}

// === Slicing ===

#[test]
fn slice_line_extracts_lexeme() {
    let buf = SourceBuffer::new("t.fl", "foo 12.5\nbar");
    assert_eq!(buf.slice_line(1, 1, 3), Some("foo"));
    assert_eq!(buf.slice_line(1, 5, 4), Some("12.5"));
    assert_eq!(buf.slice_line(2, 1, 3), Some("bar"));
    assert_eq!(buf.slice_line(2, 3, 1), Some("r"));
}

#[test]
fn slice_line_rejects_out_of_bounds() {
    let buf = SourceBuffer::new("t.fl", "abc");
    assert_eq!(buf.slice_line(1, 0, 1), None);
    assert_eq!(buf.slice_line(1, 4, 1), None);
    assert_eq!(buf.slice_line(1, 3, 2), None);
    assert_eq!(buf.slice_line(2, 1, 1), None);
}

#[test]
fn slice_line_counts_columns_in_characters() {
    let buf = SourceBuffer::new("t.fl", "\u{e9}# x");
    assert_eq!(buf.slice_line(1, 1, 1), Some("\u{e9}"));
    assert_eq!(buf.slice_line(1, 2, 1), Some("#"));
    assert_eq!(buf.slice_line(1, 4, 1), Some("x"));
}

#[test]
fn zero_length_slice_is_empty() {
    let buf = SourceBuffer::new("t.fl", "abc");
    assert_eq!(buf.slice_line(1, 2, 0), Some(""));
}

// === File Loading ===

#[test]
fn from_file_reads_whole_file() {
    let Ok(mut file) = tempfile::NamedTempFile::new() else {
        panic!("failed to create temp file");
    };
    let Ok(()) = file.write_all(b"abc\n12.5\n") else {
        panic!("failed to write temp file");
    };

    let buf = match SourceBuffer::from_file(file.path()) {
        Ok(buf) => buf,
        Err(e) => panic!("expected file to load: {e}"),
    };
    assert_eq!(buf.source(), "abc\n12.5\n");
    assert_eq!(buf.filepath(), file.path().display().to_string());
    assert_eq!(buf.line(2), Some("12.5"));
}

#[test]
fn from_file_reports_missing_file() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("failed to create temp dir");
    };
    let missing = dir.path().join("missing.fl");

    let Err(err) = SourceBuffer::from_file(&missing) else {
        panic!("expected missing file to fail");
    };
    assert!(matches!(err, SourceError::NotFound { .. }));
    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().starts_with("cannot find file"));
    assert!(err.to_string().contains("missing.fl"));
}

#[test]
fn from_file_reports_invalid_utf8() {
    let Ok(mut file) = tempfile::NamedTempFile::new() else {
        panic!("failed to create temp file");
    };
    let Ok(()) = file.write_all(&[b'a', 0xFF, 0xFE, b'b']) else {
        panic!("failed to write temp file");
    };

    let Err(err) = SourceBuffer::from_file(file.path()) else {
        panic!("expected invalid UTF-8 to fail");
    };
    assert!(matches!(err, SourceError::InvalidUtf8 { .. }));
    assert!(err.to_string().contains("invalid UTF-8"));
}

#[test]
fn directory_is_not_a_source_file() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("failed to create temp dir");
    };
    assert!(SourceBuffer::from_file(dir.path()).is_err());
}
