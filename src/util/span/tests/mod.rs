//! Position and line index tests

use super::{Position, SourceFile};

#[test]
fn test_advance_same_line() {
    let mut pos = Position::start();
    pos.advance("abc");
    assert_eq!((pos.line, pos.column, pos.offset), (1, 4, 3));
}

#[test]
fn test_advance_across_newlines() {
    let mut pos = Position::start();
    pos.advance("ab\ncd\nxyz");
    assert_eq!((pos.line, pos.column), (3, 4));
    assert_eq!(pos.offset, 9);
}

#[test]
fn test_columns_count_characters() {
    let mut pos = Position::start();
    pos.advance("é§");
    assert_eq!(pos.column, 3);
    assert_eq!(pos.offset, 4);
}

#[test]
fn test_source_file_lines() {
    let file = SourceFile::new("a.java".to_string(), "one\r\ntwo\n\nfour".to_string());
    assert_eq!(file.line_text(1), Some("one"));
    assert_eq!(file.line_text(2), Some("two"));
    assert_eq!(file.line_text(3), Some(""));
    assert_eq!(file.line_text(4), Some("four"));
    assert_eq!(file.line_text(0), None);
    assert_eq!(file.line_text(5), None);
}
