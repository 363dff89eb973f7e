//! Integration tests for the public analysis API

use lexiscope::samples::sample_code;
use lexiscope::util::diagnostic::DiagnosticCode;
use lexiscope::{analyze, analyze_file, flow_request_for_file, Language, LexiscopeError, TokenKind};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_declaration_example() {
    let result = analyze("int x = 5;", Language::Java);
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::LiteralNumber,
            TokenKind::Punctuation,
        ]
    );
    let x = result.symbol_table.iter().find(|e| e.lexeme == "x").unwrap();
    assert_eq!(x.data_type.as_deref(), Some("int"));
    assert_eq!(x.line_numbers.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_expression_example() {
    let result = analyze("a = b + c * d;", Language::Java);
    assert_eq!(result.tac, vec!["t1 = b + c", "t2 = t1 * d", "a = t2"]);
}

#[test]
fn test_if_example() {
    let result = analyze("if (x > 0) { y = 1; }", Language::Java);
    assert_eq!(&result.tac[..2], &["if_false x > 0 goto L1", "L1:"]);
}

#[test]
fn test_stray_character_example() {
    let clean = analyze("int a = 1;\nint b = 2;", Language::Java);
    let dirty = analyze("int a = 1;\nint b @= 2;", Language::Java);

    let errors: Vec<_> = dirty.error_tokens().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].line, errors[0].column), (2, 7));

    let without_errors: Vec<_> = dirty
        .tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Error)
        .map(|t| (t.kind, t.text.clone(), t.line))
        .collect();
    let expected: Vec<_> = clean
        .tokens
        .iter()
        .map(|t| (t.kind, t.text.clone(), t.line))
        .collect();
    assert_eq!(without_errors, expected);
    assert_eq!(dirty.diagnostics[0].code, DiagnosticCode::InvalidCharacter);
}

#[test]
fn test_samples_both_languages() {
    for language in [Language::Java, Language::Cpp] {
        let result = analyze(sample_code(language), language);
        assert!(result.symbol_table.iter().any(|e| e.scope.as_str().contains("function:")));
        assert!(result.tac.iter().any(|line| line.starts_with("if_false ")));
        let total: usize = result.lexeme_stats.iter().map(|s| s.count).sum();
        assert_eq!(total, result.tokens.len());
    }
}

#[test]
fn test_analyze_file_uses_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.cpp");
    fs::write(&path, "int* p = nullptr;").unwrap();

    let result = analyze_file(&path, Language::Java).unwrap();
    assert_eq!(result.tokens[0].kind, TokenKind::Keyword);
    assert!(result.symbol_table.iter().any(|e| e.lexeme == "nullptr"));
}

#[test]
fn test_analyze_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snippet.txt");
    fs::write(&path, "nullptr").unwrap();

    let result = analyze_file(&path, Language::Java).unwrap();
    assert_eq!(result.tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn test_missing_file() {
    let err = analyze_file(std::path::Path::new("/nonexistent/a.java"), Language::Java).unwrap_err();
    assert!(matches!(err, LexiscopeError::Io { .. }));
}

#[test]
fn test_flow_request_for_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Main.java");
    fs::write(&path, "class Main {}").unwrap();

    let request = flow_request_for_file(&path, Language::Cpp).unwrap();
    assert_eq!(request.language, Language::Java);
    assert_eq!(request.code, "class Main {}");
}
