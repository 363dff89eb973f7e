//! Analyzer tests

use super::{analyze, Analyzer, Language, TokenKind};
use crate::util::diagnostic::{DiagnosticCode, Severity};

#[test]
fn test_simple_declaration() {
    let result = analyze("int x = 5;", Language::Java);
    let tokens: Vec<_> = result
        .tokens
        .iter()
        .map(|t| (t.kind, t.text.as_str()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Keyword, "int"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "="),
            (TokenKind::LiteralNumber, "5"),
            (TokenKind::Punctuation, ";"),
        ]
    );

    let x = &result.symbol_table[0];
    assert_eq!(x.lexeme, "x");
    assert_eq!(x.data_type.as_deref(), Some("int"));
    assert_eq!(x.line_numbers.iter().copied().collect::<Vec<_>>(), vec![1]);

    assert_eq!(result.tac, vec!["x = 5"]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_stray_character() {
    let result = analyze("a = 1;\nb @= 2;", Language::Java);
    let errors: Vec<_> = result.error_tokens().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].line, errors[0].column), (2, 3));
    assert!(result.has_errors());
    assert_eq!(result.errors().count(), 1);
    // `@` is skipped, so `b = 2` is still an assignment
    assert_eq!(result.tac, vec!["a = 1", "b = 2"]);
}

#[test]
fn test_diagnostics_sorted_by_position() {
    let result = analyze("}\nx = ;\nif () {}\ny = @;", Language::Java);
    let positions: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| (d.position.line, d.position.column))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);

    let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code).collect();
    assert!(codes.contains(&DiagnosticCode::UnmatchedClosingBrace));
    assert!(codes.contains(&DiagnosticCode::EmptyAssignment));
    assert!(codes.contains(&DiagnosticCode::MalformedIf));
    assert!(codes.contains(&DiagnosticCode::InvalidCharacter));
}

#[test]
fn test_warnings_are_not_errors() {
    let result = analyze("int x;\nfloat x;\n}", Language::Java);
    assert_eq!(result.diagnostics.len(), 2);
    assert!(!result.has_errors());
    assert_eq!(result.diagnostics_at_least(Severity::Warning).count(), 2);
}

#[test]
fn test_idempotent() {
    let analyzer = Analyzer::new(Language::Cpp);
    let source = "int main() {\n  int a = 1;\n  if (a < 2) { a = a + 1; }\n}";
    assert_eq!(analyzer.analyze(source), analyzer.analyze(source));
}

#[test]
fn test_json_shape() {
    let result = analyze("int x = 5;", Language::Java);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["tokens"][0]["kind"], "KEYWORD");
    assert_eq!(value["tokens"][0]["line"], 1);
    assert_eq!(value["symbolTable"][0]["dataType"], "int");
    assert_eq!(value["symbolTable"][0]["lineNumbers"][0], 1);
    assert_eq!(value["symbolTable"][1]["attributes"]["isConstant"], true);
    assert_eq!(value["symbolTable"][1]["attributes"]["value"], 5);
    assert_eq!(value["lexemeStats"][0]["count"], 1);
    assert_eq!(value["tac"][0], "x = 5");
    assert!(value["symbolTable"][0]["attributes"].get("isConstant").is_none());
}
