//! Property tests using proptest and quickcheck

use lexiscope::frontend::core::lexer::scan;
use lexiscope::util::diagnostic::DiagnosticCode;
use lexiscope::{analyze, Language, TokenKind};
use proptest::prelude::*;

fn language_strategy() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::Java), Just(Language::Cpp)]
}

/// Source-like text: mostly code fragments, with some arbitrary characters
fn source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[a-zA-Z_$][a-zA-Z0-9_]{0,6}",
        "[0-9]{1,4}(\\.[0-9]{1,3})?[fLd]?",
        Just("int ".to_string()),
        Just("if (".to_string()),
        Just("class C ".to_string()),
        Just("List<Map<K, V>> ".to_string()),
        "[ \t\n]{1,3}",
        "[-+*/=<>!&|^%?:;,.(){}\\[\\]]",
        Just("\"s\\\"x\"".to_string()),
        Just("'c'".to_string()),
        Just("/* c */".to_string()),
        Just("// line\n".to_string()),
        Just("#define X\n".to_string()),
        "\\PC",
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    /// Scanned spans, trivia included, rebuild the source exactly
    #[test]
    fn test_scan_covers_source(source in source_strategy(), language in language_strategy()) {
        let rebuilt: String = scan(&source, language).map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_scan_covers_arbitrary_text(source in any::<String>()) {
        let rebuilt: String = scan(&source, Language::Cpp).map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_analyze_idempotent(source in source_strategy(), language in language_strategy()) {
        prop_assert_eq!(analyze(&source, language), analyze(&source, language));
    }

    #[test]
    fn test_stats_normalised(source in source_strategy(), language in language_strategy()) {
        let result = analyze(&source, language);
        let counted = result.tokens.iter().filter(|t| t.kind != TokenKind::Error).count();
        let total: usize = result.lexeme_stats.iter().map(|s| s.count).sum();
        prop_assert_eq!(total, counted);
        if counted > 0 {
            let sum: f64 = result.lexeme_stats.iter().map(|s| s.frequency).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        } else {
            prop_assert!(result.lexeme_stats.is_empty());
        }
        prop_assert!(result.lexeme_stats.windows(2).all(|w| w[0].count >= w[1].count));
    }

    /// Stray closing braces are reported one by one and never pop `global`
    #[test]
    fn test_scope_floor(extra in 0usize..8, nested in 0usize..4) {
        let source = format!(
            "{}int a;{}int b;{}",
            "}".repeat(extra),
            "{".repeat(nested),
            "}".repeat(nested + extra)
        );
        let result = analyze(&source, Language::Java);
        let unmatched = result
            .diagnostics
            .iter()
            .filter(|d| d.code == DiagnosticCode::UnmatchedClosingBrace)
            .count();
        prop_assert_eq!(unmatched, 2 * extra);

        let scope_of = |lexeme: &str| {
            result
                .symbol_table
                .iter()
                .find(|e| e.lexeme == lexeme)
                .map(|e| e.scope.as_str().to_string())
        };
        let a = scope_of("a");
        prop_assert_eq!(a.as_deref(), Some("global"));
        let b = scope_of("b").unwrap_or_default();
        prop_assert_eq!(b.matches('/').count(), nested);
    }

    #[test]
    fn test_positions_are_one_based(source in source_strategy()) {
        for token in analyze(&source, Language::Java).tokens {
            prop_assert!(token.line >= 1 && token.column >= 1);
            prop_assert!(!token.kind.is_trivia());
        }
    }
}

mod quickcheck_tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    /// Every error token is exactly one character
    fn error_tokens_are_single_chars(source: String) -> bool {
        analyze(&source, Language::Java)
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Error)
            .all(|t| t.text.chars().count() == 1)
    }

    /// A lone integer assignment copies the literal
    fn integer_assignment(n: u32) -> TestResult {
        let result = analyze(&format!("x = {};", n), Language::Java);
        TestResult::from_bool(result.tac == vec![format!("x = {}", n)])
    }

    #[test]
    fn quickcheck_error_tokens() {
        quickcheck(error_tokens_are_single_chars as fn(String) -> bool);
    }

    #[test]
    fn quickcheck_integer_assignment() {
        quickcheck(integer_assignment as fn(u32) -> TestResult);
    }
}
