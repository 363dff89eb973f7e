//! Lexeme statistics
//!
//! Frequency of every token kind in a finalized token stream.

use crate::frontend::core::lexer::{Token, TokenKind};
use indexmap::IndexMap;
use serde::Serialize;

/// How often one token kind occurs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexemeStat {
    pub kind: TokenKind,
    pub count: usize,
    /// `count / total`, with error tokens excluded from the total
    pub frequency: f64,
}

/// Count token kinds, most frequent first.
///
/// Error tokens and trivia are not counted. Kinds with equal counts keep
/// the order in which they were first seen.
pub fn compute_stats(tokens: &[Token]) -> Vec<LexemeStat> {
    let mut counts: IndexMap<TokenKind, usize> = IndexMap::new();
    for token in tokens {
        if token.kind == TokenKind::Error || token.kind.is_trivia() {
            continue;
        }
        *counts.entry(token.kind).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    let mut stats: Vec<LexemeStat> = counts
        .into_iter()
        .map(|(kind, count)| LexemeStat {
            kind,
            count,
            frequency: count as f64 / total as f64,
        })
        .collect();
    // sort_by is stable
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::core::lexer::{tokenize, Language};

    fn stats(source: &str) -> Vec<LexemeStat> {
        compute_stats(&tokenize(source, Language::Java).tokens)
    }

    #[test]
    fn test_empty_input() {
        assert!(stats("").is_empty());
        assert!(stats("@ #").is_empty());
    }

    #[test]
    fn test_counts_and_order() {
        let result = stats("int x = 5;");
        let kinds: Vec<_> = result.iter().map(|s| s.kind).collect();
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
        assert!(result.iter().all(|s| s.count == 1 && (s.frequency - 0.2).abs() < 1e-9));
    }

    #[test]
    fn test_sorted_by_count() {
        let result = stats("a = b + c;");
        assert_eq!(result[0].kind, TokenKind::Identifier);
        assert_eq!(result[0].count, 3);
        assert_eq!(result[1].kind, TokenKind::Operator);
        assert_eq!(result[1].count, 2);
        assert_eq!(result[2].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_errors_excluded() {
        let result = stats("a @ b");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].count, 2);
        assert_eq!(result[0].frequency, 1.0);
    }
}
