//! Lexer state management
//!
//! Language tables (reserved words, type keywords, operators) and the small
//! amount of state the scanner carries between tokens: the previous
//! significant token and the angle-bracket depth used to keep generic
//! brackets from collapsing into shift or comparison operators.

use crate::frontend::core::lexer::tokens::{Token, TokenKind};
use crate::util::diagnostic::LexiscopeError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Source language
///
/// Java is the primary language, C++ the alternate one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Cpp,
}

impl Language {
    /// Immutable tables of this language
    pub fn spec(&self) -> &'static LanguageSpec {
        match self {
            Language::Java => &JAVA,
            Language::Cpp => &CPP,
        }
    }

    /// Lower-case name used on the wire (`java` / `cpp`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// Infer the language from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Infer the language from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for Language {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = LexiscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            _ => Err(LexiscopeError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Reserved words, type keywords and operators of one language
#[derive(Debug)]
pub struct LanguageSpec {
    pub language: Language,
    pub keywords: HashSet<&'static str>,
    /// Keywords that denote a data type and start a declaration
    pub type_keywords: HashSet<&'static str>,
    /// `null` / `nullptr`
    pub null_keyword: &'static str,
    /// Data type recorded for boolean literals
    pub boolean_type: &'static str,
    /// Data type recorded for string literals
    pub string_type: &'static str,
    /// Multi-character operators, longest first
    pub operators: Vec<&'static str>,
    /// `#...` lines are preprocessor directives
    pub preprocessor: bool,
}

impl LanguageSpec {
    /// Reserved word check
    pub fn is_keyword(
        &self,
        word: &str,
    ) -> bool {
        self.keywords.contains(word)
    }

    /// Type keyword check (`int`, `double`, ...)
    pub fn is_type_keyword(
        &self,
        word: &str,
    ) -> bool {
        self.type_keywords.contains(word)
    }

    /// Classify an identifier-shaped word
    pub fn classify_word(
        &self,
        word: &str,
    ) -> TokenKind {
        match word {
            "true" | "false" if self.is_keyword(word) => TokenKind::LiteralBoolean,
            w if self.is_keyword(w) => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        }
    }
}

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
    "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval",
    "constexpr", "constinit", "const_cast", "continue", "co_await", "co_return", "co_yield",
    "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit",
    "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "private", "protected", "public", "reflexpr", "register", "reinterpret_cast",
    "requires", "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast",
    "struct", "switch", "synchronized", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
    // library names treated as reserved
    "string", "vector", "map", "set", "cout", "cin", "endl", "std",
];

/// Type keywords shared by both languages; each language keeps the ones it
/// actually reserves.
const TYPE_KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "boolean", "void", "string", "auto", "long", "short",
    "signed", "unsigned", "byte", "wchar_t", "bool", "char8_t", "char16_t", "char32_t",
];

/// Storage modifiers: transparent to a pending declaration hint
pub const STORAGE_MODIFIERS: &[&str] = &[
    "static", "final", "const", "public", "private", "protected", "volatile", "transient",
    "extern", "register", "mutable", "constexpr", "inline", "abstract",
];

/// Keywords that introduce a named type or namespace
pub const DECLARATOR_KEYWORDS: &[&str] =
    &["class", "struct", "enum", "interface", "union", "namespace"];

/// Keywords whose parenthesised header precedes a control block
pub const CONTROL_KEYWORDS: &[&str] = &["if", "while", "for", "switch", "catch"];

/// Keywords directly followed by a control block
pub const BLOCK_KEYWORDS: &[&str] = &["else", "do", "try", "finally"];

const JAVA_OPERATORS: &[&str] = &[
    ">>>=", ">>>", "<<=", ">>=", "->", "::", "++", "--", "==", "!=", ">=", "<=", "&&", "||", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>",
];

const CPP_OPERATORS: &[&str] = &[
    "<<=", ">>=", "->", "::", "++", "--", "==", "!=", ">=", "<=", "&&", "||", "+=", "-=", "*=",
    "/=", "%=", "&=", "|=", "^=", "<<", ">>",
];

/// Single-character operators
pub const SINGLE_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '!', '&', '|', '^', '~', '<', '>', '?', '.', ',',
];

/// Single-character punctuation
pub const PUNCTUATION: &[char] = &[';', '{', '}', '(', ')', '[', ']', ':'];

fn build_spec(
    language: Language,
    keywords: &[&'static str],
    operators: &[&'static str],
) -> LanguageSpec {
    let keywords: HashSet<&'static str> = keywords.iter().copied().collect();
    let type_keywords = TYPE_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| keywords.contains(kw))
        .collect();
    let mut operators = operators.to_vec();
    // stable, so equal lengths keep table order
    operators.sort_by_key(|op| std::cmp::Reverse(op.len()));

    let (null_keyword, boolean_type, string_type, preprocessor) = match language {
        Language::Java => ("null", "boolean", "String", false),
        Language::Cpp => ("nullptr", "bool", "string", true),
    };

    LanguageSpec {
        language,
        keywords,
        type_keywords,
        null_keyword,
        boolean_type,
        string_type,
        operators,
        preprocessor,
    }
}

static JAVA: Lazy<LanguageSpec> =
    Lazy::new(|| build_spec(Language::Java, JAVA_KEYWORDS, JAVA_OPERATORS));

static CPP: Lazy<LanguageSpec> = Lazy::new(|| build_spec(Language::Cpp, CPP_KEYWORDS, CPP_OPERATORS));

/// Previous significant token, as far as the bracket heuristic cares
#[derive(Debug, Clone, Copy)]
struct LastSignificant {
    kind: TokenKind,
    end_offset: usize,
}

/// Per-scan lexer state
#[derive(Debug)]
pub struct LexerState {
    spec: &'static LanguageSpec,
    last: Option<LastSignificant>,
    generic_depth: usize,
}

impl LexerState {
    /// Create new lexer state
    pub fn new(language: Language) -> Self {
        Self {
            spec: language.spec(),
            last: None,
            generic_depth: 0,
        }
    }

    /// Active language tables
    pub fn spec(&self) -> &'static LanguageSpec {
        self.spec
    }

    /// Whether a `<` at `offset` opens a generic bracket.
    ///
    /// Character-lookahead heuristic: the `<` must be glued to an identifier
    /// or keyword and followed by an identifier start, `>` or `?`. It cannot
    /// tell `a<b>c` from a comparison chain in general.
    pub fn opens_generic(
        &self,
        offset: usize,
        after: Option<char>,
    ) -> bool {
        let glued = matches!(
            self.last,
            Some(LastSignificant { kind: TokenKind::Identifier | TokenKind::Keyword, end_offset })
                if end_offset == offset
        );
        glued
            && matches!(after, Some(c) if c == '>' || c == '?' || super::literals::is_identifier_start(c))
    }

    /// Whether a `>` must close a generic bracket instead of extending into
    /// `>>`, `>=`, `>>=`, `>>>` or `>>>=`
    pub fn closes_generic(&self) -> bool {
        self.generic_depth > 0
    }

    /// Record a freshly scanned token
    pub fn note(
        &mut self,
        token: &Token,
        generic_open: bool,
    ) {
        if token.kind.is_trivia() {
            return;
        }

        if generic_open {
            self.generic_depth += 1;
        } else if token.is_op(">") && self.generic_depth > 0 {
            self.generic_depth -= 1;
        } else if breaks_generic(token) {
            self.generic_depth = 0;
        }

        self.last = Some(LastSignificant {
            kind: token.kind,
            end_offset: token.offset + token.text.len(),
        });
    }
}

/// Operators that never occur inside a type argument list
const GENERIC_BREAKING_OPERATORS: &[&str] = &[
    "&&", "||", "=", "==", "!=", "<=", ">=", "+", "-", "/", "%", "!", "+=", "-=", "*=", "/=", "%=",
];

/// Tokens after which an open generic bracket is assumed to have been a
/// comparison after all
fn breaks_generic(token: &Token) -> bool {
    match token.kind {
        TokenKind::Punctuation => matches!(token.text.as_str(), ";" | "{" | "}" | "(" | ")"),
        TokenKind::Operator => GENERIC_BREAKING_OPERATORS.contains(&token.text.as_str()),
        TokenKind::LiteralString
        | TokenKind::LiteralNumber
        | TokenKind::LiteralBoolean
        | TokenKind::LiteralChar => true,
        _ => false,
    }
}
