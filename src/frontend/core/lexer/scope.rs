//! Scope identifiers, the scope stack and block naming

use super::state::{BLOCK_KEYWORDS, CONTROL_KEYWORDS, DECLARATOR_KEYWORDS};
use super::tokens::{Token, TokenKind};
use crate::util::span::Position;
use serde::Serialize;

/// Name of the outermost scope
pub const GLOBAL_SCOPE: &str = "global";

/// Path of a scope from the root, e.g. `global/function:main@L3C10`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScopeId(String);

impl ScopeId {
    /// The root scope
    pub fn global() -> Self {
        ScopeId(GLOBAL_SCOPE.to_string())
    }

    /// Child scope opened at `at`
    pub fn child(
        &self,
        label: &ScopeLabel,
        at: Position,
    ) -> Self {
        ScopeId(format!("{}/{}@L{}C{}", self.0, label, at.line, at.column))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_SCOPE
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::global()
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cosmetic label of a brace block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeLabel {
    /// `name ( ... ) {`
    Function(String),
    /// `class Name {`, `namespace Name {`, ...
    Declared { keyword: String, name: String },
    /// Body of `if`/`while`/`for`/`switch`/`catch`/`else`/`do`/`try`/`finally`
    ControlBlock,
    Block,
}

impl std::fmt::Display for ScopeLabel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ScopeLabel::Function(name) => write!(f, "function:{}", name),
            ScopeLabel::Declared { keyword, name } => write!(f, "{}:{}", keyword, name),
            ScopeLabel::ControlBlock => f.write_str("control_block"),
            ScopeLabel::Block => f.write_str("block"),
        }
    }
}

/// Trailing qualifiers allowed between a parameter list and the body
const SIGNATURE_QUALIFIERS: &[&str] = &["const", "throws", "noexcept", "override", "final"];

impl ScopeLabel {
    /// Name the block opened by a `{` that follows `statement`, the
    /// significant tokens since the last `;`, `{` or `}`
    pub fn for_statement(statement: &[Token]) -> Self {
        if let Some(close) = signature_end(statement) {
            return match matching_open(statement, close) {
                Some(open) if open > 0 => label_before_parens(statement, open),
                _ => ScopeLabel::Block,
            };
        }

        if let Some(pair) = statement.windows(2).find(|pair| {
            pair[0].kind == TokenKind::Keyword
                && DECLARATOR_KEYWORDS.contains(&pair[0].text.as_str())
                && pair[1].kind == TokenKind::Identifier
        }) {
            return ScopeLabel::Declared {
                keyword: pair[0].text.clone(),
                name: pair[1].text.clone(),
            };
        }

        match statement.last() {
            Some(last)
                if last.kind == TokenKind::Keyword
                    && BLOCK_KEYWORDS.contains(&last.text.as_str()) =>
            {
                ScopeLabel::ControlBlock
            }
            _ => ScopeLabel::Block,
        }
    }
}

/// Index of the `)` closing a parameter list or condition, allowing
/// `const`, `throws A, B` and similar after it
fn signature_end(statement: &[Token]) -> Option<usize> {
    let close = statement.iter().rposition(|t| t.is_punct(")"))?;
    let tail = &statement[close + 1..];
    let qualified = match tail.first() {
        None => true,
        Some(first) => {
            matches!(first.kind, TokenKind::Keyword | TokenKind::Identifier)
                && SIGNATURE_QUALIFIERS.contains(&first.text.as_str())
                && tail[1..].iter().all(|t| {
                    matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword)
                        || t.is_op(",")
                        || t.is_op(".")
                        || t.is_op("::")
                })
        }
    };
    qualified.then_some(close)
}

/// Index of the `(` matching the `)` at `close`
fn matching_open(
    statement: &[Token],
    close: usize,
) -> Option<usize> {
    let mut depth = 0usize;
    for i in (0..=close).rev() {
        let token = &statement[i];
        if token.is_punct(")") {
            depth += 1;
        } else if token.is_punct("(") {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn label_before_parens(
    statement: &[Token],
    open: usize,
) -> ScopeLabel {
    let head = &statement[open - 1];
    match head.kind {
        TokenKind::Keyword
            if CONTROL_KEYWORDS.contains(&head.text.as_str())
                || BLOCK_KEYWORDS.contains(&head.text.as_str()) =>
        {
            ScopeLabel::ControlBlock
        }
        TokenKind::Identifier if defines_function(statement[..open - 1].last()) => {
            ScopeLabel::Function(head.text.clone())
        }
        _ => ScopeLabel::Block,
    }
}

/// Whether the token before `name (` allows a function definition shape
fn defines_function(before: Option<&Token>) -> bool {
    let Some(before) = before else {
        return true;
    };
    match before.kind {
        TokenKind::Keyword => before.text != "new",
        TokenKind::Identifier => true,
        TokenKind::Operator => matches!(before.text.as_str(), ">" | "*" | "&" | "::" | "~"),
        TokenKind::Punctuation => before.text == "]",
        _ => false,
    }
}

/// One open scope
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeFrame {
    pub id: ScopeId,
    /// Position of the opening `{`; the root has none
    pub opened_at: Option<Position>,
}

/// Stack of open scopes; the global floor can never be popped
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame {
                id: ScopeId::global(),
                opened_at: None,
            }],
        }
    }

    /// Innermost scope
    pub fn current(&self) -> &ScopeId {
        // The floor frame is never removed
        &self.frames[self.frames.len() - 1].id
    }

    /// Open a child of the current scope
    pub fn push(
        &mut self,
        label: &ScopeLabel,
        at: Position,
    ) -> &ScopeId {
        let id = self.current().child(label, at);
        self.frames.push(ScopeFrame {
            id,
            opened_at: Some(at),
        });
        self.current()
    }

    /// Close the innermost scope; `None` when only the floor is left
    pub fn pop(&mut self) -> Option<ScopeFrame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Open scopes from innermost to outermost
    pub fn innermost_first(&self) -> impl Iterator<Item = &ScopeId> {
        self.frames.iter().rev().map(|frame| &frame.id)
    }

    /// Scopes opened above the floor, outermost first
    pub fn open_frames(&self) -> &[ScopeFrame] {
        &self.frames[1..]
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
