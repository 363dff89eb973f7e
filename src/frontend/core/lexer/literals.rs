//! Literal scanning implementations
//!
//! Scanning functions look at the remaining input and report how many bytes
//! the literal spans; value and data-type inference for the symbol table
//! lives here too so the scanner and the symbol table agree on both.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Numeric literal grammar, alternatives tried in order: hex, floating
/// point with a fraction, floating point with only an exponent, integer
/// (decimal or leading-zero octal) with an optional suffix.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:0[xX][0-9a-fA-F]+(?:[uU][lL]{0,2}|[lL]{1,2}[uU]?)?|(?:[0-9]+\.[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[fFdDlL]?|[0-9]+[eE][+-]?[0-9]+[fFdDlL]?|[0-9]+(?:[fFdD]|[uU][lL]{0,2}|[lL]{1,2}[uU]?)?)",
    )
    .expect("number grammar is a valid regex")
});

/// Check if a character can start an identifier
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Length of the identifier-shaped span at the start of `rest`
pub fn scan_identifier(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if is_identifier_start(c) => {}
        _ => return None,
    }
    Some(
        chars
            .find(|&(_, c)| !is_identifier_char(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len()),
    )
}

/// Result of scanning a string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringScan {
    pub len: usize,
    pub terminated: bool,
}

/// Scan a double-quoted string literal, honouring backslash escapes.
///
/// An unterminated string runs to the end of the input.
pub fn scan_string(rest: &str) -> Option<StringScan> {
    let mut chars = rest.char_indices();
    if chars.next()?.1 != '"' {
        return None;
    }
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => {
                return Some(StringScan {
                    len: i + 1,
                    terminated: true,
                })
            }
            _ => {}
        }
    }
    Some(StringScan {
        len: rest.len(),
        terminated: false,
    })
}

/// Scan a single-quoted character literal: one plain or escaped character
/// followed by the closing quote. Anything else is not a character literal.
pub fn scan_char(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    if chars.next()?.1 != '\'' {
        return None;
    }
    match chars.next()? {
        (_, '\'') => return None,
        (_, '\\') => {
            chars.next()?;
        }
        _ => {}
    }
    match chars.next()? {
        (i, '\'') => Some(i + 1),
        _ => None,
    }
}

/// Length of the numeric literal at the start of `rest`
pub fn scan_number(rest: &str) -> Option<usize> {
    NUMBER.find(rest).map(|m| m.end())
}

/// Constant value attached to a literal symbol table entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Null,
}

/// Inferred data type and parsed value of a numeric literal
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub data_type: &'static str,
    /// `None` when the digits do not parse, e.g. `09` or an overflow
    pub value: Option<LiteralValue>,
}

/// Infer the data type of a numeric literal from its shape and suffix and
/// parse its value.
///
/// Integers default to `int`; a fraction or exponent makes it `double`;
/// `f`/`F` gives `float`, `d`/`D` gives `double`, `l`/`L` gives `long`.
pub fn number_literal(text: &str) -> NumberLiteral {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let digits = hex.trim_end_matches(['u', 'U', 'l', 'L']);
        let suffix = &hex[digits.len()..];
        return NumberLiteral {
            data_type: integer_type(suffix),
            value: u64::from_str_radix(digits, 16)
                .ok()
                .and_then(|v| i64::try_from(v).ok())
                .map(LiteralValue::Int),
        };
    }

    let body = text.trim_end_matches(['f', 'F', 'd', 'D', 'l', 'L', 'u', 'U']);
    let suffix = &text[body.len()..];
    let is_float = body.contains('.') || body.contains(['e', 'E']);

    if is_float || suffix.contains(['f', 'F', 'd', 'D']) {
        let data_type = if suffix.contains(['f', 'F']) {
            "float"
        } else if suffix.contains(['l', 'L']) {
            "long double"
        } else {
            "double"
        };
        return NumberLiteral {
            data_type,
            value: body.parse::<f64>().ok().map(LiteralValue::Float),
        };
    }

    let value = if body.len() > 1 && body.starts_with('0') {
        i64::from_str_radix(&body[1..], 8).ok()
    } else {
        body.parse::<i64>().ok()
    };
    NumberLiteral {
        data_type: integer_type(suffix),
        value: value.map(LiteralValue::Int),
    }
}

fn integer_type(suffix: &str) -> &'static str {
    let unsigned = suffix.contains(['u', 'U']);
    let long = suffix.contains(['l', 'L']);
    match (unsigned, long) {
        (false, false) => "int",
        (false, true) => "long",
        (true, false) => "unsigned int",
        (true, true) => "unsigned long",
    }
}

/// Resolve backslash escapes of a literal body
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Value of a string literal token (quotes stripped, escapes resolved)
pub fn string_value(text: &str) -> LiteralValue {
    let body = text.strip_prefix('"').unwrap_or(text);
    let body = body.strip_suffix('"').unwrap_or(body);
    LiteralValue::Str(unescape(body))
}

/// Value of a character literal token
pub fn char_value(text: &str) -> Option<LiteralValue> {
    let body = text.strip_prefix('\'')?.strip_suffix('\'')?;
    unescape(body).chars().next().map(LiteralValue::Char)
}
