//! Token types produced by the lexer

use crate::utils::{Position, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Character class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Sentinel for "no run in progress"; never carried by an emitted token
    None,
    Whitespace,
    /// Body of a `"`-quoted literal, quotes excluded, escapes not yet decoded
    StringLiteral,
    /// Letters, digits, `_`, `.` and `-`
    AlphaNumeric,
    /// Any other character, merged only with repeats of itself
    Symbol,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::None => "none",
            TokenKind::Whitespace => "whitespace",
            TokenKind::StringLiteral => "string literal",
            TokenKind::AlphaNumeric => "identifier",
            TokenKind::Symbol => "symbol",
        }
    }

    /// Classify a single source character
    pub fn classify(c: char) -> Self {
        if c == '"' {
            TokenKind::StringLiteral
        } else if c.is_whitespace() {
            TokenKind::Whitespace
        } else if c.is_alphanumeric() || matches!(c, '_' | '.' | '-') {
            TokenKind::AlphaNumeric
        } else {
            TokenKind::Symbol
        }
    }

    /// Whether `next` extends a run of class `self` whose last character was `prev`.
    pub fn continues_run(self, next_kind: TokenKind, prev: char, next: char) -> bool {
        if self != next_kind {
            return false;
        }
        match self {
            TokenKind::None | TokenKind::StringLiteral => false,
            TokenKind::Symbol => prev == next,
            TokenKind::Whitespace | TokenKind::AlphaNumeric => true,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
    position: Position,
    line_text: Arc<str>,
    sequence: usize,
    file: Arc<str>,
}

impl Token {
    pub fn new(
        text: String,
        kind: TokenKind,
        position: Position,
        line_text: Arc<str>,
        sequence: usize,
        file: Arc<str>,
    ) -> Self {
        Self {
            text,
            kind,
            position,
            line_text,
            sequence,
            file,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    /// Index of this token among all tokens the lexer emitted
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.file.clone(), self.position, self.line_text.clone())
    }

    /// Exact (case-sensitive) match on kind and text
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_symbol(&self, text: &str) -> bool {
        self.is(TokenKind::Symbol, text)
    }

    /// Width in characters, used for caret underlines
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StringLiteral => write!(f, "\"{}\"", self.text),
            _ => f.write_str(&self.text),
        }
    }
}
