//! Line-oriented lexer
//!
//! Splits each source line into maximal runs of same-class characters and
//! quoted literal bodies. Tokens are produced lazily, one per call to
//! `next`, so a consumer that stops early never pays for the rest of the
//! input.

use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::{Position, SourceLocation};
use crate::{log_debug, log_success, log_warning};
use std::sync::Arc;

/// Token counts gathered while lexing
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub whitespace_tokens: usize,
    pub identifier_tokens: usize,
    pub symbol_tokens: usize,
    pub string_literals: usize,
    pub max_string_length: usize,
    pub unterminated_strings: usize,
    pub lines: u32,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;

        match token.kind() {
            TokenKind::Whitespace => self.whitespace_tokens += 1,
            TokenKind::AlphaNumeric => self.identifier_tokens += 1,
            TokenKind::Symbol => self.symbol_tokens += 1,
            TokenKind::StringLiteral => {
                self.string_literals += 1;
                self.max_string_length = self.max_string_length.max(token.text().len());
            }
            TokenKind::None => {}
        }
    }
}

/// Scan state for the line currently being lexed
struct LineScan {
    text: Arc<str>,
    chars: Vec<char>,
    index: usize,
    /// Class of the run being accumulated, `None` between runs
    kind: TokenKind,
    start_column: u32,
    last_char: char,
    /// Previous literal character was an unconsumed backslash
    escaped: bool,
    buffer: String,
}

impl LineScan {
    fn new(text: &str) -> Self {
        Self {
            text: Arc::from(text),
            chars: text.chars().collect(),
            index: 0,
            kind: TokenKind::None,
            start_column: 0,
            last_char: '\0',
            escaped: false,
            buffer: String::new(),
        }
    }

    fn column(&self) -> u32 {
        self.index as u32 + 1
    }

    fn start_run(&mut self, kind: TokenKind, first: Option<char>) {
        self.kind = kind;
        self.start_column = self.column();
        self.escaped = false;
        self.buffer.clear();
        if let Some(c) = first {
            self.buffer.push(c);
        }
    }

    /// Take the pending run, if any, leaving the scan between runs
    fn take_run(&mut self) -> Option<(TokenKind, String, u32)> {
        let kind = std::mem::replace(&mut self.kind, TokenKind::None);
        if kind == TokenKind::None || self.buffer.is_empty() {
            self.buffer.clear();
            return None;
        }
        Some((kind, std::mem::take(&mut self.buffer), self.start_column))
    }
}

/// Lazy token producer over a sequence of source lines
pub struct Lexer<L>
where
    L: Iterator,
    L::Item: AsRef<str>,
{
    lines: L,
    file: Arc<str>,
    current: Option<LineScan>,
    line_number: u32,
    sequence: usize,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
    finished: bool,
}

impl<L> Lexer<L>
where
    L: Iterator,
    L::Item: AsRef<str>,
{
    pub fn new(lines: L, file: impl Into<Arc<str>>) -> Self {
        Self::with_preferences(lines, file, LexicalPreferences::default())
    }

    pub fn with_preferences(
        lines: L,
        file: impl Into<Arc<str>>,
        preferences: LexicalPreferences,
    ) -> Self {
        let file = file.into();
        log_debug!("Starting lexical analysis", "file" => &*file);

        Self {
            lines,
            file,
            current: None,
            line_number: 0,
            sequence: 0,
            metrics: LexicalMetrics::default(),
            preferences,
            finished: false,
        }
    }

    pub fn file(&self) -> &Arc<str> {
        &self.file
    }

    /// Metrics gathered so far. Token counts stay at zero when collection is disabled.
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    fn make_token(
        &mut self,
        kind: TokenKind,
        text: String,
        column: u32,
        line_text: Arc<str>,
    ) -> Token {
        let token = Token::new(
            text,
            kind,
            Position::new(self.line_number, column),
            line_text,
            self.sequence,
            self.file.clone(),
        );
        self.sequence += 1;

        if self.preferences.collect_metrics {
            self.metrics.record_token(&token);
        }
        token
    }

    /// Advance the current line until a token completes or the line ends
    fn scan_line(&mut self) -> Option<Token> {
        let scan = self.current.as_mut()?;

        while scan.index < scan.chars.len() {
            let c = scan.chars[scan.index];

            if scan.kind == TokenKind::StringLiteral {
                if scan.escaped {
                    scan.escaped = false;
                    scan.buffer.push(c);
                } else if c == '\\' {
                    scan.escaped = true;
                    scan.buffer.push(c);
                } else if c == '"' {
                    scan.kind = TokenKind::None;
                    scan.index += 1;
                    let text = std::mem::take(&mut scan.buffer);
                    let (column, line_text) = (scan.start_column, scan.text.clone());
                    return Some(self.make_token(TokenKind::StringLiteral, text, column, line_text));
                } else {
                    scan.buffer.push(c);
                }
                scan.index += 1;
                continue;
            }

            let kind = TokenKind::classify(c);
            if scan.kind.continues_run(kind, scan.last_char, c) {
                scan.buffer.push(c);
                scan.last_char = c;
                scan.index += 1;
                continue;
            }

            let finished = scan.take_run();
            if kind == TokenKind::StringLiteral {
                // The opening quote is not part of the literal text
                scan.start_run(kind, None);
            } else {
                scan.start_run(kind, Some(c));
            }
            scan.last_char = c;
            scan.index += 1;

            if let Some((kind, text, column)) = finished {
                let line_text = scan.text.clone();
                return Some(self.make_token(kind, text, column, line_text));
            }
        }

        self.finish_line()
    }

    /// Flush whatever is pending at end of line and drop the line
    fn finish_line(&mut self) -> Option<Token> {
        let mut scan = self.current.take()?;

        if scan.kind == TokenKind::StringLiteral {
            self.metrics.unterminated_strings += 1;
            if self.preferences.warn_unterminated_strings {
                let location = SourceLocation::new(
                    self.file.clone(),
                    Position::new(self.line_number, scan.start_column),
                    scan.text.clone(),
                );
                log_warning!(
                    codes::lexical::UNTERMINATED_STRING,
                    "String literal not terminated before end of line",
                    location = location
                );
            }
        }

        scan.take_run()
            .map(|(kind, text, column)| self.make_token(kind, text, column, scan.text.clone()))
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Tokenization completed",
            "file" => &*self.file,
            "lines" => self.line_number,
            "tokens" => self.sequence
        );
    }
}

impl<L> Iterator for Lexer<L>
where
    L: Iterator,
    L::Item: AsRef<str>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.current.is_some() {
                if let Some(token) = self.scan_line() {
                    return Some(token);
                }
                continue;
            }

            match self.lines.next() {
                Some(line) => {
                    self.line_number += 1;
                    self.metrics.lines = self.line_number;
                    self.current = Some(LineScan::new(line.as_ref()));
                }
                None => {
                    self.finish();
                    return None;
                }
            }
        }
    }
}
