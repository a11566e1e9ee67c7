//! Single-token lookahead cursor over a lazy token sequence
//!
//! The stream never pulls more than one token ahead of what has been
//! consumed, and it remembers the last consumed token so that running out of
//! input can be reported at a real source location.

use crate::syntax::{ParseError, ParseErrorKind, ParseResult};
use crate::tokens::token::Token;
use crate::utils::SourceLocation;
use std::sync::Arc;

pub struct TokenStream<I>
where
    I: Iterator<Item = Token>,
{
    tokens: I,
    /// Buffered lookahead, filled by `peek`
    peeked: Option<Token>,
    exhausted: bool,
    previous: Option<Token>,
    consumed: usize,
    file: Arc<str>,
}

impl<I> TokenStream<I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(tokens: I) -> Self {
        Self::with_file(tokens, "")
    }

    /// Create a stream that names `file` in errors raised before any token is read
    pub fn with_file(tokens: I, file: impl Into<Arc<str>>) -> Self {
        Self {
            tokens,
            peeked: None,
            exhausted: false,
            previous: None,
            consumed: 0,
            file: file.into(),
        }
    }

    /// Next unconsumed token, or `None` at end of input.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() && !self.exhausted {
            self.peeked = self.tokens.next();
            self.exhausted = self.peeked.is_none();
        }
        self.peeked.as_ref()
    }

    /// Advance past the peeked token. Returns `false` when there was nothing
    /// left to consume.
    pub fn consume(&mut self) -> bool {
        if self.peek().is_none() {
            return false;
        }
        self.previous = self.peeked.take();
        self.consumed += 1;
        true
    }

    /// Like [`peek`](Self::peek), but running out of input is a fatal error
    /// located at the last consumed token.
    pub fn read(&mut self) -> ParseResult<&Token> {
        self.peek();
        match self.peeked.as_ref() {
            Some(token) => Ok(token),
            None => Err(self.end_of_input()),
        }
    }

    /// Last token passed over by [`consume`](Self::consume)
    pub fn previous(&self) -> Option<&Token> {
        self.previous.as_ref()
    }

    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Number of tokens consumed so far
    pub fn consumed_count(&self) -> usize {
        self.consumed
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    fn end_of_input(&self) -> ParseError {
        let location = self
            .previous
            .as_ref()
            .map(Token::location)
            .unwrap_or_else(|| SourceLocation::unknown(self.file.clone()));

        ParseError::fatal(ParseErrorKind::UnexpectedEndOfInput, location).report()
    }
}
