//! Typed readers on top of the token cursor
//!
//! Each reader looks at the next token with `read`, checks its shape and only
//! then consumes it. On a mismatch the token is left in place and a located
//! [`ParseError`] is returned.

use super::enums::NamedEnum;
use super::error::{LiteralKind, ParseError, ParseErrorKind, ParseResult};
use super::numbers::parse_int32;
use crate::strings::StringLiteralBuffer;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::utils::SourceLocation;
use std::sync::Arc;

fn describe(kind: TokenKind, value: &str) -> String {
    format!("{} '{}'", kind, value)
}

fn mismatch(expected: String, token: &Token) -> ParseError {
    ParseError::unexpected_token(expected, token.text(), token.location()).report()
}

fn invalid_literal(expected: LiteralKind, token: &Token, fatal: bool) -> ParseError {
    let kind = ParseErrorKind::InvalidLiteral {
        expected,
        text: token.text().to_string(),
    };
    ParseError::new(kind, token.location(), fatal).report()
}

impl<I> TokenStream<I>
where
    I: Iterator<Item = Token>,
{
    /// Require the next token to be exactly `kind` / `value` and consume it.
    pub fn expect(&mut self, kind: TokenKind, value: &str) -> ParseResult<()> {
        let token = self.read()?;
        if !token.is(kind, value) {
            return Err(mismatch(describe(kind, value), token));
        }
        self.consume();
        Ok(())
    }

    /// Consume the next token if it is exactly `kind` / `value`.
    ///
    /// Only running out of input is an error; a different token is left in
    /// place and `false` is returned.
    pub fn consume_if(&mut self, kind: TokenKind, value: &str) -> ParseResult<bool> {
        let matched = self.read()?.is(kind, value);
        if matched {
            self.consume();
        }
        Ok(matched)
    }

    /// Require the next token to be of `kind` and return its text.
    pub fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<String> {
        let token = self.read()?;
        if token.kind() != kind {
            return Err(mismatch(kind.as_str().to_string(), token));
        }
        let text = token.text().to_string();
        self.consume();
        Ok(text)
    }

    /// Read a string value.
    ///
    /// A run of adjacent string literals is decoded as one value and rendered
    /// in escaped form, as text or as bytes. A bare identifier is returned
    /// as written.
    pub fn consume_string(&mut self, as_bytes: bool) -> ParseResult<String> {
        let token = self.read()?;
        match token.kind() {
            TokenKind::StringLiteral => self.consume_string_literals(as_bytes),
            TokenKind::AlphaNumeric => {
                let text = token.text().to_string();
                self.consume();
                Ok(text)
            }
            _ => Err(mismatch("string".to_string(), token)),
        }
    }

    fn consume_string_literals(&mut self, as_bytes: bool) -> ParseResult<String> {
        let mut buffer = StringLiteralBuffer::new();
        let mut first: Option<SourceLocation> = None;

        while let Some(token) = self.peek() {
            if token.kind() != TokenKind::StringLiteral {
                break;
            }
            let location = token.location();
            if let Err(error) = buffer.push_literal(token.text()) {
                return Err(ParseError::fatal(error.into(), location).report());
            }
            first.get_or_insert(location);
            self.consume();
        }

        if as_bytes {
            return Ok(buffer.to_escaped_bytes());
        }

        buffer.to_escaped_text().map_err(|error| {
            let location =
                first.unwrap_or_else(|| SourceLocation::unknown(Arc::from(self.file())));
            ParseError::fatal(error.into(), location).report()
        })
    }

    /// Read `true` or `false`, in any letter case.
    pub fn consume_boolean(&mut self) -> ParseResult<bool> {
        let token = self.read()?;
        let value = match token.kind() {
            TokenKind::AlphaNumeric => parse_boolean(token.text()),
            _ => None,
        };

        match value {
            Some(value) => {
                self.consume();
                Ok(value)
            }
            None => Err(invalid_literal(LiteralKind::Boolean, token, false)),
        }
    }

    /// Read a 32-bit integer: `max` (when a ceiling is given), hexadecimal or
    /// decimal. Failure is fatal.
    pub fn consume_int32(&mut self, max: Option<i32>) -> ParseResult<i32> {
        let token = self.read()?;
        let value = match token.kind() {
            TokenKind::AlphaNumeric => parse_int32(token.text(), max),
            _ => None,
        };

        match value {
            Some(value) => {
                self.consume();
                Ok(value)
            }
            None => Err(invalid_literal(LiteralKind::Integer, token, true)),
        }
    }

    /// Read a value of enum `T` by its registered name.
    pub fn consume_enum<T: NamedEnum>(&mut self, ignore_case: bool) -> ParseResult<T> {
        let token = self.read()?;
        let value = match token.kind() {
            TokenKind::AlphaNumeric => T::from_name(token.text(), ignore_case),
            _ => None,
        };

        match value {
            Some(value) => {
                self.consume();
                Ok(value)
            }
            None => {
                let kind = ParseErrorKind::UnknownEnumValue {
                    enum_name: T::TYPE_NAME,
                    text: token.text().to_string(),
                };
                Err(ParseError::recoverable(kind, token.location()).report())
            }
        }
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
