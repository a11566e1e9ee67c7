//! String literal decoding
//!
//! Adjacent string literals concatenate. Each literal body is escape-decoded
//! on its own into a shared byte buffer, and the buffer is then rendered
//! either as escaped text (after a UTF-8 check) or as escaped bytes.

pub mod decoder;
pub mod render;

use crate::config::compile_time::lexical::MAX_STRING_SIZE;
use crate::logging::{codes, Code};

pub use decoder::{decode, decode_into};
pub use render::{escape_bytes, escape_text, render_utf8};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("Unsupported escape sequence '\\{0}'")]
    UnsupportedEscape(char),

    #[error("String literal is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("String literal too large: {size} bytes (max {limit})")]
    TooLarge { size: usize, limit: usize },
}

impl EscapeError {
    pub fn error_code(&self) -> Code {
        match self {
            EscapeError::UnsupportedEscape(_) => codes::lexical::UNSUPPORTED_ESCAPE,
            EscapeError::InvalidUtf8 { .. } => codes::lexical::INVALID_UTF8,
            EscapeError::TooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
        }
    }
}

/// Decoded bytes of one or more concatenated string literals
#[derive(Debug, Clone)]
pub struct StringLiteralBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl StringLiteralBuffer {
    pub fn new() -> Self {
        Self::with_limit(MAX_STRING_SIZE)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
        }
    }

    /// Decode one raw literal body and append it.
    pub fn push_literal(&mut self, raw: &str) -> Result<(), EscapeError> {
        decode_into(raw, &mut self.bytes)?;
        if self.bytes.len() > self.limit {
            return Err(EscapeError::TooLarge {
                size: self.bytes.len(),
                limit: self.limit,
            });
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Escaped byte-literal form
    pub fn to_escaped_bytes(&self) -> String {
        escape_bytes(&self.bytes)
    }

    /// Escaped text form; fails if the buffer is not UTF-8
    pub fn to_escaped_text(&self) -> Result<String, EscapeError> {
        render_utf8(&self.bytes)
    }
}

impl Default for StringLiteralBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_concatenation() {
        let mut buffer = StringLiteralBuffer::new();
        buffer.push_literal("ab").unwrap();
        buffer.push_literal("cd").unwrap();

        assert_eq!(buffer.as_bytes(), b"abcd");
        assert_eq!(buffer.to_escaped_text().unwrap(), "abcd");
        assert_eq!(buffer.to_escaped_bytes(), "abcd");
    }

    #[test]
    fn test_split_utf8_across_literals() {
        let mut buffer = StringLiteralBuffer::new();
        buffer.push_literal(r"\303").unwrap();
        buffer.push_literal(r"\251").unwrap();

        assert_eq!(buffer.to_escaped_text().unwrap(), "\u{e9}");
        assert_eq!(buffer.to_escaped_bytes(), "\\303\\251");
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut buffer = StringLiteralBuffer::with_limit(4);
        buffer.push_literal("abcd").unwrap();

        assert_matches!(
            buffer.push_literal("e"),
            Err(EscapeError::TooLarge { size: 5, limit: 4 })
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EscapeError::UnsupportedEscape('u').error_code().as_str(), "E029");
        assert_eq!(
            EscapeError::InvalidUtf8 { valid_up_to: 0 }.error_code().as_str(),
            "E030"
        );
        assert_eq!(
            EscapeError::TooLarge { size: 2, limit: 1 }.error_code().as_str(),
            "E024"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EscapeError::UnsupportedEscape('U').to_string(),
            "Unsupported escape sequence '\\U'"
        );
    }
}
