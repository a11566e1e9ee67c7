//! Parse errors raised by the token cursor and the consumption helpers
//!
//! Every error carries the location of the token it is about and a `fatal`
//! flag. Fatal errors mean the input cannot be consumed any further; non-fatal
//! ones leave the cursor where it was so the caller may skip ahead and resume.

use crate::logging::{codes, Code};
use crate::strings::EscapeError;
use crate::utils::SourceLocation;
use crate::log_error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Literal shapes the typed readers parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Boolean,
    Integer,
}

impl LiteralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralKind::Boolean => "boolean",
            LiteralKind::Integer => "integer",
        }
    }
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("Unexpected end of file")]
    UnexpectedEndOfInput,

    #[error("Expected {expected}, found '{found}'")]
    UnexpectedToken { expected: String, found: String },

    #[error("Unable to parse {expected}: '{text}'")]
    InvalidLiteral { expected: LiteralKind, text: String },

    #[error("Unable to parse {enum_name}: '{text}'")]
    UnknownEnumValue {
        enum_name: &'static str,
        text: String,
    },

    #[error(transparent)]
    Escape(#[from] EscapeError),
}

impl ParseErrorKind {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedEndOfInput => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::InvalidLiteral {
                expected: LiteralKind::Boolean,
                ..
            } => codes::syntax::INVALID_BOOLEAN,
            Self::InvalidLiteral {
                expected: LiteralKind::Integer,
                ..
            } => codes::syntax::INVALID_INTEGER,
            Self::UnknownEnumValue { .. } => codes::syntax::UNKNOWN_ENUM_VALUE,
            Self::Escape(error) => error.error_code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    location: SourceLocation,
    fatal: bool,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: SourceLocation, fatal: bool) -> Self {
        Self {
            kind,
            location,
            fatal,
        }
    }

    pub fn fatal(kind: ParseErrorKind, location: SourceLocation) -> Self {
        Self::new(kind, location, true)
    }

    pub fn recoverable(kind: ParseErrorKind, location: SourceLocation) -> Self {
        Self::new(kind, location, false)
    }

    pub fn unexpected_token(
        expected: impl Into<String>,
        found: &str,
        location: SourceLocation,
    ) -> Self {
        Self::recoverable(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.to_string(),
            },
            location,
        )
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Human readable message without the location prefix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn column(&self) -> u32 {
        self.location.column()
    }

    pub fn file(&self) -> &str {
        &self.location.file
    }

    pub fn line_text(&self) -> &str {
        &self.location.line_text
    }

    pub fn error_code(&self) -> Code {
        self.kind.error_code()
    }

    /// Get error severity
    pub fn severity(&self) -> &'static str {
        self.error_code().severity().as_str()
    }

    /// Get error category
    pub fn category(&self) -> &'static str {
        self.error_code().category()
    }

    pub fn recommended_action(&self) -> &'static str {
        self.error_code().recommended_action()
    }

    /// Whether the error code is registered as requiring the caller to stop
    pub fn requires_halt(&self) -> bool {
        self.error_code().requires_halt()
    }

    pub fn is_recoverable(&self) -> bool {
        self.error_code().is_recoverable()
    }

    /// Source line with the offending token underlined
    pub fn format_diagnostic(&self) -> String {
        let width = match &self.kind {
            ParseErrorKind::UnexpectedToken { found: text, .. }
            | ParseErrorKind::InvalidLiteral { text, .. }
            | ParseErrorKind::UnknownEnumValue { text, .. } => text.chars().count(),
            _ => 1,
        };
        self.location.format_diagnostic(&self.message(), width)
    }

    /// Log this error through the global logger and hand it back.
    pub(crate) fn report(self) -> Self {
        log_error!(self.error_code(), &self.message(),
            location = self.location.clone(),
            "fatal" => self.fatal
        );
        self
    }
}
