//! Log codes and what each one means for the caller
//!
//! Every code the lexer and the readers emit is listed in [`CATALOG`] with its
//! category, severity and whether it stops further consumption. Callers ask a
//! [`Code`] directly instead of matching on error types.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Catalog entry, if the code is registered
    pub fn info(&self) -> Option<&'static CodeInfo> {
        index().get(self).copied()
    }

    pub fn category(&self) -> &'static str {
        self.info().map_or("Unknown", |info| info.category)
    }

    pub fn severity(&self) -> Severity {
        self.info().map_or(Severity::Medium, |info| info.severity)
    }

    pub fn description(&self) -> &'static str {
        self.info().map_or("Unknown code", |info| info.description)
    }

    pub fn recommended_action(&self) -> &'static str {
        self.info().map_or("No specific action available", |info| info.action)
    }

    /// Unregistered codes never halt
    pub fn requires_halt(&self) -> bool {
        self.info().is_some_and(|info| info.halts)
    }

    pub fn is_recoverable(&self) -> bool {
        !self.requires_halt()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const STRING_TOO_LARGE: Code = Code::new("E024");
    pub const UNSUPPORTED_ESCAPE: Code = Code::new("E029");
    pub const INVALID_UTF8: Code = Code::new("E030");
}

pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E040");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const INVALID_BOOLEAN: Code = Code::new("E052");
    pub const INVALID_INTEGER: Code = Code::new("E053");
    pub const UNKNOWN_ENUM_VALUE: Code = Code::new("E054");
}

pub mod success {
    use super::Code;

    pub const LOGGING_INITIALIZED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const RECOVERY_SYNCHRONIZED: Code = Code::new("I045");
}

/// Uncatalogued code carried by `log_debug!` events
pub const DEBUG_TRACE: Code = Code::new("D000");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Debug)]
pub struct CodeInfo {
    pub code: Code,
    pub category: &'static str,
    pub severity: Severity,
    /// The input cannot be consumed any further after this condition
    pub halts: bool,
    pub description: &'static str,
    pub action: &'static str,
}

const fn entry(
    code: Code,
    category: &'static str,
    severity: Severity,
    halts: bool,
    description: &'static str,
    action: &'static str,
) -> CodeInfo {
    CodeInfo {
        code,
        category,
        severity,
        halts,
        description,
        action,
    }
}

use self::Severity::{High, Low, Medium};

#[rustfmt::skip]
pub static CATALOG: &[CodeInfo] = &[
    entry(lexical::UNTERMINATED_STRING, "Lexical", Low, false,
        "String literal not terminated before end of line",
        "Add the closing double quote on the same line"),
    entry(lexical::STRING_TOO_LARGE, "Lexical", High, true,
        "Decoded string literal exceeds the configured size limit",
        "Shorten the literal or raise lexical.max_string_size"),
    entry(lexical::UNSUPPORTED_ESCAPE, "Lexical", High, true,
        "Unicode escape in a string literal",
        "Write the character as octal or hex byte escapes"),
    entry(lexical::INVALID_UTF8, "Lexical", High, true,
        "String literal bytes are not valid UTF-8",
        "Fix the byte escapes or read the value as bytes"),
    entry(syntax::UNEXPECTED_END_OF_INPUT, "Syntax", High, true,
        "Input ended inside a declaration",
        "Complete the declaration that was cut off"),
    entry(syntax::UNEXPECTED_TOKEN, "Syntax", Medium, false,
        "Token does not fit the expected shape",
        "Skip to the end of the statement and continue"),
    entry(syntax::INVALID_BOOLEAN, "Syntax", Medium, false,
        "Value is not a boolean literal",
        "Use true or false"),
    entry(syntax::INVALID_INTEGER, "Syntax", High, true,
        "Value is not a 32-bit integer literal",
        "Use a decimal or 0x-prefixed hexadecimal value"),
    entry(syntax::UNKNOWN_ENUM_VALUE, "Syntax", Medium, false,
        "Name is not a member of the expected enum",
        "Use one of the enum's declared names"),
    entry(success::LOGGING_INITIALIZED, "System", Low, false,
        "Global logger installed", "None"),
    entry(success::TOKENIZATION_COMPLETE, "Lexical", Low, false,
        "Every source line was lexed", "Continue with parsing"),
    entry(success::RECOVERY_SYNCHRONIZED, "Syntax", Low, false,
        "Token stream resynchronized after an error",
        "Continue with the next declaration"),
];

fn index() -> &'static HashMap<Code, &'static CodeInfo> {
    static INDEX: OnceLock<HashMap<Code, &'static CodeInfo>> = OnceLock::new();
    INDEX.get_or_init(|| CATALOG.iter().map(|info| (info.code, info)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_codes_are_unique_and_indexed() {
        assert_eq!(index().len(), CATALOG.len());
        for info in CATALOG {
            assert_eq!(info.code.info().map(|i| i.code), Some(info.code));
        }
    }

    #[test]
    fn test_fatal_codes_halt() {
        assert!(syntax::UNEXPECTED_END_OF_INPUT.requires_halt());
        assert!(syntax::INVALID_INTEGER.requires_halt());
        assert!(lexical::UNSUPPORTED_ESCAPE.requires_halt());
        assert!(!syntax::UNEXPECTED_TOKEN.requires_halt());
        assert!(syntax::UNKNOWN_ENUM_VALUE.is_recoverable());
        assert_eq!(
            lexical::INVALID_UTF8.description(),
            "String literal bytes are not valid UTF-8"
        );
    }

    #[test]
    fn test_unknown_code_defaults() {
        let unknown = Code::new("E999");
        assert!(unknown.info().is_none());
        assert_eq!(unknown.category(), "Unknown");
        assert_eq!(unknown.description(), "Unknown code");
        assert_eq!(unknown.severity(), Severity::Medium);
        assert_eq!(unknown.recommended_action(), "No specific action available");
        assert!(unknown.is_recoverable());
        assert!(DEBUG_TRACE.info().is_none());
    }
}
