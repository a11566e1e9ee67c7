//! Source location tracking for the proto lexer
//!
//! Tokens are produced line by line, so a location is a 1-based line/column
//! pair plus the file identifier and the full text of the line it came from.
//! Carrying the line text lets diagnostics be rendered without going back to
//! the source.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A position in source text with line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create the starting position (line 1, column 1)
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Where a token (or an error about it) sits in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: Arc<str>,
    pub position: Position,
    /// Full text of the source line, without its terminator
    pub line_text: Arc<str>,
}

impl SourceLocation {
    pub fn new(file: Arc<str>, position: Position, line_text: Arc<str>) -> Self {
        Self {
            file,
            position,
            line_text,
        }
    }

    /// Location used when no token has been seen yet.
    pub fn unknown(file: Arc<str>) -> Self {
        Self {
            file,
            position: Position::default(),
            line_text: Arc::from(""),
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn is_known(&self) -> bool {
        self.position.line > 0
    }

    /// Format a message with the source line and a caret underline.
    pub fn format_diagnostic(&self, message: &str, width: usize) -> String {
        let mut result = String::new();

        result.push_str(&format!("Error: {}\n", message));
        result.push_str(&format!("  --> {}\n", self));

        if !self.is_known() {
            return result;
        }

        let line_num_str = format!("{}", self.position.line);
        let padding = " ".repeat(line_num_str.len());

        result.push_str(&format!("{} |\n", padding));
        result.push_str(&format!("{} | {}\n", line_num_str, self.line_text));

        let mut underline = format!("{} | ", padding);
        for _ in 1..self.position.column {
            underline.push(' ');
        }
        for _ in 0..width.max(1) {
            underline.push('^');
        }

        result.push_str(&underline);
        result.push('\n');
        result
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}", self.position)
        } else {
            write!(f, "{}:{}", self.file, self.position)
        }
    }
}
