//! Lexer and token consumption layer for `.proto` schema sources
//!
//! Source text flows one way: [`lexical::Lexer`] splits lines into classified
//! tokens, [`lexical::CommentFilter`] drops whitespace and `//` comments,
//! [`tokens::TokenStream`] adds one token of lookahead, and the readers in
//! [`syntax`] turn tokens into typed values for a recursive-descent parser.

#[macro_use]
pub mod logging;
pub mod config;
pub mod lexical;
pub mod strings;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{tokenize, tokenize_lines, tokenize_with_preferences, Lexer, SourceTokens};
pub use strings::{EscapeError, StringLiteralBuffer};
pub use syntax::{EnumLookup, NamedEnum, ParseError, ParseErrorKind, ParseResult};
pub use tokens::{Token, TokenKind, TokenStream};
pub use utils::{Position, SourceLocation};
