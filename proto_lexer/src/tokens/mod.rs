//! Token system for .proto lexical analysis
//!
//! - **[`Token`]** - a classified lexeme tagged with file, line, column, the
//!   full line text and its index in the emitted sequence
//! - **[`TokenKind`]** - the character class rule that splits source text into runs
//! - **[`TokenStream`]** - single-token lookahead cursor the parser consumes from
//!
//! Typed consumption helpers (`expect`, `consume_string`, `consume_int32`, ...)
//! are implemented on [`TokenStream`] in [`crate::syntax`].

pub mod stream;
pub mod token;

pub use stream::TokenStream;
pub use token::{Token, TokenKind};
