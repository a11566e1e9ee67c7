//! Token consumption for a recursive-descent schema parser
//!
//! Typed readers and recovery skips are inherent methods on
//! [`TokenStream`](crate::tokens::TokenStream); this module holds the error
//! types they return and the enum name registry.

pub mod consume;
pub mod enums;
pub mod error;
pub mod numbers;
pub mod recovery;

pub use enums::{EnumLookup, NamedEnum};
pub use error::{LiteralKind, ParseError, ParseErrorKind, ParseResult};
pub use numbers::parse_int32;
