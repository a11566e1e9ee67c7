//! Lexical analysis: source lines to a filtered, peekable token stream
//!
//! `tokenize` wires the whole front half of the pipeline together:
//! [`Lexer`] produces raw runs, [`CommentFilter`] drops whitespace and line
//! comments, and [`TokenStream`] adds one token of lookahead.

pub mod analyzer;
pub mod filter;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::TokenStream;
use std::sync::Arc;

pub use analyzer::{LexicalMetrics, Lexer};
pub use filter::CommentFilter;

/// Lines of an in-memory source, with any trailing `\r` removed
pub type SourceLines<'a> = std::iter::Map<std::str::Split<'a, char>, fn(&'a str) -> &'a str>;

/// Token stream over an in-memory source
pub type SourceTokens<'a> = TokenStream<CommentFilter<Lexer<SourceLines<'a>>>>;

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split `source` into lines, accepting both LF and CRLF endings
pub fn source_lines<'a>(source: &'a str) -> SourceLines<'a> {
    source
        .split('\n')
        .map(strip_carriage_return as fn(&'a str) -> &'a str)
}

/// Tokenize an in-memory source with the default lexical preferences
pub fn tokenize<'a>(source: &'a str, file: &str) -> SourceTokens<'a> {
    tokenize_with_preferences(source, file, LexicalPreferences::default())
}

/// Tokenize an in-memory source with explicit preferences
pub fn tokenize_with_preferences<'a>(
    source: &'a str,
    file: &str,
    preferences: LexicalPreferences,
) -> SourceTokens<'a> {
    let file: Arc<str> = Arc::from(file);
    let lexer = Lexer::with_preferences(source_lines(source), file.clone(), preferences);
    TokenStream::with_file(CommentFilter::new(lexer), file)
}

/// Tokenize lines supplied by an external reader
pub fn tokenize_lines<L>(lines: L, file: &str) -> TokenStream<CommentFilter<Lexer<L::IntoIter>>>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let file: Arc<str> = Arc::from(file);
    let lexer = Lexer::new(lines.into_iter(), file.clone());
    TokenStream::with_file(CommentFilter::new(lexer), file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Token, TokenKind};

    fn drain<I: Iterator<Item = Token>>(stream: &mut TokenStream<I>) -> Vec<(TokenKind, String)> {
        let mut out = Vec::new();
        while let Some(token) = stream.peek() {
            out.push((token.kind(), token.text().to_string()));
            stream.consume();
        }
        out
    }

    #[test]
    fn test_crlf_and_lf_sources_lex_identically() {
        let lf = drain(&mut tokenize("syntax = \"proto3\";\npackage a.b;\n", "lf.proto"));
        let crlf = drain(&mut tokenize(
            "syntax = \"proto3\";\r\npackage a.b;\r\n",
            "crlf.proto",
        ));

        assert_eq!(lf, crlf);
        assert_eq!(lf.len(), 7);
    }

    #[test]
    fn test_source_lines_strip_carriage_returns() {
        let lines: Vec<&str> = source_lines("a\r\nb\nc\r").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_lines_from_owned_strings() {
        let lines = vec![
            String::from("enum E {"),
            String::from("  A = 0; // zero"),
            String::from("}"),
        ];
        let mut stream = tokenize_lines(lines, "e.proto");

        let texts: Vec<String> = drain(&mut stream).into_iter().map(|(_, t)| t).collect();
        assert_eq!(texts, vec!["enum", "E", "{", "A", "=", "0", ";", "}"]);
        assert_eq!(stream.file(), "e.proto");
    }

    #[test]
    fn test_tokens_carry_file_name() {
        let mut stream = tokenize("x", "named.proto");
        assert_eq!(stream.peek().map(Token::file), Some("named.proto"));
    }
}
