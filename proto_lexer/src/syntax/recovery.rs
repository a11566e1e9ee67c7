//! Resynchronization after a recoverable parse error
//!
//! Each skip helper discards tokens until it reaches its terminator symbol
//! and reports whether one was found before the input ran out.

use crate::logging::codes;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::{log_debug, log_success};

/// What a skip helper does when it reaches a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Keep discarding
    Skip,
    /// Stop after consuming the terminator
    Consume,
    /// Stop in front of the terminator
    Leave,
}

fn symbol(token: &Token) -> Option<&str> {
    match token.kind() {
        TokenKind::Symbol => Some(token.text()),
        _ => None,
    }
}

impl<I> TokenStream<I>
where
    I: Iterator<Item = Token>,
{
    fn skip_until(&mut self, target: &'static str, stop_at: impl Fn(&Token) -> Stop) -> bool {
        let mut skipped = 0usize;

        loop {
            let stop = match self.peek() {
                Some(token) => stop_at(token),
                None => {
                    log_debug!("Recovery reached end of input",
                        "target" => target,
                        "skipped" => skipped
                    );
                    return false;
                }
            };

            match stop {
                Stop::Skip => {
                    self.consume();
                    skipped += 1;
                }
                Stop::Consume | Stop::Leave => {
                    if stop == Stop::Consume {
                        self.consume();
                    }
                    log_success!(
                        codes::success::RECOVERY_SYNCHRONIZED,
                        "Token stream resynchronized",
                        "target" => target,
                        "skipped" => skipped
                    );
                    return true;
                }
            }
        }
    }

    /// Skip to the `]` closing an option list and consume it. A `;` or `}`
    /// also ends the scan but is left in place.
    pub fn skip_to_end_options(&mut self) -> bool {
        self.skip_until("]", |token| match symbol(token) {
            Some("]") => Stop::Consume,
            Some(";") | Some("}") => Stop::Leave,
            _ => Stop::Skip,
        })
    }

    /// Skip past the next `;`.
    pub fn skip_to_end_statement(&mut self) -> bool {
        self.skip_until(";", |token| match symbol(token) {
            Some(";") => Stop::Consume,
            _ => Stop::Skip,
        })
    }

    /// Skip to the next `}`, leaving it as the next token.
    pub fn skip_to_end_object(&mut self) -> bool {
        self.skip_until("}", |token| match symbol(token) {
            Some("}") => Stop::Leave,
            _ => Stop::Skip,
        })
    }

    /// Skip to the next `;` or `}`, whichever comes first, leaving it as the
    /// next token.
    pub fn skip_to_end_statement_or_object(&mut self) -> bool {
        self.skip_until("; or }", |token| match symbol(token) {
            Some(";") | Some("}") => Stop::Leave,
            _ => Stop::Skip,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexical::tokenize;
    use crate::tokens::Token;

    fn next_text<I: Iterator<Item = Token>>(
        stream: &mut crate::tokens::TokenStream<I>,
    ) -> Option<String> {
        stream.peek().map(|t| t.text().to_string())
    }

    #[test]
    fn test_skip_to_end_statement_consumes_semicolon() {
        let mut stream = tokenize("a b ; c", "t.proto");

        assert!(stream.skip_to_end_statement());
        assert_eq!(next_text(&mut stream).as_deref(), Some("c"));
    }

    #[test]
    fn test_skip_to_end_statement_ignores_quoted_semicolon() {
        let mut stream = tokenize("x = \";\" ; y", "t.proto");

        assert!(stream.skip_to_end_statement());
        assert_eq!(next_text(&mut stream).as_deref(), Some("y"));
    }

    #[test]
    fn test_skip_to_end_object_leaves_brace() {
        let mut stream = tokenize("int32 x = 1; bool y; } next", "t.proto");

        assert!(stream.skip_to_end_object());
        assert_eq!(next_text(&mut stream).as_deref(), Some("}"));
    }

    #[test]
    fn test_skip_to_end_statement_or_object() {
        let mut stream = tokenize("bad tokens } after", "t.proto");
        assert!(stream.skip_to_end_statement_or_object());
        assert_eq!(next_text(&mut stream).as_deref(), Some("}"));

        let mut stream = tokenize("bad ; after", "t.proto");
        assert!(stream.skip_to_end_statement_or_object());
        assert_eq!(next_text(&mut stream).as_deref(), Some(";"));

        // Already at the terminator: nothing is skipped
        assert!(stream.skip_to_end_statement_or_object());
        assert_eq!(next_text(&mut stream).as_deref(), Some(";"));
    }

    #[test]
    fn test_skip_to_end_options() {
        let mut stream = tokenize("[packed = tru] ;", "t.proto");
        stream.consume();
        assert!(stream.skip_to_end_options());
        assert_eq!(next_text(&mut stream).as_deref(), Some(";"));

        let mut stream = tokenize("deprecated = ; x", "t.proto");
        assert!(stream.skip_to_end_options());
        assert_eq!(next_text(&mut stream).as_deref(), Some(";"));
    }

    #[test]
    fn test_skip_returns_false_when_input_runs_out() {
        let mut stream = tokenize("a b c", "t.proto");

        assert!(!stream.skip_to_end_statement());
        assert!(stream.is_at_end());
        assert!(!stream.skip_to_end_object());
        assert!(!stream.skip_to_end_options());
        assert!(!stream.skip_to_end_statement_or_object());
    }
}
