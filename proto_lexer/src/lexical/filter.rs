//! Whitespace and line-comment removal

use crate::tokens::{Token, TokenKind};

/// Drops whitespace tokens and everything from a `//` run to the end of its line.
///
/// The only state carried between tokens is the line number of the comment
/// currently being skipped.
pub struct CommentFilter<I>
where
    I: Iterator<Item = Token>,
{
    tokens: I,
    comment_line: Option<u32>,
}

impl<I> CommentFilter<I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            comment_line: None,
        }
    }

    pub fn inner(&self) -> &I {
        &self.tokens
    }
}

fn opens_comment(token: &Token) -> bool {
    token.kind() == TokenKind::Symbol && token.text().starts_with("//")
}

impl<I> Iterator for CommentFilter<I>
where
    I: Iterator<Item = Token>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let token = self.tokens.next()?;

            if token.kind() == TokenKind::Whitespace {
                continue;
            }

            match self.comment_line {
                Some(line) if line == token.line() => continue,
                Some(_) => self.comment_line = None,
                None => {}
            }

            if opens_comment(&token) {
                self.comment_line = Some(token.line());
                continue;
            }

            return Some(token);
        }
    }
}
