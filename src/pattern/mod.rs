//! Pattern scanning
//!
//! A pattern is plain text with `{name}` tokens, where `name` is one or more
//! of `[A-Za-z0-9.:_]`. Scanning is greedy, non-overlapping and left to
//! right. Braces that do not form a token are ordinary text; there is no
//! escape syntax.

pub mod lexer;

pub use lexer::Span;

use lexer::{lex, Token};

/// A `{name}` token found in a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken<'a> {
    /// Name between the braces
    pub name: &'a str,
    /// Span of the whole token, braces included
    pub span: Span,
}

/// One piece of a scanned pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Verbatim text
    Text(&'a str),
    /// A placeholder token
    Placeholder(PlaceholderToken<'a>),
}

/// Split a pattern into text and placeholder segments.
///
/// Adjacent text is merged, so segments alternate unless two tokens touch.
pub fn scan(pattern: &str) -> Vec<Segment<'_>> {
    let tokens: Vec<(Token, Span)> = lex(pattern).collect();
    let mut segments = Vec::new();
    let mut text_start: Option<usize> = None;
    let mut i = 0;

    while i < tokens.len() {
        if let [(Token::BraceOpen, open), (Token::Name, name), (Token::BraceClose, close), ..] =
            &tokens[i..]
        {
            if let Some(start) = text_start.take() {
                segments.push(Segment::Text(&pattern[start..open.start]));
            }
            segments.push(Segment::Placeholder(PlaceholderToken {
                name: &pattern[name.clone()],
                span: open.start..close.end,
            }));
            i += 3;
            continue;
        }

        text_start.get_or_insert(tokens[i].1.start);
        i += 1;
    }

    if let Some(start) = text_start {
        segments.push(Segment::Text(&pattern[start..]));
    }

    segments
}

/// Iterate over the placeholder tokens of a pattern
pub fn tokens(pattern: &str) -> impl Iterator<Item = PlaceholderToken<'_>> {
    scan(pattern).into_iter().filter_map(|seg| match seg {
        Segment::Placeholder(token) => Some(token),
        Segment::Text(_) => None,
    })
}
