//! Lexer for placeholder patterns using logos

use logos::Logos;

/// Byte range in pattern text
pub type Span = std::ops::Range<usize>;

/// Raw pattern tokens.
///
/// Every character of a pattern falls into exactly one of these classes, so
/// lexing never fails and the spans tile the whole input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,

    /// Run of characters allowed in a placeholder name
    #[regex(r"[A-Za-z0-9.:_]+")]
    Name,

    /// Anything else, copied through verbatim
    #[regex(r"[^{}A-Za-z0-9.:_]+")]
    Text,
}

/// Lex a pattern into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}
