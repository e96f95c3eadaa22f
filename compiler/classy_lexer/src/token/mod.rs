//! Token types for the Classy scanner.

mod kind;
mod list;

use std::fmt;

pub use kind::TokenKind;
pub use list::TokenList;

use crate::Span;

/// A token with its span in the source.
///
/// Tokens do not hold their text. Literal-bearing tokens are paired with
/// the lexeme sequence by emission order (see
/// [`ScanOutput::with_lexemes`](crate::ScanOutput::with_lexemes)).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
