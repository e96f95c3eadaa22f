//! Result of a successful scan.

use crate::{IndentStack, Token, TokenList};

/// Tokens and lexemes produced by one scan.
///
/// The Nth literal-bearing token (see [`TokenKind::carries_lexeme`]) owns
/// the Nth lexeme. Indices into [`tokens`](Self::tokens) and
/// [`lexemes`](Self::lexemes) do not line up; use
/// [`with_lexemes`](Self::with_lexemes) to walk them together.
///
/// [`TokenKind::carries_lexeme`]: crate::TokenKind::carries_lexeme
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanOutput {
    tokens: TokenList,
    lexemes: Vec<String>,
    indents: IndentStack,
}

impl ScanOutput {
    pub(crate) fn new(tokens: TokenList, lexemes: Vec<String>, indents: IndentStack) -> Self {
        ScanOutput {
            tokens,
            lexemes,
            indents,
        }
    }

    /// Tokens in source order.
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Literal text of identifiers and numbers, in emission order.
    pub fn lexemes(&self) -> &[String] {
        &self.lexemes
    }

    /// Indent stack after end-of-input closure: `[0]`, or empty when the
    /// base level was closed too.
    pub fn indent_stack(&self) -> &IndentStack {
        &self.indents
    }

    /// Pair every token with its lexeme, if it carries one.
    pub fn with_lexemes(&self) -> WithLexemes<'_> {
        WithLexemes {
            tokens: self.tokens.iter(),
            lexemes: self.lexemes.iter(),
        }
    }

    /// Split into the token and lexeme sequences.
    pub fn into_parts(self) -> (TokenList, Vec<String>) {
        (self.tokens, self.lexemes)
    }
}

/// Iterator returned by [`ScanOutput::with_lexemes`].
#[derive(Clone, Debug)]
pub struct WithLexemes<'a> {
    tokens: std::slice::Iter<'a, Token>,
    lexemes: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for WithLexemes<'a> {
    type Item = (Token, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let token = *self.tokens.next()?;
        let lexeme = if token.kind.carries_lexeme() {
            self.lexemes.next().map(String::as_str)
        } else {
            None
        };
        Some((token, lexeme))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}
