//! Indentation-aware scanner for the Classy language.
//!
//! Turns source text into a flat token sequence plus a parallel sequence of
//! lexemes. Indentation is significant: leading whitespace becomes
//! [`TokenKind::BlockStart`] and [`TokenKind::BlockEnd`] tokens, so a
//! parser never has to look at whitespace.
//!
//! # Architecture
//!
//! - `classy_lexer_core`: source buffer, cursor, byte classification
//! - this crate: token model, keywords, indent stack, scanner, errors
//!
//! ```text
//! let output = classy_lexer::scan("if x\n    y = 1\n")?;
//! // IF IDENT BLOCK_START IDENT ASSIGN INT BLOCK_END
//! // lexemes: ["x", "y", "1"]
//! ```

mod config;
mod indent;
pub mod keywords;
mod lex_error;
mod output;
mod scanner;
mod span;
mod token;

pub use config::{DedentPolicy, ScanConfig};
pub use indent::{IndentChange, IndentStack};
pub use lex_error::{LexError, LexErrorKind};
pub use output::{ScanOutput, WithLexemes};
pub use scanner::Scanner;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

/// Scan `source` with the default configuration.
pub fn scan(source: &str) -> Result<ScanOutput, LexError> {
    Scanner::new(source).scan()
}

/// Scan `source` with an explicit configuration.
pub fn scan_with_config(source: &str, config: ScanConfig) -> Result<ScanOutput, LexError> {
    Scanner::with_config(source, config).scan()
}
