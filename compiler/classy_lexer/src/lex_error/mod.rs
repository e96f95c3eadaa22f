//! Scanner error types.
//!
//! Every error is fatal: the scan stops at the first one and returns no
//! tokens. Errors carry:
//! - WHERE: `span` (byte range) and `line` (1-based)
//! - WHAT: `kind`, with the raw values that triggered it
//!
//! Rendering for humans is left to the caller; `Display` gives a one-line
//! message.

use thiserror::Error;

use crate::Span;

/// A lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    /// Byte range of the offending text. Indentation errors point at the
    /// whitespace run.
    pub span: Span,
    /// 1-based line number.
    pub line: u32,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Syntax Errors ===
    /// A character that starts no token.
    #[error("unexpected character {found:?}")]
    UnexpectedChar { found: char },

    /// A second `.` inside one numeric literal (`3.1.4`).
    #[error("numeric literal has more than one decimal point")]
    SecondDecimalPoint,

    /// `"` or `'`. String scanning is not implemented.
    #[error("string literals are not supported yet")]
    UnsupportedStringLiteral,

    // === Indentation Errors ===
    /// Leading whitespace is not a whole number of indentation levels.
    #[error(
        "indentation of {spaces} spaces is not a multiple of {indent_width} \
         (last level {last_level}, computed level {level})"
    )]
    UnevenIndentation {
        spaces: u32,
        indent_width: u32,
        last_level: u32,
        level: u32,
    },

    /// A dedent that does not return to any open level. Only raised under
    /// [`DedentPolicy::Strict`](crate::DedentPolicy::Strict).
    #[error("dedent to level {level} does not match any open block (nearest is {nearest})")]
    InconsistentDedent { level: u32, nearest: u32 },
}

impl LexErrorKind {
    /// Returns `true` for errors about leading whitespace.
    pub fn is_indentation(&self) -> bool {
        matches!(
            self,
            LexErrorKind::UnevenIndentation { .. } | LexErrorKind::InconsistentDedent { .. }
        )
    }
}

impl LexError {
    /// Create an unexpected character error.
    #[cold]
    pub fn unexpected_char(span: Span, line: u32, found: char) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnexpectedChar { found },
        }
    }

    /// Create a second-decimal-point error. `span` covers the extra `.`.
    #[cold]
    pub fn second_decimal_point(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::SecondDecimalPoint,
        }
    }

    /// Create an unsupported string literal error.
    #[cold]
    pub fn unsupported_string_literal(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnsupportedStringLiteral,
        }
    }

    /// Create an uneven indentation error.
    #[cold]
    pub fn uneven_indentation(
        span: Span,
        line: u32,
        spaces: u32,
        indent_width: u32,
        last_level: u32,
    ) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnevenIndentation {
                spaces,
                indent_width,
                last_level,
                level: spaces / indent_width.max(1),
            },
        }
    }

    /// Create an inconsistent dedent error.
    #[cold]
    pub fn inconsistent_dedent(span: Span, line: u32, level: u32, nearest: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::InconsistentDedent { level, nearest },
        }
    }
}
