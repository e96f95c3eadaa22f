//! The closed set of lexical categories.

use std::fmt;

/// Token kinds for Classy.
///
/// Literal-bearing kinds ([`Identifier`](Self::Identifier),
/// [`Int`](Self::Int), [`Decimal`](Self::Decimal)) keep their text in the
/// scan output's lexeme sequence, matched up by emission order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Identifiers and keywords ===
    /// Any name that is not a keyword.
    Identifier,
    If,
    For,
    End,
    While,
    Foreach,
    /// `int` in type position.
    TypeInt,
    /// `float` in type position.
    TypeFloat,
    /// `string` in type position.
    TypeString,
    /// `bool` in type position.
    TypeBool,
    /// `double` in type position.
    TypeDouble,

    // === Literals ===
    /// Digit sequence: `42`.
    Int,
    /// Digit sequence with one decimal point: `3.14`, `3.`.
    Decimal,

    // === Operators ===
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `//`
    IntDivide,
    /// `**`
    Power,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `=`
    Assign,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `is`
    Is,
    /// `is not`
    IsNot,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,

    // === Structure ===
    /// Indentation increased by at least one level.
    BlockStart,
    /// One indentation level closed.
    BlockEnd,

    // === Reserved ===
    // Never produced by the scanner. Kept so downstream code can match on
    // them once string, boolean, and comment scanning exist.
    Float,
    String,
    Bool,
    Double,
    Comment,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 35] = [
        TokenKind::Identifier,
        TokenKind::If,
        TokenKind::For,
        TokenKind::End,
        TokenKind::While,
        TokenKind::Foreach,
        TokenKind::TypeInt,
        TokenKind::TypeFloat,
        TokenKind::TypeString,
        TokenKind::TypeBool,
        TokenKind::TypeDouble,
        TokenKind::Int,
        TokenKind::Decimal,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::IntDivide,
        TokenKind::Power,
        TokenKind::Increment,
        TokenKind::Decrement,
        TokenKind::Assign,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Is,
        TokenKind::IsNot,
        TokenKind::BraceOpen,
        TokenKind::BraceClose,
        TokenKind::BlockStart,
        TokenKind::BlockEnd,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Bool,
        TokenKind::Double,
        TokenKind::Comment,
    ];

    /// Returns `true` if tokens of this kind have an entry in the lexeme
    /// sequence.
    #[inline]
    pub const fn carries_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Int | TokenKind::Decimal
        )
    }

    /// Returns `true` for reserved words, including the word operators
    /// `is` and `is not`.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::For
                | TokenKind::End
                | TokenKind::While
                | TokenKind::Foreach
                | TokenKind::TypeInt
                | TokenKind::TypeFloat
                | TokenKind::TypeString
                | TokenKind::TypeBool
                | TokenKind::TypeDouble
                | TokenKind::Is
                | TokenKind::IsNot
        )
    }

    /// Returns `true` for the synthetic indentation tokens.
    #[inline]
    pub const fn is_structural(self) -> bool {
        matches!(self, TokenKind::BlockStart | TokenKind::BlockEnd)
    }

    /// Upper-case name used when printing token streams.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENT",
            TokenKind::If => "IF",
            TokenKind::For => "FOR",
            TokenKind::End => "END",
            TokenKind::While => "WHILE",
            TokenKind::Foreach => "FOREACH",
            TokenKind::TypeInt => "TYPE_INT",
            TokenKind::TypeFloat => "TYPE_FLOAT",
            TokenKind::TypeString => "TYPE_STRING",
            TokenKind::TypeBool => "TYPE_BOOL",
            TokenKind::TypeDouble => "TYPE_DOUBLE",
            TokenKind::Int => "INT",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::IntDivide => "INT_DIVIDE",
            TokenKind::Power => "POWER",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::Is => "IS",
            TokenKind::IsNot => "IS_NOT",
            TokenKind::BraceOpen => "BRACE_OPEN",
            TokenKind::BraceClose => "BRACE_CLOSE",
            TokenKind::BlockStart => "BLOCK_START",
            TokenKind::BlockEnd => "BLOCK_END",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Bool => "BOOL",
            TokenKind::Double => "DOUBLE",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
