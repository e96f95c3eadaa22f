//! Byte classification for scanner dispatch.
//!
//! Every byte maps to exactly one [`CharClass`]. The scanner matches on the
//! class rather than on raw bytes, so adding punctuation means adding a
//! variant here and the compiler points at every dispatch site that has to
//! handle it.

/// Lexical class of a single source byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter or `_`: starts an identifier or keyword.
    Letter,
    /// ASCII digit: starts a numeric literal.
    Digit,
    /// `\n`.
    Newline,
    /// `\r`; only valid as the first half of `\r\n`.
    CarriageReturn,
    /// Space or horizontal tab.
    Blank,
    /// `=`.
    Equals,
    /// `!`.
    Bang,
    /// `{`.
    BraceOpen,
    /// `}`.
    BraceClose,
    /// `+`.
    Plus,
    /// `-`.
    Minus,
    /// `*`.
    Star,
    /// `/`.
    Slash,
    /// `"` or `'`: opens a string literal.
    Quote,
    /// `0x00`: end-of-input sentinel, or an interior null byte.
    Nul,
    /// Anything else, including every non-ASCII byte.
    Other,
}

impl CharClass {
    /// Classify a byte.
    #[inline]
    pub const fn of(byte: u8) -> Self {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => CharClass::Letter,
            b'0'..=b'9' => CharClass::Digit,
            b'\n' => CharClass::Newline,
            b'\r' => CharClass::CarriageReturn,
            b' ' | b'\t' => CharClass::Blank,
            b'=' => CharClass::Equals,
            b'!' => CharClass::Bang,
            b'{' => CharClass::BraceOpen,
            b'}' => CharClass::BraceClose,
            b'+' => CharClass::Plus,
            b'-' => CharClass::Minus,
            b'*' => CharClass::Star,
            b'/' => CharClass::Slash,
            b'"' | b'\'' => CharClass::Quote,
            0 => CharClass::Nul,
            _ => CharClass::Other,
        }
    }
}

/// Returns `true` if `byte` may continue an identifier.
///
/// Identifiers are letters and underscores only; digits end them.
#[inline]
pub const fn is_ident_continue(byte: u8) -> bool {
    matches!(CharClass::of(byte), CharClass::Letter)
}

/// Returns `true` if `byte` is an ASCII digit.
#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}
