//! Reserved word resolution.
//!
//! Keywords are matched ignoring ASCII case against a table that is built
//! once per process and shared by every scan: `if`, `If`, and `IF` all
//! resolve to [`TokenKind::If`]. The candidate is folded into a stack
//! buffer, so lookup never allocates.
//!
//! `is not` is two words in the source but a single [`TokenKind::IsNot`]
//! token. Only `is` lives in the table; the scanner looks ahead for
//! `not`, in any
//! case, after resolving it.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::TokenKind;

/// Second word of the `is not` operator.
const NOT: &str = "not";

/// Lowercase spelling to kind, in no particular order.
const KEYWORDS: [(&str, TokenKind); 11] = [
    ("if", TokenKind::If),
    ("for", TokenKind::For),
    ("end", TokenKind::End),
    ("while", TokenKind::While),
    ("foreach", TokenKind::Foreach),
    ("is", TokenKind::Is),
    ("int", TokenKind::TypeInt),
    ("float", TokenKind::TypeFloat),
    ("string", TokenKind::TypeString),
    ("bool", TokenKind::TypeBool),
    ("double", TokenKind::TypeDouble),
];

/// Length of the longest spelling (`foreach`).
const MAX_KEYWORD_LEN: usize = 7;

static KEYWORD_MAP: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

fn keyword_map() -> &'static FxHashMap<&'static str, TokenKind> {
    KEYWORD_MAP.get_or_init(|| KEYWORDS.into_iter().collect())
}

/// Look up a reserved word, ignoring ASCII case.
///
/// Returns `None` for identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if len > MAX_KEYWORD_LEN {
        return None;
    }
    let mut folded = [0u8; MAX_KEYWORD_LEN];
    let folded = &mut folded[..len];
    folded.copy_from_slice(text.as_bytes());
    folded.make_ascii_lowercase();
    let key = std::str::from_utf8(folded).ok()?;
    keyword_map().get(key).copied()
}

/// Returns `true` if `text` is the second word of `is not`, in any case.
#[inline]
pub(crate) fn is_not_word(text: &str) -> bool {
    text.eq_ignore_ascii_case(NOT)
}

/// Iterate over every reserved spelling and its kind.
pub fn reserved_words() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.into_iter()
}
