//! Low-level scanning primitives for Classy.
//!
//! This crate has no `classy_*` dependencies. It provides:
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source text
//! - [`Cursor`]: byte cursor with sentinel-safe lookahead
//! - [`CharClass`]: closed classification of a byte for scanner dispatch
//!
//! Token kinds, keywords, indentation, and errors live in `classy_lexer`.

mod char_class;
mod cursor;
mod source_buffer;

pub use char_class::{is_digit, is_ident_continue, CharClass};
pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
