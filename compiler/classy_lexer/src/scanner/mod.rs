//! The Classy scanner.
//!
//! Walks the source once, left to right, dispatching on the [`CharClass`]
//! of the current byte. Each arm calls a focused method that advances the
//! cursor past one lexeme and pushes at most one token; the newline arm
//! runs indentation handling, which may push any number of block tokens.
//!
//! # Indentation
//!
//! After every newline the leading whitespace of the next line is measured
//! (space = 1, tab = `tab_width`). Whitespace-only lines are skipped
//! without measuring. Otherwise the width must be a multiple of
//! `indent_width`, and the resulting level is compared with the innermost
//! open level:
//!
//! - deeper: one `BlockStart`
//! - shallower: one `BlockEnd` per level closed
//!
//! At end of input every level above the base is closed.

use classy_lexer_core::{is_digit, is_ident_continue, CharClass, Cursor, SourceBuffer};
use tracing::trace;

use crate::indent::{IndentChange, IndentStack};
use crate::keywords::{self, is_not_word};
use crate::{DedentPolicy, LexError, ScanConfig, ScanOutput, Span, Token, TokenKind, TokenList};

/// Single-use scanner over one source text.
///
/// [`scan`](Self::scan) consumes the scanner; scanning again needs a new
/// instance.
#[derive(Clone, Debug)]
pub struct Scanner {
    buffer: SourceBuffer,
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner with the default configuration.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Create a scanner with an explicit configuration.
    pub fn with_config(source: &str, config: ScanConfig) -> Self {
        Scanner {
            buffer: SourceBuffer::new(source),
            config,
        }
    }

    /// The source text being scanned.
    pub fn source(&self) -> &str {
        self.buffer.as_str()
    }

    /// The configuration this scanner was built with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan the whole source.
    ///
    /// Returns every token and lexeme, or the first error. Nothing is
    /// returned on error.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.buffer.source_len()))]
    pub fn scan(self) -> Result<ScanOutput, LexError> {
        let mut state = ScanState::new(self.buffer.cursor(), &self.config);
        state.run()?;
        tracing::debug!(
            tokens = state.tokens.len(),
            lexemes = state.lexemes.len(),
            lines = state.line,
            "scan complete"
        );
        Ok(ScanOutput::new(state.tokens, state.lexemes, state.indents))
    }
}

/// Mutable state of one scan.
struct ScanState<'a> {
    cursor: Cursor<'a>,
    config: &'a ScanConfig,
    /// 1-based line of the cursor.
    line: u32,
    indents: IndentStack,
    tokens: TokenList,
    lexemes: Vec<String>,
}

impl<'a> ScanState<'a> {
    fn new(cursor: Cursor<'a>, config: &'a ScanConfig) -> Self {
        ScanState {
            cursor,
            config,
            line: 1,
            indents: IndentStack::new(),
            tokens: TokenList::new(),
            lexemes: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), LexError> {
        loop {
            let start = self.cursor.pos();
            match CharClass::of(self.cursor.current()) {
                CharClass::Nul if self.cursor.is_eof() => break,
                CharClass::Letter => self.identifier(start),
                CharClass::Digit => self.number(start)?,
                CharClass::Newline => {
                    self.cursor.advance();
                    self.newline()?;
                }
                CharClass::CarriageReturn if self.cursor.peek() == b'\n' => {
                    self.cursor.advance_n(2);
                    self.newline()?;
                }
                CharClass::Blank => self.cursor.eat_whitespace(),
                CharClass::Equals => {
                    self.single_or_double(start, b'=', TokenKind::Assign, TokenKind::Equals);
                }
                CharClass::Bang if self.cursor.peek() == b'=' => {
                    self.cursor.advance_n(2);
                    self.push(TokenKind::NotEquals, start);
                }
                CharClass::BraceOpen => self.single(start, TokenKind::BraceOpen),
                CharClass::BraceClose => self.single(start, TokenKind::BraceClose),
                CharClass::Plus => {
                    self.single_or_double(start, b'+', TokenKind::Plus, TokenKind::Increment);
                }
                CharClass::Minus => {
                    self.single_or_double(start, b'-', TokenKind::Minus, TokenKind::Decrement);
                }
                CharClass::Star => {
                    self.single_or_double(start, b'*', TokenKind::Times, TokenKind::Power);
                }
                CharClass::Slash => {
                    self.single_or_double(start, b'/', TokenKind::Divide, TokenKind::IntDivide);
                }
                CharClass::Quote => {
                    return Err(LexError::unsupported_string_literal(
                        Span::new(start, start + 1),
                        self.line,
                    ));
                }
                CharClass::Nul | CharClass::CarriageReturn | CharClass::Bang | CharClass::Other => {
                    return Err(self.unexpected_char(start));
                }
            }
        }
        self.close_all_blocks();
        Ok(())
    }

    // ─── Tokens ──────────────────────────────────────────────────────

    fn push(&mut self, kind: TokenKind, start: u32) {
        self.tokens
            .push(Token::new(kind, Span::new(start, self.cursor.pos())));
    }

    fn single(&mut self, start: u32, kind: TokenKind) {
        self.cursor.advance();
        self.push(kind, start);
    }

    /// One-byte lookahead: `second` after the current byte selects `double`.
    fn single_or_double(&mut self, start: u32, second: u8, single: TokenKind, double: TokenKind) {
        self.cursor.advance();
        let kind = if self.cursor.current() == second {
            self.cursor.advance();
            double
        } else {
            single
        };
        self.push(kind, start);
    }

    fn identifier(&mut self, start: u32) {
        self.cursor.advance(); // first byte already classified as a letter
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        match keywords::lookup(text) {
            Some(TokenKind::Is) if self.eat_trailing_not() => self.push(TokenKind::IsNot, start),
            Some(kind) => self.push(kind, start),
            None => {
                self.lexemes.push(text.to_owned());
                self.push(TokenKind::Identifier, start);
            }
        }
    }

    /// After `is`: consume `not`, in any case, if it is the next word on
    /// the same line.
    fn eat_trailing_not(&mut self) -> bool {
        let mut probe = self.cursor;
        probe.eat_whitespace();
        let word_start = probe.pos();
        probe.eat_while(is_ident_continue);
        if is_not_word(probe.slice_from(word_start)) {
            self.cursor = probe;
            true
        } else {
            false
        }
    }

    fn number(&mut self, start: u32) -> Result<(), LexError> {
        self.cursor.eat_while(is_digit);
        let kind = if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
            if self.cursor.current() == b'.' {
                let dot = self.cursor.pos();
                return Err(LexError::second_decimal_point(
                    Span::new(dot, dot + 1),
                    self.line,
                ));
            }
            TokenKind::Decimal
        } else {
            TokenKind::Int
        };
        self.lexemes.push(self.cursor.slice_from(start).to_owned());
        self.push(kind, start);
        Ok(())
    }

    // ─── Indentation ─────────────────────────────────────────────────

    /// Called with the cursor just past a line break.
    fn newline(&mut self) -> Result<(), LexError> {
        self.line += 1;
        let run_start = self.cursor.pos();
        let mut spaces: u32 = 0;
        loop {
            match self.cursor.current() {
                b' ' => spaces = spaces.saturating_add(1),
                b'\t' => spaces = spaces.saturating_add(self.config.tab_width),
                _ => break,
            }
            self.cursor.advance();
        }

        // Whitespace-only line: the next line break is handled by `run`.
        if self.at_line_end() {
            return Ok(());
        }

        let width = self.config.indent_width.get();
        if spaces % width != 0 {
            return Err(LexError::uneven_indentation(
                Span::new(run_start, self.cursor.pos()),
                self.line,
                spaces,
                width,
                self.indents.last(),
            ));
        }

        let level = spaces / width;
        let at = Span::point(self.cursor.pos());
        match self.indents.update(level) {
            IndentChange::Unchanged => {}
            IndentChange::Opened => {
                trace!(line = self.line, level, "block start");
                self.tokens.push(Token::new(TokenKind::BlockStart, at));
            }
            IndentChange::Closed { count, landed_on } => {
                if self.config.dedent == DedentPolicy::Strict && landed_on != level {
                    return Err(LexError::inconsistent_dedent(at, self.line, level, landed_on));
                }
                trace!(line = self.line, level, count, "block end");
                for _ in 0..count {
                    self.tokens.push(Token::new(TokenKind::BlockEnd, at));
                }
            }
        }
        Ok(())
    }

    /// Returns `true` at `\n`, `\r\n`, or end of input.
    fn at_line_end(&self) -> bool {
        match self.cursor.current() {
            b'\n' => true,
            b'\r' => self.cursor.peek() == b'\n',
            0 => self.cursor.is_eof(),
            _ => false,
        }
    }

    fn close_all_blocks(&mut self) {
        let count = self.indents.close_all(self.config.close_base_level);
        trace!(count, "closing open blocks at end of input");
        let at = Span::point(self.cursor.pos());
        for _ in 0..count {
            self.tokens.push(Token::new(TokenKind::BlockEnd, at));
        }
    }

    // ─── Errors ──────────────────────────────────────────────────────

    #[cold]
    fn unexpected_char(&self, start: u32) -> LexError {
        let found = self.cursor.current_char().unwrap_or('\0');
        let width = u32::try_from(found.len_utf8()).unwrap_or(1);
        LexError::unexpected_char(Span::new(start, start + width), self.line, found)
    }
}

#[cfg(test)]
mod tests;
