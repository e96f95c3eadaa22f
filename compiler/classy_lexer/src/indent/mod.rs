//! Indentation level stack.
//!
//! Holds the open indentation levels, outermost first. The bottom entry is
//! the base level `0` and stays put for the whole scan; only
//! [`IndentStack::close_all`] with `include_base` removes it.
//!
//! # Invariant
//!
//! Between calls the levels are strictly increasing from bottom to top.

use smallvec::{smallvec, SmallVec};

/// Result of moving to a new line's indentation level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndentChange {
    /// Same level as the innermost open block.
    Unchanged,
    /// One block opened, however many levels the line jumped.
    Opened,
    /// `count` blocks closed. `landed_on` is the innermost level still
    /// open, which may be below the requested level.
    Closed { count: u32, landed_on: u32 },
}

/// Stack of open indentation levels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndentStack {
    levels: SmallVec<[u32; 8]>,
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentStack {
    /// A stack holding only the base level.
    pub fn new() -> Self {
        IndentStack {
            levels: smallvec![0],
        }
    }

    /// Innermost open level (`0` once the base level has been closed).
    #[inline]
    pub fn last(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Open levels, outermost first.
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Number of open levels, including the base level.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Move to `level`, opening or closing blocks as needed.
    pub fn update(&mut self, level: u32) -> IndentChange {
        let last = self.last();
        let change = if level > last {
            self.levels.push(level);
            IndentChange::Opened
        } else if level < last {
            let mut count = 0;
            while self.levels.last().is_some_and(|&top| top > level) {
                self.levels.pop();
                count += 1;
            }
            IndentChange::Closed {
                count,
                landed_on: self.last(),
            }
        } else {
            IndentChange::Unchanged
        };
        debug_assert!(
            self.levels.windows(2).all(|w| w[0] < w[1]),
            "indent stack must be strictly increasing: {:?}",
            self.levels
        );
        change
    }

    /// Close every open level above the base, and the base too when
    /// `include_base` is set. Returns the number of levels closed.
    pub fn close_all(&mut self, include_base: bool) -> u32 {
        let keep = usize::from(!include_base).min(self.levels.len());
        let closed = self.levels.len() - keep;
        self.levels.truncate(keep);
        u32::try_from(closed).unwrap_or(u32::MAX)
    }
}
