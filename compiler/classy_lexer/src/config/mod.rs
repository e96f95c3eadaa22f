//! Scanner configuration.

use std::num::NonZeroU32;

const DEFAULT_WIDTH: NonZeroU32 = match NonZeroU32::new(4) {
    Some(width) => width,
    None => panic!("default indent width must be non-zero"),
};

/// What to do when a dedent lands between two open levels.
///
/// With blocks open at levels `0, 2` and a line at level 1, lenient mode
/// closes the level-2 block and carries on at level 0. Strict mode reports
/// [`LexErrorKind::InconsistentDedent`](crate::LexErrorKind::InconsistentDedent).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum DedentPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Configuration for one scan.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanConfig {
    /// Spaces per indentation level. Leading whitespace must be a multiple.
    pub indent_width: NonZeroU32,
    /// Spaces contributed by one horizontal tab.
    pub tab_width: u32,
    /// Handling of dedents that match no open level.
    pub dedent: DedentPolicy,
    /// Emit a block end for the base level at end of input, leaving the
    /// indent stack empty. Off by default: the base level is never opened
    /// by a block start, so closing it unbalances the output.
    pub close_base_level: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            indent_width: DEFAULT_WIDTH,
            tab_width: DEFAULT_WIDTH.get(),
            dedent: DedentPolicy::Lenient,
            close_base_level: false,
        }
    }
}

impl ScanConfig {
    /// Defaults, but reject dedents that match no open level.
    pub fn strict() -> Self {
        ScanConfig {
            dedent: DedentPolicy::Strict,
            ..ScanConfig::default()
        }
    }
}
