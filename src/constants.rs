//! Application constants.
//!
//! Centralizes the reference grammar and tuning values.

/// Reference notation separators.
pub mod grammar {
    /// Separates blocks; carry context resets at each one.
    pub const BLOCK_SEPARATOR: char = ';';

    /// Separates entries inside a block.
    pub const ENTRY_SEPARATOR: char = ',';

    /// Separates chapter from verse.
    pub const CHAPTER_VERSE_SEPARATOR: char = ':';

    /// Alternative chapter/verse separator (`Heb 11.1`, `HEB.11.1`).
    pub const KEY_SEPARATOR: char = '.';

    /// Range separators: hyphen, en dash and em dash.
    pub const RANGE_SEPARATORS: &[char] = &['-', '\u{2013}', '\u{2014}'];
}

/// Canonical text constants.
pub mod canon {
    /// Number of books in the canon.
    pub const BOOK_COUNT: usize = 66;
}

/// Book-name suggestion constants.
pub mod search {
    /// Minimum fuzzy score for a book suggestion.
    pub const MIN_SUGGESTION_SCORE: i64 = 40;
}

/// Command line constants.
pub mod cli {
    /// Default number of inputs above which resolution runs in parallel.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16;

    /// Default log filter when `RUST_LOG` is unset.
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}
