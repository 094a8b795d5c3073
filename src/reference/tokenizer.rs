//! Splits raw input into blocks and entries.
//!
//! Blocks are `;`-separated. Inside a block, fragment boundaries sit at the
//! start of each `,`-chunk that contains a letter; chunks without letters
//! (`6` in `Heb11:1,6`) belong to the fragment before them. Each fragment is
//! then split into its `,`-separated entries. Text before the first letter
//! of a block is dropped, so input without letters yields nothing.

use crate::constants::grammar::{BLOCK_SEPARATOR, ENTRY_SEPARATOR};

/// The entries of one block, in input order.
pub type Block = Vec<String>;

/// Split raw input into blocks of entries.
pub fn tokenize(raw: &str) -> Vec<Block> {
    let mut raw = raw.to_string();
    if !raw.ends_with(BLOCK_SEPARATOR) {
        raw.push(BLOCK_SEPARATOR);
    }

    raw.split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .map(block_entries)
        .filter(|entries| !entries.is_empty())
        .collect()
}

/// Byte offsets where fragments begin, plus the block length.
fn fragment_bounds(block: &str) -> Vec<usize> {
    let mut bounds = Vec::new();
    let mut chunk_start = 0;
    let mut letter_seen = false;

    for (idx, ch) in block.char_indices() {
        if ch == ENTRY_SEPARATOR {
            chunk_start = idx + ch.len_utf8();
            letter_seen = false;
        } else if ch.is_alphabetic() && !letter_seen {
            letter_seen = true;
            bounds.push(chunk_start);
        }
    }

    bounds.push(block.len());
    bounds
}

fn block_entries(block: &str) -> Block {
    fragment_bounds(block)
        .windows(2)
        .flat_map(|w| block[w[0]..w[1]].split(ENTRY_SEPARATOR))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_blocks_and_entries() {
        assert_eq!(
            tokenize("Heb11:1,6;Rom8-9;2John1:1-3John1:3"),
            vec![vec!["Heb11:1", "6"], vec!["Rom8-9"], vec!["2John1:1-3John1:3"]]
        );
    }

    #[test]
    fn test_trailing_separator_and_empty_blocks() {
        assert_eq!(tokenize("Gen1;"), vec![vec!["Gen1"]]);
        assert_eq!(tokenize(";;Gen1;; ;Exo2"), vec![vec!["Gen1"], vec!["Exo2"]]);
    }

    #[test]
    fn test_book_bearing_chunks_split() {
        assert_eq!(tokenize("Heb11,Rom2"), vec![vec!["Heb11", "Rom2"]]);
    }

    #[test]
    fn test_numbered_book_stays_with_its_name() {
        assert_eq!(tokenize("Heb11, 1John2"), vec![vec!["Heb11", "1John2"]]);
        assert_eq!(fragment_bounds("Heb11, 1John2"), vec![0, 6, 13]);
    }

    #[test]
    fn test_bare_continuations_stay_attached() {
        assert_eq!(fragment_bounds("Heb11:1,6"), vec![0, 9]);
        assert_eq!(tokenize("Heb11:1, 6, 8-10"), vec![vec!["Heb11:1", "6", "8-10"]]);
    }

    #[test]
    fn test_ranges_are_one_entry() {
        assert_eq!(tokenize("Heb13-Jas1"), vec![vec!["Heb13-Jas1"]]);
    }

    #[test]
    fn test_no_letters_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("11:1,6;3").is_empty());
    }

    #[test]
    fn test_leading_bare_numbers_are_dropped() {
        assert_eq!(tokenize("3, 4, Gen1"), vec![vec!["Gen1"]]);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        assert_eq!(tokenize("Gen1,,2, ,"), vec![vec!["Gen1", "2"]]);
    }
}
