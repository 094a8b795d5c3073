//! Rewrites elliptical entries into self-contained ones.
//!
//! The same bare number means a new chapter or a new verse depending only on
//! the previous entry: after `Psa140` (a whole chapter) `141` is chapter 141,
//! after `Heb11:1` `6` is verse 6.

use super::ParseContext;
use crate::constants::grammar::{CHAPTER_VERSE_SEPARATOR, KEY_SEPARATOR};

/// Rewrite `entry` using the carried context.
///
/// Entries that name their own book, and any entry when nothing is carried,
/// come back unchanged.
pub fn normalize(ctx: &ParseContext, entry: &str) -> String {
    let entry = entry.trim();

    let Some(book) = ctx.current_book.as_deref() else {
        return entry.to_string();
    };

    if entry.chars().any(char::is_alphabetic) {
        return entry.to_string();
    }

    if names_chapter(entry) {
        return format!("{book}{entry}");
    }

    if ctx.current_verse.is_none() || ctx.last_entry_added_implicit_full_chapter {
        return format!("{book}{entry}");
    }

    match ctx.current_chapter {
        Some(chapter) => format!("{book}{chapter}{CHAPTER_VERSE_SEPARATOR}{entry}"),
        None => format!("{book}{entry}"),
    }
}

/// Whether the entry carries its own chapter: `12:3`, `:3` or `12.3`.
fn names_chapter(entry: &str) -> bool {
    let chars: Vec<char> = entry.chars().filter(|c| !c.is_whitespace()).collect();
    entry.contains(CHAPTER_VERSE_SEPARATOR)
        || chars
            .windows(3)
            .any(|w| w[0].is_ascii_digit() && w[1] == KEY_SEPARATOR && w[2].is_ascii_digit())
}
