//! Reasons a reference entry is skipped.
//!
//! None of these abort a lookup. The resolver records them next to the
//! verses it did produce so callers and tests can see what was dropped.

use thiserror::Error;

use super::CanonicalKey;

/// An entry that could not be turned into a start/end pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// No book in the entry and none carried from an earlier entry.
    #[error("no book name and no earlier reference to continue")]
    MissingBook,

    /// A book without a chapter, e.g. `Heb` or `Heb:3`.
    #[error("no chapter given for {book}")]
    MissingChapter {
        /// Book token as typed.
        book: String,
    },

    /// A chapter or verse number that does not fit.
    #[error("number {0} is too large")]
    InvalidNumber(String),

    /// A character outside the reference grammar.
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset within the entry.
        position: usize,
    },

    /// Whole-chapter expansion named a book that does not exist.
    #[error("unknown book {0}")]
    UnknownBook(String),

    /// Whole-chapter expansion named a chapter past the end of its book.
    #[error("{book} has no chapter {chapter}")]
    ChapterOutOfRange {
        /// Book token as typed.
        book: String,
        /// Requested chapter.
        chapter: u32,
    },

    /// A `B.C.V` key string that does not have three parts.
    #[error("malformed key {0:?}")]
    MalformedKey(String),
}

/// A parsed range that does not exist in the canon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Book not found in the index.
    #[error("unknown book {0}")]
    UnknownBook(String),

    /// Chapter outside `1..=chapters`.
    #[error("{book} has {chapters} chapters, not {chapter}")]
    ChapterOutOfRange {
        /// Canonical abbreviation.
        book: String,
        /// Requested chapter.
        chapter: u32,
        /// Chapters in the book.
        chapters: u32,
    },

    /// Verse outside `1..=verses`.
    #[error("{book} {chapter} has {verses} verses, not {verse}")]
    VerseOutOfRange {
        /// Canonical abbreviation.
        book: String,
        /// Chapter.
        chapter: u32,
        /// Requested verse.
        verse: u32,
        /// Verses in the chapter.
        verses: u32,
    },

    /// Start comes after end in canonical order.
    #[error("range starts at {start} after it ends at {end}")]
    Reversed {
        /// Start key.
        start: CanonicalKey,
        /// End key.
        end: CanonicalKey,
    },
}

/// Why an entry produced no verses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The entry did not parse.
    #[error(transparent)]
    Entry(#[from] EntryError),

    /// The entry parsed to a range outside the canon.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl SkipReason {
    /// The unknown book token, if that is why the entry was skipped.
    pub fn unknown_book(&self) -> Option<&str> {
        match self {
            Self::Entry(EntryError::UnknownBook(book)) | Self::Range(RangeError::UnknownBook(book)) => {
                Some(book)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_messages() {
        let err = RangeError::VerseOutOfRange {
            book: "HEB".into(),
            chapter: 11,
            verse: 41,
            verses: 40,
        };
        assert_eq!(err.to_string(), "HEB 11 has 40 verses, not 41");

        let reversed = RangeError::Reversed {
            start: CanonicalKey::new("JAS", 1, 1),
            end: CanonicalKey::new("HEB", 13, 1),
        };
        assert_eq!(reversed.to_string(), "range starts at JAS.1.1 after it ends at HEB.13.1");
    }

    #[test]
    fn test_skip_reason_unknown_book() {
        let reason = SkipReason::from(RangeError::UnknownBook("XYZ".into()));
        assert_eq!(reason.unknown_book(), Some("XYZ"));
        assert_eq!(reason.to_string(), "unknown book XYZ");

        let reason = SkipReason::from(EntryError::MissingBook);
        assert_eq!(reason.unknown_book(), None);
    }
}
