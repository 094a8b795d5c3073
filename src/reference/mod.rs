//! Scripture reference resolution pipeline.
//!
//! raw string → [`tokenizer`] → [`normalizer`] → [`parser`] →
//! [`validator`] → [`resolver`] → ordered verses.
//!
//! [`crate::services::scripture::ReferenceResolver`] wires the stages
//! together; the stages are public for callers that need only part of it.

pub mod error;
pub mod normalizer;
pub mod parser;
pub mod resolver;
pub mod tokenizer;
pub mod validator;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::grammar::KEY_SEPARATOR;

pub use error::{EntryError, RangeError, SkipReason};
pub use normalizer::normalize;
pub use parser::BcvParser;
pub use resolver::VerseRangeResolver;
pub use tokenizer::{tokenize, Block};
pub use validator::RangeValidator;

/// A Book.Chapter.Verse key, written `HEB.11.1`.
///
/// Keys only order through [`crate::bible::BookIndex::compare`], since the
/// book component may be any accepted spelling until validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalKey {
    /// Book abbreviation.
    pub book: String,
    /// 1-based chapter.
    pub chapter: u32,
    /// 1-based verse.
    pub verse: u32,
}

impl CanonicalKey {
    /// Create a key.
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}", self.book, self.chapter, self.verse)
    }
}

impl FromStr for CanonicalKey {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EntryError::MalformedKey(s.to_string());
        let mut parts = s.trim().split(KEY_SEPARATOR);
        let (Some(book), Some(chapter), Some(verse), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if book.is_empty() {
            return Err(malformed());
        }
        let chapter = chapter.parse().map_err(|_| malformed())?;
        let verse = verse.parse().map_err(|_| malformed())?;
        Ok(Self::new(book, chapter, verse))
    }
}

/// A start/end pair of keys; `start == end` for a single verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRange {
    /// First verse, inclusive.
    pub start: CanonicalKey,
    /// Last verse, inclusive.
    pub end: CanonicalKey,
}

impl ParsedRange {
    /// A range covering one verse.
    pub fn single(key: CanonicalKey) -> Self {
        Self {
            end: key.clone(),
            start: key,
        }
    }
}

impl fmt::Display for ParsedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Parser output for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Start key.
    pub start: CanonicalKey,
    /// End key for ranges and whole chapters.
    pub end: Option<CanonicalKey>,
    /// No explicit verse was given; the entry covers whole chapters.
    pub implied_full_chapter: bool,
}

impl ParsedEntry {
    /// The entry as a start/end pair.
    pub fn range(&self) -> ParsedRange {
        ParsedRange {
            start: self.start.clone(),
            end: self.end.clone().unwrap_or_else(|| self.start.clone()),
        }
    }

    /// The last key the entry covers.
    pub fn last(&self) -> &CanonicalKey {
        self.end.as_ref().unwrap_or(&self.start)
    }
}

/// Book/chapter/verse carried from one entry to the next within a block.
///
/// Values are never mutated: [`ParseContext::after`] returns the context
/// for the following entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// Book of the previous entry.
    pub current_book: Option<String>,
    /// Chapter the previous entry ended in.
    pub current_chapter: Option<u32>,
    /// Verse the previous entry ended at.
    pub current_verse: Option<u32>,
    /// The previous entry was expanded to whole chapters.
    pub last_entry_added_implicit_full_chapter: bool,
}

impl ParseContext {
    /// Context for the entry following `parsed`.
    pub fn after(&self, parsed: &ParsedEntry) -> Self {
        let last = parsed.last();
        Self {
            current_book: Some(last.book.clone()),
            current_chapter: Some(last.chapter),
            current_verse: Some(last.verse),
            last_entry_added_implicit_full_chapter: parsed.implied_full_chapter,
        }
    }
}

/// A resolved verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    /// Canonical key, e.g. `HEB.11.1`.
    pub key: CanonicalKey,
    /// Display reference, e.g. `Hebrews 11:1`.
    pub human_reference: String,
    /// Verse text.
    pub content: String,
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human_reference)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_key_display_and_parse() {
        let key = CanonicalKey::new("HEB", 11, 1);
        assert_eq!(key.to_string(), "HEB.11.1");
        assert_eq!("HEB.11.1".parse::<CanonicalKey>().unwrap(), key);
        assert_eq!("1JN.5.7".parse::<CanonicalKey>().unwrap(), CanonicalKey::new("1JN", 5, 7));
    }

    #[test]
    fn test_key_parse_rejects_malformed() {
        for bad in ["HEB.11", "HEB.11.1.2", ".11.1", "HEB.x.1", "HEB.11.", ""] {
            assert!(bad.parse::<CanonicalKey>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_range_display() {
        let single = ParsedRange::single(CanonicalKey::new("GEN", 1, 1));
        assert_eq!(single.to_string(), "GEN.1.1");
        let range = ParsedRange {
            start: CanonicalKey::new("HEB", 13, 1),
            end: CanonicalKey::new("JAS", 1, 27),
        };
        assert_eq!(range.to_string(), "HEB.13.1-JAS.1.27");
    }

    #[test]
    fn test_context_after_entry() {
        let parsed = ParsedEntry {
            start: CanonicalKey::new("PSA", 140, 1),
            end: Some(CanonicalKey::new("PSA", 140, 13)),
            implied_full_chapter: true,
        };
        let ctx = ParseContext::default().after(&parsed);
        assert_eq!(ctx.current_book.as_deref(), Some("PSA"));
        assert_eq!(ctx.current_chapter, Some(140));
        assert_eq!(ctx.current_verse, Some(13));
        assert!(ctx.last_entry_added_implicit_full_chapter);
    }
}
