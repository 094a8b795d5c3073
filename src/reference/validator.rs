//! Existence and ordering checks for parsed ranges.

use std::cmp::Ordering;

use super::error::RangeError;
use super::{CanonicalKey, ParsedRange};
use crate::bible::Bible;

/// Checks parsed ranges against the canon.
#[derive(Debug, Clone, Copy)]
pub struct RangeValidator<'a> {
    bible: &'a Bible,
}

impl<'a> RangeValidator<'a> {
    /// Create a validator over a Bible.
    pub const fn new(bible: &'a Bible) -> Self {
        Self { bible }
    }

    /// Validate a range, returning it with canonical book abbreviations.
    pub fn validate(&self, range: &ParsedRange) -> Result<ParsedRange, RangeError> {
        let start = self.canonical(&range.start)?;
        let end = self.canonical(&range.end)?;

        if self.bible.index().compare(&start, &end) == Some(Ordering::Greater) {
            return Err(RangeError::Reversed { start, end });
        }

        Ok(ParsedRange { start, end })
    }

    /// Whether a range exists and is in canonical order.
    pub fn is_valid(&self, range: &ParsedRange) -> bool {
        self.validate(range).is_ok()
    }

    fn canonical(&self, key: &CanonicalKey) -> Result<CanonicalKey, RangeError> {
        let (_, book) = self
            .bible
            .find_book(&key.book)
            .ok_or_else(|| RangeError::UnknownBook(key.book.clone()))?;

        let chapter = book.chapter(key.chapter).ok_or_else(|| RangeError::ChapterOutOfRange {
            book: book.abbreviation().to_string(),
            chapter: key.chapter,
            chapters: book.chapter_count(),
        })?;

        if key.verse == 0 || key.verse > chapter.verse_count() {
            return Err(RangeError::VerseOutOfRange {
                book: book.abbreviation().to_string(),
                chapter: key.chapter,
                verse: key.verse,
                verses: chapter.verse_count(),
            });
        }

        Ok(CanonicalKey::new(book.abbreviation(), key.chapter, key.verse))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn range(start: (&str, u32, u32), end: (&str, u32, u32)) -> ParsedRange {
        ParsedRange {
            start: CanonicalKey::new(start.0, start.1, start.2),
            end: CanonicalKey::new(end.0, end.1, end.2),
        }
    }

    #[test]
    fn test_valid_range_is_canonicalized() {
        let bible = Bible::standard();
        let validator = RangeValidator::new(&bible);
        let validated = validator
            .validate(&range(("HEBREWS", 13, 1), ("jas", 1, 27)))
            .unwrap();
        assert_eq!(validated.to_string(), "HEB.13.1-JAS.1.27");
    }

    #[test]
    fn test_single_key() {
        let bible = Bible::standard();
        let validator = RangeValidator::new(&bible);
        assert!(validator.is_valid(&ParsedRange::single(CanonicalKey::new("GEN", 1, 31))));
        assert!(!validator.is_valid(&ParsedRange::single(CanonicalKey::new("GEN", 1, 32))));
    }

    #[test]
    fn test_unknown_book() {
        let bible = Bible::standard();
        let err = RangeValidator::new(&bible)
            .validate(&range(("XYZ", 1, 1), ("XYZ", 1, 1)))
            .unwrap_err();
        assert_eq!(err, RangeError::UnknownBook("XYZ".into()));
    }

    #[test]
    fn test_out_of_bounds() {
        let bible = Bible::standard();
        let validator = RangeValidator::new(&bible);
        assert_eq!(
            validator.validate(&range(("HEB", 14, 1), ("HEB", 14, 1))).unwrap_err(),
            RangeError::ChapterOutOfRange {
                book: "HEB".into(),
                chapter: 14,
                chapters: 13
            }
        );
        assert_eq!(
            validator.validate(&range(("HEB", 11, 1), ("HEB", 11, 41))).unwrap_err(),
            RangeError::VerseOutOfRange {
                book: "HEB".into(),
                chapter: 11,
                verse: 41,
                verses: 40
            }
        );
        assert!(!validator.is_valid(&range(("HEB", 0, 1), ("HEB", 1, 1))));
        assert!(!validator.is_valid(&range(("HEB", 1, 0), ("HEB", 1, 1))));
    }

    #[test]
    fn test_reversed() {
        let bible = Bible::standard();
        let validator = RangeValidator::new(&bible);
        assert!(matches!(
            validator.validate(&range(("JAS", 1, 1), ("HEB", 13, 25))),
            Err(RangeError::Reversed { .. })
        ));
        assert!(!validator.is_valid(&range(("HEB", 11, 6), ("HEB", 11, 1))));
        assert!(!validator.is_valid(&range(("HEB", 12, 1), ("HEB", 11, 40))));
    }
}
