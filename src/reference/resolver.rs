//! Walks the canon from a start key to an end key.

use super::{CanonicalKey, ParsedRange, Verse};
use crate::bible::Bible;

/// Expands validated ranges into verses.
#[derive(Debug, Clone, Copy)]
pub struct VerseRangeResolver<'a> {
    bible: &'a Bible,
}

impl<'a> VerseRangeResolver<'a> {
    /// Create a resolver over a Bible.
    pub const fn new(bible: &'a Bible) -> Self {
        Self { bible }
    }

    /// All verses from `range.start` through `range.end`, in canonical order.
    ///
    /// Collection starts at the start key and stops right after the end key.
    /// A start key that is never reached yields nothing.
    pub fn resolve(&self, range: &ParsedRange) -> Vec<Verse> {
        let mut verses = Vec::new();
        let index = self.bible.index();
        let (Some(start_book), Some(end_book)) =
            (index.position(&range.start.book), index.position(&range.end.book))
        else {
            return verses;
        };

        let start = (start_book, range.start.chapter, range.start.verse);
        let end = (end_book, range.end.chapter, range.end.verse);
        let mut collecting = false;

        for (book_pos, book) in self.bible.books().iter().enumerate().skip(start_book) {
            for chapter in book.chapters() {
                if !collecting && (book_pos, chapter.number()) != (start.0, start.1) {
                    continue;
                }
                for (number, content) in (1u32..).zip(chapter.verses()) {
                    let position = (book_pos, chapter.number(), number);
                    if position == start {
                        collecting = true;
                    }
                    if !collecting {
                        continue;
                    }

                    verses.push(Verse {
                        key: CanonicalKey::new(book.abbreviation(), chapter.number(), number),
                        human_reference: format!("{} {}:{number}", book.short_name(), chapter.number()),
                        content: content.clone(),
                    });

                    if position == end {
                        return verses;
                    }
                }
            }
        }

        verses
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn keys(verses: &[Verse]) -> Vec<String> {
        verses.iter().map(|v| v.key.to_string()).collect()
    }

    fn range(start: &str, end: &str) -> ParsedRange {
        ParsedRange {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn test_single_verse() {
        let bible = Bible::standard();
        let verses = VerseRangeResolver::new(&bible).resolve(&range("HEB.11.1", "HEB.11.1"));
        assert_eq!(keys(&verses), vec!["HEB.11.1"]);
        assert_eq!(verses[0].human_reference, "Hebrews 11:1");
    }

    #[test]
    fn test_across_chapters() {
        let bible = Bible::standard();
        let verses = VerseRangeResolver::new(&bible).resolve(&range("HEB.11.39", "HEB.12.2"));
        assert_eq!(keys(&verses), vec!["HEB.11.39", "HEB.11.40", "HEB.12.1", "HEB.12.2"]);
    }

    #[test]
    fn test_across_books() {
        let bible = Bible::standard();
        let verses = VerseRangeResolver::new(&bible).resolve(&range("2JN.1.13", "3JN.1.2"));
        assert_eq!(keys(&verses), vec!["2JN.1.13", "3JN.1.1", "3JN.1.2"]);
        assert_eq!(verses[1].human_reference, "3 John 1:1");
    }

    #[test]
    fn test_whole_canon_tail() {
        let bible = Bible::standard();
        let verses = VerseRangeResolver::new(&bible).resolve(&range("JUD.1.1", "REV.22.21"));
        assert_eq!(verses.len(), 25 + 404);
        assert_eq!(verses.last().unwrap().key, CanonicalKey::new("REV", 22, 21));
    }

    #[test]
    fn test_unreachable_start_is_empty() {
        let bible = Bible::standard();
        let resolver = VerseRangeResolver::new(&bible);
        assert!(resolver.resolve(&range("XYZ.1.1", "HEB.1.1")).is_empty());
        assert!(resolver.resolve(&range("HEB.11.41", "HEB.12.1")).is_empty());
    }

    #[test]
    fn test_content_is_copied() {
        let books = Bible::standard()
            .books()
            .iter()
            .map(|b| {
                let chapters = b
                    .chapters()
                    .iter()
                    .map(|c| {
                        let texts = (1..=c.verse_count())
                            .map(|v| format!("{} {}:{v}", b.abbreviation(), c.number()))
                            .collect();
                        crate::bible::Chapter::new(c.number(), texts)
                    })
                    .collect();
                crate::bible::Book::new(b.abbreviation(), b.short_name(), chapters)
            })
            .collect();
        let bible = Bible::from_books(books).unwrap();
        let verses = VerseRangeResolver::new(&bible).resolve(&range("GEN.1.1", "GEN.1.2"));
        assert_eq!(verses[1].content, "GEN 1:2");
    }
}
