//! Book/chapter/verse scanner.
//!
//! A single left-to-right pass collects book letters, chapter digits and
//! verse digits. A range separator ends the scan: the tail is normalized
//! against the head and parsed by a recursive call, and only its end key is
//! kept.
//!
//! | input                | start      | end         |
//! |----------------------|------------|-------------|
//! | `Heb11:1`            | `HEB.11.1` | -           |
//! | `Gen1`               | `GEN.1.1`  | `GEN.1.31`  |
//! | `Heb11:1-3`          | `HEB.11.1` | `HEB.11.3`  |
//! | `Heb11-12`           | `HEB.11.1` | `HEB.12.29` |
//! | `Rev20:10-21:10`     | `REV.20.10`| `REV.21.10` |
//! | `Heb13-Jas1`         | `HEB.13.1` | `JAS.1.27`  |
//! | `2John1:1-3John1:3`  | `2JOHN.1.1`| `3JOHN.1.3` |

use super::error::EntryError;
use super::normalizer::normalize;
use super::{CanonicalKey, ParseContext, ParsedEntry};
use crate::bible::Bible;
use crate::constants::grammar::{CHAPTER_VERSE_SEPARATOR, KEY_SEPARATOR, RANGE_SEPARATORS};

/// Parses normalized entries into start/end keys.
///
/// Book tokens are upper-cased but not resolved; that is the validator's
/// job. The Bible is consulted only for the last verse of a chapter when an
/// entry names whole chapters.
#[derive(Debug, Clone, Copy)]
pub struct BcvParser<'a> {
    bible: &'a Bible,
}

#[derive(Debug, Default)]
struct Components {
    book: String,
    chapter: String,
    verse: String,
}

impl Components {
    fn is_empty(&self) -> bool {
        self.book.is_empty() && self.chapter.is_empty() && self.verse.is_empty()
    }

    /// Fill missing parts from the carried context.
    fn complete(self, ctx: &ParseContext) -> Result<Head, EntryError> {
        let chapter = number(&self.chapter)?;
        let verse = number(&self.verse)?;

        if self.book.is_empty() {
            let book = ctx.current_book.clone().ok_or(EntryError::MissingBook)?;
            let (chapter, verse) = match chapter {
                Some(chapter) => (chapter, verse),
                None => {
                    let chapter = ctx
                        .current_chapter
                        .ok_or_else(|| EntryError::MissingChapter { book: book.clone() })?;
                    (chapter, verse.or(ctx.current_verse))
                }
            };
            return Ok(Head { book, chapter, verse });
        }

        let book = self.book.to_uppercase();
        let chapter = chapter.ok_or_else(|| EntryError::MissingChapter { book: book.clone() })?;
        Ok(Head { book, chapter, verse })
    }
}

#[derive(Debug)]
struct Head {
    book: String,
    chapter: u32,
    verse: Option<u32>,
}

#[derive(Debug)]
struct Scan<'e> {
    head: Components,
    tail: Option<&'e str>,
    found_separator: bool,
}

impl<'a> BcvParser<'a> {
    /// Create a parser over a Bible.
    pub const fn new(bible: &'a Bible) -> Self {
        Self { bible }
    }

    /// Parse one entry.
    ///
    /// A missing book falls back to the context's book (and a missing
    /// chapter to its chapter and verse). A missing verse makes the entry
    /// cover the whole chapter.
    pub fn parse(&self, ctx: &ParseContext, entry: &str) -> Result<ParsedEntry, EntryError> {
        let scan = scan(entry)?;
        let head = scan.head.complete(ctx)?;

        if let Some(tail) = scan.tail.filter(|t| !t.trim().is_empty()) {
            // Bare chapter ranges start at verse 1
            let start_verse = head.verse.unwrap_or(1);
            let tail_ctx = ParseContext {
                current_book: Some(head.book.clone()),
                current_chapter: Some(head.chapter),
                current_verse: Some(start_verse),
                last_entry_added_implicit_full_chapter: !scan.found_separator,
            };
            let end = self.parse(&tail_ctx, &normalize(&tail_ctx, tail))?;

            return Ok(ParsedEntry {
                start: CanonicalKey::new(head.book, head.chapter, start_verse),
                end: Some(end.last().clone()),
                implied_full_chapter: !scan.found_separator && end.implied_full_chapter,
            });
        }

        if let Some(verse) = head.verse {
            return Ok(ParsedEntry {
                start: CanonicalKey::new(head.book, head.chapter, verse),
                end: None,
                implied_full_chapter: false,
            });
        }

        let last = self.last_verse(&head.book, head.chapter)?;
        Ok(ParsedEntry {
            start: CanonicalKey::new(head.book.clone(), head.chapter, 1),
            end: Some(CanonicalKey::new(head.book, head.chapter, last)),
            implied_full_chapter: true,
        })
    }

    fn last_verse(&self, book: &str, chapter: u32) -> Result<u32, EntryError> {
        self.bible.verse_count(book, chapter).ok_or_else(|| {
            if self.bible.index().contains(book) {
                EntryError::ChapterOutOfRange {
                    book: book.to_string(),
                    chapter,
                }
            } else {
                EntryError::UnknownBook(book.to_string())
            }
        })
    }
}

fn scan(entry: &str) -> Result<Scan<'_>, EntryError> {
    let mut head = Components::default();
    let mut found_chapter = false;
    let mut found_separator = false;
    // Whitespace after a digit run closes that number
    let mut after_digit = false;
    let mut number_closed = false;

    for (idx, ch) in entry.char_indices() {
        let rest = &entry[idx + ch.len_utf8()..];
        let unexpected = EntryError::UnexpectedCharacter {
            character: ch,
            position: idx,
        };

        if ch.is_whitespace() {
            number_closed |= after_digit;
            continue;
        }
        if ch.is_ascii_digit() && number_closed {
            return Err(unexpected);
        }
        after_digit = ch.is_ascii_digit();
        number_closed = false;

        match ch {
            // Numbered books: 1John, 2 Cor
            c if c.is_ascii_digit() && head.is_empty() && starts_with_letter(rest) => {
                head.book.push(c);
            }
            c if c.is_alphabetic() => {
                head.book.push(c);
                found_chapter = false;
            }
            c if c.is_ascii_digit() && !found_chapter => head.chapter.push(c),
            c if c.is_ascii_digit() => head.verse.push(c),
            CHAPTER_VERSE_SEPARATOR if found_separator => return Err(unexpected),
            CHAPTER_VERSE_SEPARATOR => {
                found_chapter = true;
                found_separator = true;
            }
            // Trailing full stop: `Rom 8.`
            KEY_SEPARATOR if rest.trim().is_empty() => {}
            KEY_SEPARATOR if found_separator => return Err(unexpected),
            KEY_SEPARATOR if !head.chapter.is_empty() => {
                found_chapter = true;
                found_separator = true;
            }
            KEY_SEPARATOR => {}
            c if RANGE_SEPARATORS.contains(&c) => {
                return Ok(Scan {
                    head,
                    tail: Some(rest),
                    found_separator,
                });
            }
            _ => return Err(unexpected),
        }
    }

    Ok(Scan {
        head,
        tail: None,
        found_separator,
    })
}

fn starts_with_letter(s: &str) -> bool {
    s.trim_start().chars().next().is_some_and(char::is_alphabetic)
}

fn number(digits: &str) -> Result<Option<u32>, EntryError> {
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse()
        .map(Some)
        .map_err(|_| EntryError::InvalidNumber(digits.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn parse(entry: &str) -> Result<ParsedEntry, EntryError> {
        let bible = Bible::standard();
        BcvParser::new(&bible).parse(&ParseContext::default(), entry)
    }

    fn range(entry: &str) -> String {
        parse(entry).unwrap().range().to_string()
    }

    #[test]
    fn test_single_verse() {
        let parsed = parse("Heb11:1").unwrap();
        assert_eq!(parsed.start, CanonicalKey::new("HEB", 11, 1));
        assert_eq!(parsed.end, None);
        assert!(!parsed.implied_full_chapter);
    }

    #[test]
    fn test_whole_chapter() {
        let parsed = parse("Gen1").unwrap();
        assert_eq!(parsed.range().to_string(), "GEN.1.1-GEN.1.31");
        assert!(parsed.implied_full_chapter);
    }

    #[test]
    fn test_grammar_forms() {
        assert_eq!(range("Psalms 119:105-150"), "PSALMS.119.105-PSALMS.119.150");
        assert_eq!(range("1John 1-3"), "1JOHN.1.1-1JOHN.3.24");
        assert_eq!(range("Rev20:10-21:10"), "REV.20.10-REV.21.10");
        assert_eq!(range("Heb11-12"), "HEB.11.1-HEB.12.29");
        assert_eq!(range("Heb13-Jas1"), "HEB.13.1-JAS.1.27");
        assert_eq!(range("2John1:1-3John1:3"), "2JOHN.1.1-3JOHN.1.3");
        assert_eq!(range("2John 1 - 3John 1"), "2JOHN.1.1-3JOHN.1.14");
    }

    #[test]
    fn test_chapter_range_with_verse_end() {
        assert_eq!(range("Heb11-12:3"), "HEB.11.1-HEB.12.3");
        let parsed = parse("Heb11-12:3").unwrap();
        assert!(!parsed.implied_full_chapter);
    }

    #[test]
    fn test_whitespace_dots_and_dashes() {
        assert_eq!(range("Heb 11 : 1 - 3"), "HEB.11.1-HEB.11.3");
        assert_eq!(range("HEB.11.1"), "HEB.11.1");
        assert_eq!(range("Heb. 11.6"), "HEB.11.6");
        assert_eq!(range("Heb 11:1\u{2013}3"), "HEB.11.1-HEB.11.3");
        assert_eq!(range("1 Cor 13"), "1COR.13.1-1COR.13.13");
    }

    #[test]
    fn test_spaced_digit_groups_are_rejected() {
        assert_eq!(
            parse("Heb 11:1 6").unwrap_err(),
            EntryError::UnexpectedCharacter {
                character: '6',
                position: 9
            }
        );
        assert_eq!(
            parse("Gen 1 2").unwrap_err(),
            EntryError::UnexpectedCharacter {
                character: '2',
                position: 6
            }
        );
        // Spaces between tokens are fine
        assert_eq!(range("Heb 11 : 1"), "HEB.11.1");
        assert_eq!(range("2 John 1 - 3 John 1:2"), "2JOHN.1.1-3JOHN.1.2");
    }

    #[test]
    fn test_second_separator_is_rejected() {
        assert_eq!(
            parse("Heb11:1.5").unwrap_err(),
            EntryError::UnexpectedCharacter {
                character: '.',
                position: 7
            }
        );
        assert_eq!(
            parse("Heb11:1:5").unwrap_err(),
            EntryError::UnexpectedCharacter {
                character: ':',
                position: 7
            }
        );
        assert_eq!(range("Rom 8."), "ROM.8.1-ROM.8.39");
        assert_eq!(range("Heb 11:6."), "HEB.11.6");
    }

    #[test]
    fn test_dotted_continuation_names_a_chapter() {
        let bible = Bible::standard();
        let parser = BcvParser::new(&bible);
        let ctx = ParseContext {
            current_book: Some("PS".into()),
            current_chapter: Some(119),
            current_verse: Some(1),
            last_entry_added_implicit_full_chapter: false,
        };
        let parsed = parser.parse(&ctx, &normalize(&ctx, "1.5")).unwrap();
        assert_eq!(parsed.range().to_string(), "PS.1.5");
        let parsed = parser.parse(&ctx, &normalize(&ctx, "5")).unwrap();
        assert_eq!(parsed.range().to_string(), "PS.119.5");
    }

    #[test]
    fn test_dangling_range_separator_is_ignored() {
        assert_eq!(range("Heb11:1-"), "HEB.11.1");
    }

    #[test]
    fn test_lowercase_book_is_upper_cased() {
        assert_eq!(parse("heb11:1").unwrap().start.book, "HEB");
    }

    #[test]
    fn test_context_fallback() {
        let bible = Bible::standard();
        let parser = BcvParser::new(&bible);
        let ctx = ParseContext {
            current_book: Some("HEB".into()),
            current_chapter: Some(11),
            current_verse: Some(6),
            last_entry_added_implicit_full_chapter: false,
        };
        assert_eq!(parser.parse(&ctx, "").unwrap().range().to_string(), "HEB.11.6");
        assert_eq!(parser.parse(&ctx, "12:2").unwrap().range().to_string(), "HEB.12.2");
        assert_eq!(parser.parse(&ctx, ":3").unwrap().range().to_string(), "HEB.11.3");
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("11:1").unwrap_err(), EntryError::MissingBook);
        assert_eq!(
            parse("Heb").unwrap_err(),
            EntryError::MissingChapter { book: "HEB".into() }
        );
        assert_eq!(parse("Xyz1").unwrap_err(), EntryError::UnknownBook("XYZ".into()));
        assert_eq!(
            parse("Heb14").unwrap_err(),
            EntryError::ChapterOutOfRange {
                book: "HEB".into(),
                chapter: 14
            }
        );
        assert_eq!(
            parse("Heb11;1").unwrap_err(),
            EntryError::UnexpectedCharacter {
                character: ';',
                position: 5
            }
        );
        assert_eq!(
            parse("Heb99999999999:1").unwrap_err(),
            EntryError::InvalidNumber("99999999999".into())
        );
    }

    #[test]
    fn test_unknown_book_with_explicit_verse_parses() {
        // Existence is checked later by the validator
        assert_eq!(range("Xyz1:1"), "XYZ.1.1");
    }

    #[test]
    fn test_tail_errors_propagate() {
        assert_eq!(parse("Heb13-Xyz1").unwrap_err(), EntryError::UnknownBook("XYZ".into()));
    }
}
