//! Canonical Bible text and book lookup.
//!
//! A [`Bible`] is built once (from the built-in versification or a text file,
//! see [`source`]) and shared read-only for the lifetime of the process.

mod aliases;
pub mod canon;
pub mod index;
pub mod source;

use std::collections::HashSet;

use crate::constants::canon::BOOK_COUNT;
use crate::error::{Error, Result};

pub use aliases::normalize_token;
pub use index::BookIndex;

/// A chapter: its 1-based number and the text of each verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    number: u32,
    verses: Vec<String>,
}

impl Chapter {
    /// Create a chapter from its verse texts.
    pub fn new(number: u32, verses: Vec<String>) -> Self {
        Self { number, verses }
    }

    /// 1-based chapter number.
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Number of verses in the chapter.
    #[allow(clippy::cast_possible_truncation)] // longest chapter has 176 verses
    pub fn verse_count(&self) -> u32 {
        self.verses.len() as u32
    }

    /// Text of a 1-based verse.
    pub fn verse(&self, number: u32) -> Option<&str> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        self.verses.get(idx).map(String::as_str)
    }

    /// All verse texts in order.
    pub fn verses(&self) -> &[String] {
        &self.verses
    }
}

/// A book of the canon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    abbreviation: String,
    short_name: String,
    chapters: Vec<Chapter>,
}

impl Book {
    /// Create a book.
    pub fn new(
        abbreviation: impl Into<String>,
        short_name: impl Into<String>,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            short_name: short_name.into(),
            chapters,
        }
    }

    /// Canonical abbreviation, e.g. `HEB`.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Short display name, e.g. `Hebrews`.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Chapters in order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// A 1-based chapter.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        self.chapters.get(idx)
    }

    /// Number of chapters.
    #[allow(clippy::cast_possible_truncation)] // longest book has 150 chapters
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book: {}. Chapters: {}", self.short_name, self.chapters.len())
    }
}

/// The immutable 66-book canon with its book index.
#[derive(Debug, Clone)]
pub struct Bible {
    books: Vec<Book>,
    index: BookIndex,
}

impl Bible {
    /// Build a Bible from books in canonical order.
    ///
    /// Requires exactly 66 books with unique abbreviations, every chapter
    /// numbered by its position and holding at least one verse.
    pub fn from_books(books: Vec<Book>) -> Result<Self> {
        if books.len() != BOOK_COUNT {
            return Err(Error::source_text(format!(
                "expected {BOOK_COUNT} books, found {}",
                books.len()
            )));
        }

        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(normalize_token(book.abbreviation())) {
                return Err(Error::source_text(format!(
                    "duplicate book abbreviation {}",
                    book.abbreviation()
                )));
            }
            if book.chapters().is_empty() {
                return Err(Error::source_text(format!("{} has no chapters", book.abbreviation())));
            }
            for (pos, chapter) in book.chapters().iter().enumerate() {
                if usize::try_from(chapter.number()).ok() != Some(pos + 1) {
                    return Err(Error::source_text(format!(
                        "{} chapter {} is at position {}",
                        book.abbreviation(),
                        chapter.number(),
                        pos + 1
                    )));
                }
                if chapter.verses().is_empty() {
                    return Err(Error::source_text(format!(
                        "{} chapter {} has no verses",
                        book.abbreviation(),
                        chapter.number()
                    )));
                }
            }
        }

        Ok(Self::assemble(books))
    }

    /// The built-in KJV versification without verse text.
    ///
    /// Every verse exists with empty content, so references validate and
    /// resolve exactly as they would against a full text.
    pub fn standard() -> Self {
        let books = canon::BOOKS
            .iter()
            .map(|book| {
                let chapters = (1u32..)
                    .zip(book.verse_counts)
                    .map(|(number, &count)| {
                        Chapter::new(number, vec![String::new(); usize::from(count)])
                    })
                    .collect();
                Book::new(book.abbreviation, book.short_name, chapters)
            })
            .collect();
        Self::assemble(books)
    }

    fn assemble(books: Vec<Book>) -> Self {
        let index = BookIndex::new(&books);
        Self { books, index }
    }

    /// Books in canonical order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Book at a canonical position.
    pub fn book(&self, position: usize) -> Option<&Book> {
        self.books.get(position)
    }

    /// The book index.
    pub const fn index(&self) -> &BookIndex {
        &self.index
    }

    /// Find a book by any accepted name.
    pub fn find_book(&self, name: &str) -> Option<(usize, &Book)> {
        let position = self.index.position(name)?;
        self.books.get(position).map(|book| (position, book))
    }

    /// Number of verses in a chapter; `None` if book or chapter is unknown.
    pub fn verse_count(&self, book: &str, chapter: u32) -> Option<u32> {
        let (_, book) = self.find_book(book)?;
        book.chapter(chapter).map(Chapter::verse_count)
    }

    /// Total number of verses.
    pub fn verse_total(&self) -> usize {
        self.books
            .iter()
            .flat_map(Book::chapters)
            .map(|c| c.verses().len())
            .sum()
    }
}
