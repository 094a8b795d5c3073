//! Case-insensitive lookup from book name to canonical position.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::aliases::{normalize_token, BOOK_ALIASES};
use super::{canon, Book};
use crate::reference::CanonicalKey;

/// Maps every accepted spelling of a book to its canonical position.
///
/// Accepted spellings are the loaded abbreviation and short name of each
/// book, the standard abbreviation, and the built-in aliases. Loaded names
/// win over aliases when they collide.
#[derive(Debug, Clone, Default)]
pub struct BookIndex {
    positions: HashMap<String, usize>,
}

impl BookIndex {
    /// Build the index for books in canonical order.
    pub fn new(books: &[Book]) -> Self {
        let mut positions = HashMap::new();

        for (alias, abbreviation) in BOOK_ALIASES.iter() {
            if let Some(pos) = canon::position_of(abbreviation).filter(|&p| p < books.len()) {
                positions.insert((*alias).to_string(), pos);
            }
        }
        for (pos, book) in canon::BOOKS.iter().enumerate().take(books.len()) {
            positions.insert(normalize_token(book.abbreviation), pos);
        }
        for (pos, book) in books.iter().enumerate() {
            positions.insert(normalize_token(book.short_name()), pos);
            positions.insert(normalize_token(book.abbreviation()), pos);
        }

        Self { positions }
    }

    /// Canonical position of a book name, if known.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&normalize_token(name)).copied()
    }

    /// Whether a book name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Canonical order of two keys; `None` if either book is unknown.
    pub fn compare(&self, a: &CanonicalKey, b: &CanonicalKey) -> Option<Ordering> {
        let left = (self.position(&a.book)?, a.chapter, a.verse);
        let right = (self.position(&b.book)?, b.chapter, b.verse);
        Some(left.cmp(&right))
    }
}
