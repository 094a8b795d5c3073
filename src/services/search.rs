//! Fuzzy book-name suggestions.
//!
//! Used when a reference names a book the index does not know, so callers
//! can offer a "did you mean" hint.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::bible::{Bible, Book};
use crate::constants::search::MIN_SUGGESTION_SCORE;

/// Ranks books by similarity to a misspelled name.
#[derive(Debug, Clone)]
pub struct BookSuggester {
    /// Minimum score threshold.
    pub min_score: i64,
}

impl Default for BookSuggester {
    fn default() -> Self {
        Self {
            min_score: MIN_SUGGESTION_SCORE,
        }
    }
}

impl BookSuggester {
    /// Books matching `query`, best first, at most `limit` of them.
    pub fn rank<'b>(&self, bible: &'b Bible, query: &str, limit: usize) -> Vec<&'b Book> {
        let matcher = SkimMatcherV2::default();
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<_> = bible
            .books()
            .iter()
            .enumerate()
            .filter_map(|(pos, book)| {
                let score = [book.short_name(), book.abbreviation()]
                    .iter()
                    .filter_map(|name| matcher.fuzzy_match(&name.to_lowercase(), &query_lower))
                    .max()?;
                (score >= self.min_score).then_some((pos, book, score))
            })
            .collect();

        // Best score first, canonical order on ties
        scored.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
        scored.into_iter().take(limit).map(|(_, book, _)| book).collect()
    }

    /// The single best match, if any clears the threshold.
    pub fn suggest<'b>(&self, bible: &'b Bible, query: &str) -> Option<&'b Book> {
        self.rank(bible, query, 1).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_misspelled_book() {
        let bible = Bible::standard();
        let suggester = BookSuggester::default();
        assert_eq!(suggester.suggest(&bible, "Hebrw").unwrap().abbreviation(), "HEB");
        assert_eq!(suggester.suggest(&bible, "revelatn").unwrap().abbreviation(), "REV");
    }

    #[test]
    fn test_rank_respects_limit() {
        let bible = Bible::standard();
        let ranked = BookSuggester::default().rank(&bible, "john", 3);
        assert!(!ranked.is_empty());
        assert!(ranked.len() <= 3);
        assert!(ranked.iter().all(|b| b.short_name().to_lowercase().contains("john")));
    }

    #[test]
    fn test_no_match() {
        let bible = Bible::standard();
        let suggester = BookSuggester::default();
        assert!(suggester.suggest(&bible, "qqqzzz").is_none());
        assert!(suggester.suggest(&bible, "  ").is_none());
    }
}
