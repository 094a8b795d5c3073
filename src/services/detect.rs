//! Scripture reference detection in free text.
//!
//! Finds spans like `John 3:16` or `Heb 11:1, 6` inside prose and resolves
//! them, so an editor can attach the verse text to the span.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::reference::Verse;
use crate::services::scripture::ReferenceResolver;

/// Candidate reference: optional book number, book name (possibly
/// `Song of Solomon`), chapter, optional verse, then an optional range end
/// and any `, N` continuations.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:[123]\s?)?[A-Za-z]+(?:\s+of\s+[A-Za-z]+)?\.?\s*\d+(?:[:.]\d+)?
        (?:\s*[-\u{2013}\u{2014}]\s*(?:(?:[123]\s?)?[A-Za-z]+\.?\s*)?\d+(?:[:.]\d+)?)?
        (?:\s*,\s*\d+(?:[:.]\d+)?(?:\s*[-\u{2013}\u{2014}]\s*\d+(?:[:.]\d+)?)?)*
        ",
    )
    .expect("valid regex: RE_REFERENCE")
});

/// A reference found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedReference {
    /// Byte offset where the reference starts.
    pub start: usize,
    /// Byte offset one past the end.
    pub end: usize,
    /// The matched text.
    pub text: String,
    /// Resolved verses; never empty.
    pub verses: Vec<Verse>,
}

impl DetectedReference {
    /// One `KEY content` line per verse.
    pub fn tooltip(&self) -> String {
        self.verses
            .iter()
            .map(|v| format!("{} {}", v.key, v.content).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Find every resolvable reference in `text`, in order.
///
/// A candidate that resolves to nothing is retried from its second word,
/// so `in 1 John 3:16` yields `1 John 3:16`.
pub fn detect(resolver: &ReferenceResolver<'_>, text: &str) -> Vec<DetectedReference> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(m) = RE_REFERENCE.find_at(text, pos) {
        let verses = resolver.parse(m.as_str());
        if verses.is_empty() {
            pos = next_word(text, m.start(), m.end());
            continue;
        }

        tracing::debug!("Detected {:?} at {}..{}", m.as_str(), m.start(), m.end());
        found.push(DetectedReference {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
            verses,
        });
        pos = m.end();
    }

    found
}

/// Start of the word after the one at `start`, or `end` if the match is a
/// single word.
fn next_word(text: &str, start: usize, end: usize) -> usize {
    let span = &text[start..end];
    span.find(char::is_whitespace)
        .and_then(|ws| {
            let after = &span[ws..];
            after
                .find(|c: char| !c.is_whitespace())
                .map(|skip| start + ws + skip)
        })
        .unwrap_or(end)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::Bible;

    fn texts(text: &str) -> Vec<String> {
        let bible = Bible::standard();
        detect(&ReferenceResolver::new(&bible), text)
            .into_iter()
            .map(|d| d.text)
            .collect()
    }

    #[test]
    fn test_detects_in_prose() {
        assert_eq!(
            texts("Read John 3:16 and then Rom 8 tonight."),
            vec!["John 3:16", "Rom 8"]
        );
    }

    #[test]
    fn test_retries_one_word_later() {
        let bible = Bible::standard();
        let found = detect(&ReferenceResolver::new(&bible), "as written in 1 John 3:16");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "1 John 3:16");
        assert_eq!(found[0].start, 14);
        assert_eq!(found[0].end, 25);
        assert_eq!(found[0].verses[0].key.to_string(), "1JN.3.16");
    }

    #[test]
    fn test_continuations_and_ranges() {
        let bible = Bible::standard();
        let found = detect(
            &ReferenceResolver::new(&bible),
            "See Heb 11:1, 6 and Song of Solomon 2:1-3.",
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "Heb 11:1, 6");
        assert_eq!(found[0].verses.len(), 2);
        assert_eq!(found[1].text, "Song of Solomon 2:1-3");
        assert_eq!(found[1].verses.len(), 3);
    }

    #[test]
    fn test_ignores_non_references() {
        assert!(texts("We met at 10:30 in room 4.").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn test_tooltip_lines() {
        let bible = Bible::from_books(
            Bible::standard()
                .books()
                .iter()
                .map(|b| {
                    let chapters = b
                        .chapters()
                        .iter()
                        .map(|c| {
                            let texts = (1..=c.verse_count()).map(|v| format!("text {v}")).collect();
                            crate::bible::Chapter::new(c.number(), texts)
                        })
                        .collect();
                    crate::bible::Book::new(b.abbreviation(), b.short_name(), chapters)
                })
                .collect(),
        )
        .unwrap();
        let found = detect(&ReferenceResolver::new(&bible), "Heb 11:1-2");
        assert_eq!(found[0].tooltip(), "HEB.11.1 text 1\nHEB.11.2 text 2");
    }
}
