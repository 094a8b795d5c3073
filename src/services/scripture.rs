//! Scripture lookup service.
//!
//! [`ReferenceResolver`] is the entry point for turning user-typed reference
//! strings into verses.

use rayon::prelude::*;

use crate::bible::{Bible, Book};
use crate::reference::{
    normalize, tokenize, BcvParser, ParseContext, RangeValidator, SkipReason, Verse,
    VerseRangeResolver,
};
use crate::services::search::BookSuggester;

/// An entry that produced no verses, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Zero-based block index within the input.
    pub block: usize,
    /// The entry as typed.
    pub entry: String,
    /// The entry after carry-context expansion.
    pub normalized: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Verses resolved from one input, plus the entries that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Verses in input order.
    pub verses: Vec<Verse>,
    /// Entries that produced nothing.
    pub skipped: Vec<SkippedEntry>,
}

impl Resolution {
    /// Whether nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Resolves reference strings against a shared Bible.
///
/// Holds no mutable state; one resolver can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    bible: &'a Bible,
}

impl<'a> ReferenceResolver<'a> {
    /// Create a resolver over a Bible.
    pub const fn new(bible: &'a Bible) -> Self {
        Self { bible }
    }

    /// The Bible this resolver reads from.
    pub const fn bible(&self) -> &'a Bible {
        self.bible
    }

    /// Verses named by `raw`, in input order. Invalid parts are dropped.
    pub fn parse(&self, raw: &str) -> Vec<Verse> {
        self.resolve(raw).verses
    }

    /// Like [`Self::parse`], but also reports skipped entries.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let parser = BcvParser::new(self.bible);
        let validator = RangeValidator::new(self.bible);
        let walker = VerseRangeResolver::new(self.bible);
        let mut resolution = Resolution::default();

        for (block_idx, block) in tokenize(raw).iter().enumerate() {
            block.iter().fold(ParseContext::default(), |ctx, entry| {
                let normalized = normalize(&ctx, entry);
                let mut skip = |reason: SkipReason| {
                    tracing::debug!("Skipping reference {entry:?} ({normalized}): {reason}");
                    resolution.skipped.push(SkippedEntry {
                        block: block_idx,
                        entry: entry.clone(),
                        normalized: normalized.clone(),
                        reason,
                    });
                };

                match parser.parse(&ctx, &normalized) {
                    Ok(parsed) => {
                        match validator.validate(&parsed.range()) {
                            Ok(range) => resolution.verses.extend(walker.resolve(&range)),
                            Err(e) => skip(e.into()),
                        }
                        ctx.after(&parsed)
                    }
                    Err(e) => {
                        skip(e.into());
                        ctx
                    }
                }
            });
        }

        resolution
    }

    /// Resolve many independent inputs in parallel, in input order.
    pub fn resolve_all<S>(&self, inputs: &[S]) -> Vec<Resolution>
    where
        S: AsRef<str> + Sync,
    {
        inputs.par_iter().map(|raw| self.resolve(raw.as_ref())).collect()
    }

    /// Verses for many independent inputs, resolved in parallel.
    pub fn parse_all<S>(&self, inputs: &[S]) -> Vec<Vec<Verse>>
    where
        S: AsRef<str> + Sync,
    {
        self.resolve_all(inputs).into_iter().map(|r| r.verses).collect()
    }

    /// Closest book to an unrecognized name.
    pub fn suggest_book(&self, name: &str) -> Option<&'a Book> {
        BookSuggester::default().suggest(self.bible, name)
    }
}
