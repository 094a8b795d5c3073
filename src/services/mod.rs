//! Services built on the reference pipeline.
//!
//! [`scripture::ReferenceResolver`] is the main entry point; [`detect`] and
//! [`search`] build on it.

pub mod detect;
pub mod scripture;
pub mod search;

pub use detect::{detect, DetectedReference};
pub use scripture::{ReferenceResolver, Resolution, SkippedEntry};
pub use search::BookSuggester;
