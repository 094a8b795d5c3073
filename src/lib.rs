//! `scripref` - compact scripture reference resolution.
//!
//! Turns reference strings such as `Heb11:1,6;Rom8-9;2John1:1-3John1:3`
//! into the ordered list of verses they name.
//!
//! ```no_run
//! use scripref::bible::Bible;
//! use scripref::services::ReferenceResolver;
//!
//! let bible = Bible::standard();
//! let verses = ReferenceResolver::new(&bible).parse("Heb11:1,6");
//! assert_eq!(verses.len(), 2);
//! ```

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod reference;
pub mod services;
