//! Canonical text loaders.
//!
//! Two formats are understood:
//!
//! - XML, one node per verse:
//!   `<bible><books><book abbr="GEN" short="Genesis"/>…</books>`
//!   `<text><b name="GEN"><c id="1"><v bcv="GEN.1.1">In the beginning…</v>…`.
//!   Upper-case `NAME`/`ID`/`BCV` attributes and a `c` chapter count on book
//!   names are accepted too.
//! - JSON: `{"books": [{"abbreviation": "GEN", "short_name": "Genesis",
//!   "chapters": [["In the beginning…", …], …]}]}`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Bible, Book, Chapter};
use crate::error::{Error, Result};

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// XML document with one node per verse.
    Xml,
    /// JSON document with nested verse arrays.
    Json,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct XmlDocument {
    books: XmlBookNames,
    text: XmlText,
}

#[derive(Debug, Deserialize)]
struct XmlBookNames {
    #[serde(rename = "book", default)]
    books: Vec<XmlBookName>,
}

#[derive(Debug, Deserialize)]
struct XmlBookName {
    #[serde(rename = "@abbr")]
    abbreviation: String,
    #[serde(rename = "@short")]
    short_name: String,
}

#[derive(Debug, Deserialize)]
struct XmlText {
    #[serde(rename = "b", default)]
    books: Vec<XmlBook>,
}

#[derive(Debug, Deserialize)]
struct XmlBook {
    #[serde(rename = "@name", alias = "@NAME")]
    name: String,
    #[serde(rename = "c", default)]
    chapters: Vec<XmlChapter>,
}

#[derive(Debug, Deserialize)]
struct XmlChapter {
    #[serde(rename = "@id", alias = "@ID")]
    id: u32,
    #[serde(rename = "v", default)]
    verses: Vec<XmlVerse>,
}

#[derive(Debug, Deserialize)]
struct XmlVerse {
    #[serde(rename = "$text", default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct JsonDocument {
    books: Vec<JsonBook>,
}

#[derive(Debug, Deserialize)]
struct JsonBook {
    abbreviation: String,
    short_name: String,
    chapters: Vec<Vec<String>>,
}

impl Bible {
    /// Load a Bible text file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path).ok_or_else(|| {
            Error::config(
                format!("Unsupported Bible file {}", path.display()),
                "Use a .xml or .json file",
            )
        })?;

        let content = fs_err::read_to_string(path)
            .map_err(|e| Error::io(e, PathBuf::from(path)))?;

        let bible = match format {
            SourceFormat::Xml => Self::from_xml_str(&content),
            SourceFormat::Json => Self::from_json_str(&content),
        }
        .map_err(|e| match e {
            Error::Parse { message, .. } => Error::parse(message, PathBuf::from(path)),
            other => other,
        })?;

        tracing::info!(
            "Loaded {} books ({} verses) from {}",
            bible.books().len(),
            bible.verse_total(),
            path.display()
        );
        Ok(bible)
    }

    /// Parse the XML layout.
    pub fn from_xml_str(content: &str) -> Result<Self> {
        let doc: XmlDocument =
            quick_xml::de::from_str(content).map_err(|e| Error::parse(e.to_string(), None))?;

        if doc.books.books.len() != doc.text.books.len() {
            return Err(Error::source_text(format!(
                "{} book names but {} books of text",
                doc.books.books.len(),
                doc.text.books.len()
            )));
        }

        let books = doc
            .books
            .books
            .into_iter()
            .zip(doc.text.books)
            .map(|(name, text)| {
                if !name.abbreviation.eq_ignore_ascii_case(&text.name) {
                    tracing::warn!(
                        "Book name {} does not match text node {}",
                        name.abbreviation,
                        text.name
                    );
                }
                let chapters = text
                    .chapters
                    .into_iter()
                    .map(|c| Chapter::new(c.id, c.verses.into_iter().map(|v| clean_text(&v.text)).collect()))
                    .collect();
                Book::new(name.abbreviation, name.short_name, chapters)
            })
            .collect();

        Self::from_books(books)
    }

    /// Parse the JSON layout.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: JsonDocument =
            serde_json::from_str(content).map_err(|e| Error::parse(e.to_string(), None))?;

        let books = doc
            .books
            .into_iter()
            .map(|book| {
                let chapters = (1u32..)
                    .zip(book.chapters)
                    .map(|(number, verses)| {
                        Chapter::new(number, verses.iter().map(|v| clean_text(v)).collect())
                    })
                    .collect();
                Book::new(book.abbreviation, book.short_name, chapters)
            })
            .collect();

        Self::from_books(books)
    }
}

/// Normalize whitespace in source text
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
