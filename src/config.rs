//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::cli::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::{Error, Result};

/// Environment variable naming the Bible text file.
pub const BIBLE_PATH_VAR: &str = "SCRIPREF_BIBLE_PATH";

/// Environment variable for the parallel resolution threshold.
pub const PARALLEL_THRESHOLD_VAR: &str = "SCRIPREF_PARALLEL_THRESHOLD";

/// File names looked for under the data directory, in order.
const DEFAULT_BIBLE_FILES: &[&str] = &["bible.xml", "bible.json"];

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bible text to load; `None` uses the built-in versification
    pub bible_path: Option<PathBuf>,
    /// Input count above which the CLI resolves in parallel
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bible_path: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let data_dir = dirs::data_dir().map(|d| d.join(env!("CARGO_PKG_NAME")));
        Self::from_lookup(|key| env::var(key).ok(), data_dir.as_deref())
    }

    /// Build a configuration from a variable lookup and a data directory.
    pub fn from_lookup(
        var: impl Fn(&str) -> Option<String>,
        data_dir: Option<&Path>,
    ) -> Result<Self> {
        let bible_path = match var(BIBLE_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                let path = PathBuf::from(shellexpand::tilde(path.trim()).to_string());
                if !path.is_file() {
                    return Err(Error::config(
                        format!("{BIBLE_PATH_VAR} points to {} which is not a file", path.display()),
                        "Set it to a bible.xml or bible.json file, or unset it",
                    ));
                }
                Some(path)
            }
            None => data_dir.and_then(find_default_bible),
        };

        let parallel_threshold = match var(PARALLEL_THRESHOLD_VAR) {
            Some(threshold) => threshold.trim().parse().map_err(|_| {
                Error::config(
                    format!("{PARALLEL_THRESHOLD_VAR} must be a number, got {threshold:?}"),
                    "Use a non-negative integer such as 16",
                )
            })?,
            None => DEFAULT_PARALLEL_THRESHOLD,
        };

        Ok(Self {
            bible_path,
            parallel_threshold,
        })
    }
}

/// First default Bible file present in `dir`.
fn find_default_bible(dir: &Path) -> Option<PathBuf> {
    DEFAULT_BIBLE_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
