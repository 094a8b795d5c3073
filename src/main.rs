//! scripref - resolve compact scripture references to verses.
//!
//! Usage:
//!   scripref 'Heb11:1,6;Rom8-9'
//!   scripref --json 'Gen1' 'Jude'
//!   echo 'as written in 1 John 3:16' | scripref --detect

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use scripref::bible::Bible;
use scripref::config::Config;
use scripref::constants::cli::DEFAULT_LOG_FILTER;
use scripref::reference::Verse;
use scripref::services::{detect, DetectedReference, ReferenceResolver, Resolution};

#[derive(Parser)]
#[command(name = "scripref", version)]
#[command(about = "Resolve compact scripture references such as Heb11:1,6;Rom8-9")]
struct Cli {
    /// References to resolve; read one per line from stdin when omitted
    references: Vec<String>,

    /// Bible text file (.xml or .json); overrides SCRIPREF_BIBLE_PATH
    #[arg(short, long)]
    bible: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Treat input as free text and report the references found in it
    #[arg(short, long)]
    detect: bool,
}

#[derive(Serialize)]
struct SkippedReport {
    entry: String,
    reason: String,
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct ResolutionReport<'a> {
    input: &'a str,
    verses: &'a [Verse],
    skipped: Vec<SkippedReport>,
}

#[derive(Serialize)]
struct DetectionReport<'a> {
    input: &'a str,
    references: &'a [DetectedReference],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    let bible = match cli.bible.clone().or_else(|| config.bible_path.clone()) {
        Some(path) => Bible::load(&path)
            .with_context(|| format!("Failed to load Bible text from {}", path.display()))?,
        None => {
            tracing::warn!("No Bible text configured; verses will resolve without content");
            Bible::standard()
        }
    };

    let inputs = if cli.references.is_empty() {
        read_stdin_lines()?
    } else {
        cli.references.clone()
    };

    let resolver = ReferenceResolver::new(&bible);
    let mut out = io::stdout().lock();

    if cli.detect {
        for input in &inputs {
            let found = detect(&resolver, input);
            print_detection(&mut out, input, &found, cli.json)?;
        }
        return Ok(());
    }

    let resolutions: Vec<Resolution> = if inputs.len() > config.parallel_threshold {
        resolver.resolve_all(&inputs)
    } else {
        inputs.iter().map(|input| resolver.resolve(input)).collect()
    };

    for (input, resolution) in inputs.iter().zip(&resolutions) {
        print_resolution(&mut out, &resolver, input, resolution, cli.json)?;
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .collect::<io::Result<_>>()
        .context("Failed to read references from stdin")
}

fn print_resolution(
    out: &mut impl Write,
    resolver: &ReferenceResolver<'_>,
    input: &str,
    resolution: &Resolution,
    json: bool,
) -> Result<()> {
    let skipped: Vec<SkippedReport> = resolution
        .skipped
        .iter()
        .map(|s| SkippedReport {
            entry: s.entry.clone(),
            reason: s.reason.to_string(),
            suggestion: s
                .reason
                .unknown_book()
                .and_then(|name| resolver.suggest_book(name))
                .map(|book| book.short_name().to_string()),
        })
        .collect();

    if json {
        let report = ResolutionReport {
            input,
            verses: &resolution.verses,
            skipped,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for verse in &resolution.verses {
        if verse.content.is_empty() {
            writeln!(out, "{}", verse.human_reference)?;
        } else {
            writeln!(out, "{}\t{}", verse.human_reference, verse.content)?;
        }
    }
    for skip in &skipped {
        match &skip.suggestion {
            Some(book) => eprintln!("skipped {:?}: {} (did you mean {book}?)", skip.entry, skip.reason),
            None => eprintln!("skipped {:?}: {}", skip.entry, skip.reason),
        }
    }

    Ok(())
}

fn print_detection(
    out: &mut impl Write,
    input: &str,
    found: &[DetectedReference],
    json: bool,
) -> Result<()> {
    if json {
        let report = DetectionReport {
            input,
            references: found,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for reference in found {
        writeln!(out, "{}..{}\t{}", reference.start, reference.end, reference.text)?;
        for line in reference.tooltip().lines() {
            writeln!(out, "  {line}")?;
        }
    }

    Ok(())
}
