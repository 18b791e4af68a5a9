//! Extract card images from the pack archive and save them under canonical names.
//!
//! Entries are processed in archive listing order. That order decides which
//! joker variant becomes `JOKER.png`: the first one wins, and an existing
//! `JOKER.png` from an earlier run is never replaced.

use std::fmt;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use crate::cards;
use crate::error::CardpackError;

/// Non-fatal problem with a single archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryWarning {
    /// Two source images mapped to the same card; the later one was kept.
    Overwrote { target: String, source: String },
    /// The entry could not be read or its target could not be written.
    Failed { entry: String, message: String },
}

impl fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryWarning::Overwrote { target, source } => write!(
                f,
                "Warning: Overwriting {} with image from {}. This might happen if multiple images map to the same card.",
                target, source
            ),
            EntryWarning::Failed { entry, message } => {
                write!(f, "Error extracting/saving {}: {}", entry, message)
            }
        }
    }
}

/// Outcome of one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractSummary {
    /// Number of images written (overwrites included).
    pub written: usize,
    /// Target file names in the order they were written.
    pub written_files: Vec<String>,
    /// Joker entries skipped because `JOKER.png` already existed.
    pub skipped_jokers: usize,
    /// PNG entries whose names did not map to a card.
    pub unmatched: usize,
    pub warnings: Vec<EntryWarning>,
}

impl ExtractSummary {
    pub fn failures(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, EntryWarning::Failed { .. }))
            .count()
    }
}

/// Creates the output directory if needed. Returns true if it was created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, CardpackError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| CardpackError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!("created output directory {}", dir.display());
    Ok(true)
}

/// Saves every recognizable card image in `archive` into `out_dir`.
///
/// `source_url` is only used to build the error when `archive` is not a
/// ZIP file. Failures on individual entries are collected as warnings and do
/// not stop the pass.
pub fn extract_cards(
    archive: &[u8],
    out_dir: &Path,
    source_url: &str,
) -> Result<ExtractSummary, CardpackError> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive)).map_err(|source| {
        CardpackError::InvalidArchive {
            url: source_url.to_string(),
            source,
        }
    })?;
    ensure_output_dir(out_dir)?;

    tracing::debug!(entries = zip.len(), dir = %out_dir.display(), "extracting card images");

    let mut summary = ExtractSummary::default();
    for index in 0..zip.len() {
        let mut entry = match zip.by_index(index) {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(index, "unreadable archive entry: {}", e);
                summary.warnings.push(EntryWarning::Failed {
                    entry: format!("entry #{index}"),
                    message: e.to_string(),
                });
                continue;
            }
        };
        let entry_name = entry.name().to_string();
        if entry.is_dir() || !cards::is_png(&entry_name) {
            continue;
        }

        let source_name = cards::base_file_name(&entry_name).to_lowercase();
        let Some(target) = cards::derive_target(&source_name) else {
            tracing::debug!(entry = %entry_name, "no card for file name, skipping");
            summary.unmatched += 1;
            continue;
        };

        let target_name = target.file_name();
        let target_path: PathBuf = out_dir.join(&target_name);
        if target_path.exists() {
            if target.is_joker() {
                tracing::debug!(entry = %entry_name, "joker already saved, skipping variant");
                summary.skipped_jokers += 1;
                continue;
            }
            let warning = EntryWarning::Overwrote {
                target: target_name.clone(),
                source: source_name.clone(),
            };
            tracing::warn!("{}", warning);
            summary.warnings.push(warning);
        }

        let result = read_entry(&mut entry)
            .and_then(|bytes| fs::write(&target_path, bytes).map_err(anyhow::Error::from));
        match result {
            Ok(()) => {
                tracing::debug!(entry = %entry_name, target = %target_name, "saved");
                summary.written += 1;
                summary.written_files.push(target_name);
            }
            Err(e) => {
                tracing::warn!(entry = %entry_name, "extract failed: {:#}", e);
                summary.warnings.push(EntryWarning::Failed {
                    entry: entry_name,
                    message: format!("{:#}", e),
                });
            }
        }
    }

    tracing::info!(
        written = summary.written,
        unmatched = summary.unmatched,
        skipped_jokers = summary.skipped_jokers,
        failures = summary.failures(),
        "extraction finished"
    );
    Ok(summary)
}

fn read_entry<R: Read>(entry: &mut R) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}
