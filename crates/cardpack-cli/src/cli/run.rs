//! The whole procedure: prepare the directory, download, extract, report.

use cardpack_core::cards;
use cardpack_core::config::CardpackConfig;
use cardpack_core::error::CardpackError;
use cardpack_core::extract::{self, ExtractSummary};
use cardpack_core::fetch;
use cardpack_core::url_model;
use cardpack_core::SOURCE_URL;
use std::path::Path;

/// Download the card pack and save its images under `cfg.output_dir`.
pub fn run_fetch(cfg: &CardpackConfig) -> Result<(), CardpackError> {
    run_fetch_from(SOURCE_URL, cfg)
}

pub(crate) fn run_fetch_from(url: &str, cfg: &CardpackConfig) -> Result<(), CardpackError> {
    let out_dir = cfg.output_dir.as_path();
    if extract::ensure_output_dir(out_dir)? {
        println!("Created directory: {}", out_dir.display());
    }

    println!("Downloading card pack from {}...", url);
    let body = fetch::fetch_archive(url, &cfg.http.to_options())?;

    println!("Extracting and renaming card images...");
    let summary = extract::extract_cards(&body, out_dir, url)?;

    let missing = if summary.written > 0 {
        cards::missing_cards(out_dir)
    } else {
        Vec::new()
    };
    for line in report_lines(&summary, out_dir, &url_model::archive_display_name(url), &missing) {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed after extraction, in order.
pub(crate) fn report_lines(
    summary: &ExtractSummary,
    out_dir: &Path,
    archive_name: &str,
    missing: &[String],
) -> Vec<String> {
    let mut lines: Vec<String> = summary.warnings.iter().map(|w| w.to_string()).collect();

    if summary.written > 0 {
        lines.push(format!(
            "Successfully processed and saved {} card images.",
            summary.written
        ));
        if !missing.is_empty() {
            lines.push(format!(
                "{} of {} expected card images are missing: {}",
                missing.len(),
                cards::full_deck().len(),
                missing.join(", ")
            ));
        }
    } else {
        lines.push(
            "No card images were extracted. Please check the ZIP file structure and the filename parsing rules."
                .to_string(),
        );
        lines.push(format!(
            "You might need to open '{}' manually, inspect filenames, and adjust the rank/suit lookup tables.",
            archive_name
        ));
    }

    lines.push(format!("Please check the '{}' directory.", out_dir.display()));
    lines
}
