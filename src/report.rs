// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Run summaries for the console

use std::fmt::Write;

use crate::organizer::RunStats;
use crate::Result;

/// How many unmatched files the text summary lists before truncating
pub const UNMATCHED_PREVIEW: usize = 20;

/// Human-readable summary of a run
pub fn render_text(stats: &RunStats) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SUMMARY ({})", if stats.dry_run { "DRY RUN MODE" } else { "LIVE MODE" });
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Files processed: {}", stats.processed());
    let _ = writeln!(out, "Files matched: {}", stats.matched_files.len());
    if !stats.dry_run {
        let _ = writeln!(out, "Files moved: {}", stats.moved_files.len());
    }
    let _ = writeln!(out, "Files unmatched: {}", stats.unmatched_files.len());
    let _ = writeln!(out, "Folders created: {}", stats.created_folders.len());

    if !stats.created_folders.is_empty() {
        let _ = writeln!(out, "\nNew folders created:");
        for folder in &stats.created_folders {
            let _ = writeln!(out, "  - {}/", folder);
        }
    }

    if !stats.unmatched_files.is_empty() {
        let _ = writeln!(out, "\nUnmatched files (may need manual placement):");
        for filename in stats.unmatched_files.iter().take(UNMATCHED_PREVIEW) {
            let _ = writeln!(out, "  - {}", filename);
        }
        if stats.unmatched_files.len() > UNMATCHED_PREVIEW {
            let _ = writeln!(out, "  ... and {} more", stats.unmatched_files.len() - UNMATCHED_PREVIEW);
        }
    }

    if !stats.failed_files.is_empty() {
        let _ = writeln!(out, "\nFailed files:");
        for failure in &stats.failed_files {
            let _ = writeln!(out, "  - {}: {}", failure.filename, failure.reason);
        }
    }

    out
}

/// Pretty JSON document of a run
pub fn render_json(stats: &RunStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organizer::{FileFailure, FileOutcome};
    use std::path::PathBuf;

    fn sample() -> RunStats {
        let mut stats = RunStats::new(true);
        stats.matched_files.push(FileOutcome {
            filename: "alice.pdf".to_string(),
            role: "Python".to_string(),
            score: 3,
            destination: PathBuf::from("Python/alice.pdf"),
        });
        stats.created_folders.push("Python".to_string());
        stats.unmatched_files = (0..25).map(|i| format!("cv{}.pdf", i)).collect();
        stats
    }

    #[test]
    fn test_text_summary_counts_and_truncation() {
        let text = render_text(&sample());
        assert!(text.contains("DRY RUN MODE"));
        assert!(text.contains("Files processed: 26"));
        assert!(text.contains("Files matched: 1"));
        assert!(text.contains("Files unmatched: 25"));
        assert!(text.contains("  - Python/"));
        assert!(text.contains("  - cv19.pdf"));
        assert!(!text.contains("  - cv20.pdf"));
        assert!(text.contains("... and 5 more"));
        assert!(!text.contains("Files moved"));
    }

    #[test]
    fn test_text_summary_lists_failures() {
        let mut stats = RunStats::new(false);
        stats.failed_files.push(FileFailure {
            filename: "locked.pdf".to_string(),
            reason: "permission denied".to_string(),
        });
        let text = render_text(&stats);
        assert!(text.contains("LIVE MODE"));
        assert!(text.contains("Files moved: 0"));
        assert!(text.contains("locked.pdf: permission denied"));
    }

    #[test]
    fn test_json_summary() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["matched_files"][0]["role"], "Python");
        assert_eq!(value["matched_files"][0]["score"], 3);
        assert_eq!(value["unmatched_files"].as_array().unwrap().len(), 25);
    }
}
