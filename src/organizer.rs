// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Run orchestration: discover, classify, plan, move

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::classifier::{Classification, ClassificationResult, Classifier};
use crate::config::{AppConfig, DiscoveryConfig, ManualMappings};
use crate::extract::TextExtractor;
use crate::planner::MovePlanner;
use crate::taxonomy::Taxonomy;
use crate::Result;

/// A file assigned to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub filename: String,
    pub role: String,
    pub score: usize,
    pub destination: PathBuf,
}

/// A file that could not be filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub filename: String,
    pub reason: String,
}

/// Everything a run did (or would do)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub matched_files: Vec<FileOutcome>,
    pub moved_files: Vec<FileOutcome>,
    pub unmatched_files: Vec<String>,
    pub created_folders: Vec<String>,
    pub failed_files: Vec<FileFailure>,
}

impl RunStats {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            started_at: Utc::now(),
            finished_at: None,
            matched_files: Vec::new(),
            moved_files: Vec::new(),
            unmatched_files: Vec::new(),
            created_folders: Vec::new(),
            failed_files: Vec::new(),
        }
    }

    /// Number of files looked at
    pub fn processed(&self) -> usize {
        self.matched_files.len() + self.unmatched_files.len()
    }
}

/// Check if a root entry is a resume candidate
pub fn is_candidate(path: &Path, discovery: &DiscoveryConfig) -> bool {
    let filename = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };

    if filename.starts_with('.') {
        return false;
    }

    if discovery.excluded_files.iter().any(|n| n == filename) {
        return false;
    }

    let has_resume_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| discovery.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false);

    has_resume_extension && path.is_file()
}

/// Drives classification and filing for one root directory
pub struct Organizer {
    config: AppConfig,
    dry_run: bool,
    taxonomy: Taxonomy,
    mappings: ManualMappings,
    extractor: TextExtractor,
}

impl Organizer {
    pub fn new(config: AppConfig, dry_run: bool, taxonomy: Taxonomy, mappings: ManualMappings) -> Self {
        let extractor = TextExtractor::from_config(&config.extraction);
        Self {
            config,
            dry_run,
            taxonomy,
            mappings,
            extractor,
        }
    }

    /// Swap in a custom extractor (e.g. different decoder strategies)
    pub fn with_extractor(mut self, extractor: TextExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.config.root_dir, &self.taxonomy, &self.mappings, &self.extractor)
            .with_settings(self.config.classifier.clone())
    }

    /// Resume files directly inside the root, in directory order
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let files = std::fs::read_dir(&self.config.root_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| is_candidate(p, &self.config.discovery))
            .collect();
        Ok(files)
    }

    /// Classify and file every candidate in the root
    pub fn run(&self) -> Result<RunStats> {
        let mut stats = RunStats::new(self.dry_run);
        let mut planner = MovePlanner::new(self.dry_run);
        let classifier = self.classifier();

        let files = self.discover()?;
        info!("Found {} resume files in {:?}", files.len(), self.config.root_dir);

        for file in files {
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match classifier.classify(&file) {
                Classification::Matched(result) => {
                    self.file_match(&mut planner, &mut stats, &file, filename, result);
                }
                Classification::Unmatched => {
                    info!("[UNMATCHED] No match found: {}", filename);
                    stats.unmatched_files.push(filename);
                }
            }
        }

        stats.finished_at = Some(Utc::now());
        Ok(stats)
    }

    fn file_match(
        &self,
        planner: &mut MovePlanner,
        stats: &mut RunStats,
        file: &Path,
        filename: String,
        result: ClassificationResult,
    ) {
        match planner.ensure_folder(&result.target_folder) {
            Ok(action) => {
                if action.is_new() {
                    stats.created_folders.push(result.role.clone());
                }
            }
            Err(e) => {
                error!("[ERROR] Could not create folder {}: {}", result.role, e);
                stats.failed_files.push(FileFailure {
                    filename: filename.clone(),
                    reason: format!("could not create folder {}: {}", result.role, e),
                });
                stats.unmatched_files.push(filename);
                return;
            }
        }

        let destination = planner.plan_destination(&result.target_folder, file);
        let outcome = FileOutcome {
            filename,
            role: result.role,
            score: result.score,
            destination,
        };
        stats.matched_files.push(outcome.clone());

        if self.dry_run {
            info!("[DRY RUN] Would move: {} -> {}/ (score: {})", outcome.filename, outcome.role, outcome.score);
            return;
        }

        match planner.execute_move(file, &outcome.destination) {
            Ok(()) => {
                info!("[MOVED] {} -> {}/ (score: {})", outcome.filename, outcome.role, outcome.score);
                stats.moved_files.push(outcome);
            }
            Err(e) => {
                error!("[ERROR] Error moving {}: {}", outcome.filename, e);
                stats.failed_files.push(FileFailure {
                    filename: outcome.filename,
                    reason: e.to_string(),
                });
            }
        }
    }
}
