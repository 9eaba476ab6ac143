// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Resume classification
//!
//! Decides the role folder for a file: manual mappings first, then keyword
//! scores over the document text, with the filename mixed in when the text
//! is too short to be trusted on its own.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{ClassifierConfig, ManualMappings};
use crate::extract::TextExtractor;
use crate::scorer::{self, ScoreMap};
use crate::taxonomy::Taxonomy;

/// Which signal produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    /// Exact filename found in the manual mappings
    Manual,
    /// Keyword hits in the extracted document text
    Content,
    /// Document text was sparse, so the filename was scored as well
    Filename,
}

/// A file matched to a role folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub target_folder: PathBuf,
    pub role: String,
    pub score: usize,
    pub folder_must_be_created: bool,
    pub source: MatchSource,
}

/// Outcome of classifying one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched(ClassificationResult),
    Unmatched,
}

/// Full scoring breakdown for one file
#[derive(Debug, Clone)]
pub struct Explanation {
    pub scores: ScoreMap,
    pub used_filename_fallback: bool,
    pub manual_role: Option<String>,
    pub classification: Classification,
}

/// Classifies files under a root directory
pub struct Classifier<'a> {
    root: PathBuf,
    taxonomy: &'a Taxonomy,
    mappings: &'a ManualMappings,
    extractor: &'a TextExtractor,
    settings: ClassifierConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        taxonomy: &'a Taxonomy,
        mappings: &'a ManualMappings,
        extractor: &'a TextExtractor,
    ) -> Self {
        Self {
            root: root.into(),
            taxonomy,
            mappings,
            extractor,
            settings: ClassifierConfig::default(),
        }
    }

    pub fn with_settings(mut self, settings: ClassifierConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Pick the role folder for `path`
    pub fn classify(&self, path: &Path) -> Classification {
        self.explain(path).classification
    }

    /// Classify `path` and keep the intermediate scores
    pub fn explain(&self, path: &Path) -> Explanation {
        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if let Some(role) = self.mappings.get(filename) {
            debug!("Manual mapping: {} -> {}", filename, role);
            return Explanation {
                scores: ScoreMap::default(),
                used_filename_fallback: false,
                manual_role: Some(role.to_string()),
                classification: Classification::Matched(self.matched(role, self.settings.manual_score, MatchSource::Manual)),
            };
        }

        let (text, used_filename_fallback) = self.analysis_text(path);
        let scores = scorer::score(&text, self.taxonomy);
        let classification = self.decide(&scores, used_filename_fallback);

        if let Classification::Matched(ref result) = classification {
            debug!("{} -> {} (score {}, {:?})", filename, result.role, result.score, result.source);
        }

        Explanation {
            scores,
            used_filename_fallback,
            manual_role: None,
            classification,
        }
    }

    /// Extracted text, plus the filename when the text is too short
    fn analysis_text(&self, path: &Path) -> (String, bool) {
        let mut text = self.extractor.extract(path);

        if text.trim().chars().count() >= self.settings.min_content_chars {
            return (text, false);
        }

        let fallback = filename_fallback_text(path);
        if text.is_empty() {
            text = fallback;
        } else {
            text.push(' ');
            text.push_str(&fallback);
        }
        (text, true)
    }

    fn decide(&self, scores: &ScoreMap, used_filename_fallback: bool) -> Classification {
        let best = match scores.best() {
            Some(b) => b,
            None => return Classification::Unmatched,
        };

        let min_score = if used_filename_fallback {
            self.settings.min_filename_score
        } else {
            self.settings.min_content_score
        };

        if best.score < min_score {
            debug!("Best role {} scored {} (< {}), leaving unmatched", best.role, best.score, min_score);
            return Classification::Unmatched;
        }

        let source = if used_filename_fallback { MatchSource::Filename } else { MatchSource::Content };
        Classification::Matched(self.matched(&best.role, best.score, source))
    }

    fn matched(&self, role: &str, score: usize, source: MatchSource) -> ClassificationResult {
        let target_folder = self.root.join(role);
        ClassificationResult {
            folder_must_be_created: !target_folder.exists(),
            target_folder,
            role: role.to_string(),
            score,
            source,
        }
    }
}

/// Lower-cased stem and full filename, e.g. `"jane_qa_cv jane_qa_cv.pdf"`
pub fn filename_fallback_text(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("").to_lowercase();
    format!("{} {}", stem, name)
}
