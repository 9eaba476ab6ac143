// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for the resume sorter

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Directory holding loose resumes and role folders
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Scoring thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Text extraction backends
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Which files in the root are considered
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Inline filename → role overrides
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Below this many trimmed characters the filename is scored too
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,
    /// Minimum winning score when the text came from the document itself
    #[serde(default = "default_min_content_score")]
    pub min_content_score: usize,
    /// Minimum winning score when the filename fallback was used
    #[serde(default = "default_min_filename_score")]
    pub min_filename_score: usize,
    /// Score reported for manual mappings
    #[serde(default = "default_manual_score")]
    pub manual_score: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PdfBackend {
    /// Page-by-page text via lopdf
    #[default]
    Pages,
    /// Whole-document layout text via pdf-extract
    Layout,
    /// PDF decoding disabled
    None,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub pdf_backend: PdfBackend,
    #[serde(default = "default_true")]
    pub docx_enabled: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DiscoveryConfig {
    /// Extensions (without dot, case-insensitive) treated as resumes
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Exact filenames never moved
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,
}

// Default value functions
fn default_root_dir() -> PathBuf { PathBuf::from(".") }
fn default_min_content_chars() -> usize { 50 }
fn default_min_content_score() -> usize { 2 }
fn default_min_filename_score() -> usize { 1 }
fn default_manual_score() -> usize { 999 }
fn default_true() -> bool { true }

fn default_extensions() -> Vec<String> {
    vec!["pdf", "docx", "doc", "txt"].into_iter().map(String::from).collect()
}

fn default_excluded_files() -> Vec<String> {
    vec!["organize_resumes.py", "requirements.txt", "desktop.ini"]
        .into_iter().map(String::from).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            classifier: ClassifierConfig::default(),
            extraction: ExtractionConfig::default(),
            discovery: DiscoveryConfig::default(),
            mappings: BTreeMap::new(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_content_chars: default_min_content_chars(),
            min_content_score: default_min_content_score(),
            min_filename_score: default_min_filename_score(),
            manual_score: default_manual_score(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pdf_backend: PdfBackend::default(),
            docx_enabled: true,
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_files: default_excluded_files(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::SorterError::Config(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Exact filename → role folder overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualMappings(BTreeMap<String, String>);

impl ManualMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mappings that ship with the tool
    pub fn defaults() -> Self {
        let mut map = BTreeMap::new();
        map.insert("David Cano.pdf".to_string(), "DevOPS".to_string());
        map.insert("Francisco Lala - Resume.pdf".to_string(), "JavaScript".to_string());
        Self(map)
    }

    /// Read a JSON object of `"filename": "Role"` pairs
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mappings: Self = serde_json::from_str(&content)
            .map_err(|e| crate::SorterError::Config(format!("Failed to parse mappings: {}", e)))?;
        Ok(mappings)
    }

    /// Overlay `other` on top of these mappings; `other` wins on conflict
    pub fn merge(&mut self, other: impl IntoIterator<Item = (String, String)>) {
        self.0.extend(other);
    }

    pub fn insert(&mut self, filename: impl Into<String>, role: impl Into<String>) {
        self.0.insert(filename.into(), role.into());
    }

    /// Role for an exact filename, if mapped
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.0.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ManualMappings {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
