// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for the resume sorter

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sorter operations
pub type Result<T> = std::result::Result<T, SorterError>;

/// Sorter error types
#[derive(Error, Debug)]
pub enum SorterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Move failed for {path:?}: {reason}")]
    Move { path: PathBuf, reason: String },
}
