// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Resume Sorter: keyword-driven CV classifier
//!
//! Scores resume text against a fixed role taxonomy and files each document
//! into the folder of its best-matching role, either for real or as a dry run.

pub mod classifier;
pub mod config;
pub mod error;
pub mod extract;
pub mod organizer;
pub mod planner;
pub mod report;
pub mod scorer;
pub mod taxonomy;

pub use classifier::{Classification, ClassificationResult, Classifier, MatchSource};
pub use config::{AppConfig, ManualMappings};
pub use error::{Result, SorterError};
pub use organizer::{Organizer, RunStats};
pub use taxonomy::Taxonomy;
