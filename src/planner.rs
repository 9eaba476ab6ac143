// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Destination planning and file moves
//!
//! Collision checks run against the live filesystem at planning time. In dry
//! runs the planner also remembers the folders and destinations it would
//! have created, so simulated plans match what a real run would do.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{Result, SorterError};

/// What happened when a folder was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderAction {
    AlreadyExists,
    Created,
    WouldCreate,
}

impl FolderAction {
    /// True if the folder is new in this run
    pub fn is_new(&self) -> bool {
        !matches!(self, Self::AlreadyExists)
    }
}

/// Plans collision-free destinations inside role folders
pub struct MovePlanner {
    dry_run: bool,
    simulated_folders: HashSet<PathBuf>,
    reserved: HashSet<PathBuf>,
}

impl MovePlanner {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            simulated_folders: HashSet::new(),
            reserved: HashSet::new(),
        }
    }

    /// Make sure `folder` exists, or record that it would be created
    pub fn ensure_folder(&mut self, folder: &Path) -> Result<FolderAction> {
        if folder.exists() || self.simulated_folders.contains(folder) {
            return Ok(FolderAction::AlreadyExists);
        }

        if self.dry_run {
            self.simulated_folders.insert(folder.to_path_buf());
            info!("[DRY RUN] Would create folder: {}/", display_name(folder));
            return Ok(FolderAction::WouldCreate);
        }

        std::fs::create_dir_all(folder)?;
        info!("[CREATED] New folder: {}/", display_name(folder));
        Ok(FolderAction::Created)
    }

    /// First free path for `file` inside `target_folder`.
    ///
    /// `name.ext` if free, else `name (1).ext`, `name (2).ext`, ...
    pub fn plan_destination(&mut self, target_folder: &Path, file: &Path) -> PathBuf {
        let file_name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let mut destination = target_folder.join(&file_name);

        if self.is_occupied(&destination) {
            let stem = file.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            let suffix = file
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();

            let mut counter = 1u32;
            loop {
                destination = target_folder.join(format!("{} ({}){}", stem, counter, suffix));
                if !self.is_occupied(&destination) {
                    break;
                }
                counter += 1;
            }
            debug!("{} already taken, using {:?}", file_name, destination);
        }

        if self.dry_run {
            self.reserved.insert(destination.clone());
        }
        destination
    }

    fn is_occupied(&self, path: &Path) -> bool {
        path.exists() || self.reserved.contains(path)
    }

    /// Move `source` to a planned `destination`
    pub fn execute_move(&self, source: &Path, destination: &Path) -> Result<()> {
        if destination.exists() {
            return Err(SorterError::Move {
                path: source.to_path_buf(),
                reason: format!("destination {:?} appeared after planning", destination),
            });
        }

        if std::fs::rename(source, destination).is_ok() {
            return Ok(());
        }

        // rename cannot cross filesystems
        std::fs::copy(source, destination).map_err(|e| SorterError::Move {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        if let Err(e) = std::fs::remove_file(source) {
            let _ = std::fs::remove_file(destination);
            return Err(SorterError::Move {
                path: source.to_path_buf(),
                reason: format!("copied but could not remove original: {}", e),
            });
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
