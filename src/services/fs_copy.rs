//! Exclusion-aware tree mirroring and single-file copies.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ensure_exists};

/// Which endpoints of a tree copy must already exist on disk.
#[derive(Debug, Clone, Copy)]
pub struct CopyOptions {
    pub validate_origin: bool,
    pub validate_destination: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self { validate_origin: true, validate_destination: true }
    }
}

impl CopyOptions {
    /// Neither endpoint is required to pre-exist. Used for optional content
    /// such as test sources, where an absent origin means "nothing to copy".
    pub fn relaxed() -> Self {
        Self { validate_origin: false, validate_destination: false }
    }
}

/// Recursively mirrors `origin` under `destination`.
///
/// Entries whose path equals an excluded path, or descends from one, are
/// skipped along with their subtrees. Intermediate directories are created
/// as needed and individual file copies replace existing files. I/O
/// failures propagate immediately; partially copied trees are not rolled
/// back.
pub fn copy_tree(
    origin: &Path,
    destination: &Path,
    exclusions: &HashSet<PathBuf>,
    options: CopyOptions,
) -> Result<(), AppError> {
    if options.validate_origin {
        ensure_exists(origin)?;
    }
    if options.validate_destination {
        ensure_exists(destination)?;
    }

    // Relaxed validation treats an absent origin as an empty tree.
    if !origin.exists() {
        return Ok(());
    }

    copy_dir_recursive(origin, destination, exclusions)
}

/// Copies a single file into `destination_folder`, preserving its name and
/// replacing any existing file of the same name. Both the file and the
/// folder must already exist.
pub fn copy_file_into(origin: &Path, destination_folder: &Path) -> Result<(), AppError> {
    ensure_exists(origin)?;
    ensure_exists(destination_folder)?;

    let file_name = origin
        .file_name()
        .ok_or_else(|| AppError::config_error(format!("Not a file: {}", origin.display())))?;
    fs::copy(origin, destination_folder.join(file_name))?;
    Ok(())
}

fn copy_dir_recursive(
    origin: &Path,
    destination: &Path,
    exclusions: &HashSet<PathBuf>,
) -> Result<(), AppError> {
    fs::create_dir_all(destination)?;

    for entry in fs::read_dir(origin)? {
        let entry = entry?;
        let entry_path = entry.path();
        if is_excluded(&entry_path, exclusions) {
            continue;
        }

        let target_path = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry_path, &target_path, exclusions)?;
        } else {
            // fs::copy replaces an existing destination file.
            fs::copy(&entry_path, &target_path)?;
        }
    }

    Ok(())
}

fn is_excluded(path: &Path, exclusions: &HashSet<PathBuf>) -> bool {
    // starts_with covers both the exact match and the descendant case.
    exclusions.iter().any(|excluded| path.starts_with(excluded))
}
