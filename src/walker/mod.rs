//! Filesystem traversal and rename execution

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::cli;
use crate::error::{MaskError, MaskResult};
use crate::stats::RunSummary;
use crate::transform::{self, Direction};

/// Behaviour switches for a rename batch
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Descend into subdirectories when the target is a directory
    pub recursive: bool,
    /// Report renames without touching the filesystem
    pub dry_run: bool,
    /// Keep going after a failed rename instead of aborting
    pub continue_on_error: bool,
    /// Suppress non-error output
    pub quiet: bool,
    /// Per-file skip diagnostics on stderr
    pub verbose: bool,
}

/// Collect regular files directly in `dir`, or the whole tree when
/// `recursive` is set. Subdirectory entries themselves are never returned.
pub fn collect_files(dir: &Path, recursive: bool) -> MaskResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    } else {
        let entries =
            fs::read_dir(dir).map_err(|source| MaskError::read_dir(dir.to_path_buf(), source))?;
        for entry in entries {
            let entry = entry.map_err(|source| MaskError::read_dir(dir.to_path_buf(), source))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Rename a single file, or every file under a directory, in the given
/// direction. Returns the accumulated [`RunSummary`].
///
/// A target that is neither a file nor a directory yields
/// [`MaskError::PathNotFound`]. A failed rename aborts the batch unless
/// `continue_on_error` is set, in which case it is reported and counted.
pub fn process_path(
    target: &Path,
    direction: Direction,
    options: &WalkOptions,
) -> MaskResult<RunSummary> {
    let started = Instant::now();
    let mut summary = RunSummary::new(options.dry_run);

    if target.is_file() {
        process_file(target, direction, options, &mut summary)?;
    } else if target.is_dir() {
        let files = collect_files(target, options.recursive)?;
        if options.verbose {
            eprintln!("Found {} files under {}", files.len(), target.display());
        }
        for file in files {
            if let Err(error) = process_file(&file, direction, options, &mut summary) {
                if !options.continue_on_error {
                    return Err(error);
                }
                cli::show_error(&error.to_string());
                summary.record_failed();
            }
        }
    } else {
        return Err(MaskError::PathNotFound {
            path: target.to_path_buf(),
        });
    }

    summary.finish(started);
    Ok(summary)
}

/// Apply the transform to one file name and rename in place if it changed.
fn process_file(
    path: &Path,
    direction: Direction,
    options: &WalkOptions,
    summary: &mut RunSummary,
) -> MaskResult<()> {
    summary.record_scanned();

    // Names that are not valid UTF-8 cannot match any table entry
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => {
            summary.record_skipped();
            return Ok(());
        }
    };

    let new_name = match transform::apply(name, direction) {
        Some(new_name) => new_name,
        None => {
            if options.verbose {
                eprintln!("Skipping {} (no mapping)", path.display());
            }
            summary.record_skipped();
            return Ok(());
        }
    };

    let new_path = path.with_file_name(&new_name);
    if new_path.exists() {
        cli::show_warning(
            &format!("Target '{}' already exists, skipping", new_path.display()),
            options.quiet,
        );
        summary.record_skipped();
        return Ok(());
    }

    if !options.dry_run {
        fs::rename(path, &new_path)
            .map_err(|source| MaskError::rename(path.to_path_buf(), new_path.clone(), source))?;
    }

    if !options.quiet {
        println!("Processed: {} -> {}", path.display(), new_path.display());
    }
    summary.record_renamed();
    Ok(())
}
