//! Error types for table construction, traversal and renaming

use std::io;
use std::path::PathBuf;

/// Errors raised while building the mask table or processing paths
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    #[error("Path '{}' does not exist", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("Failed to read directory '{}': {}", .path.display(), .source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to rename '{}' -> '{}': {}", .from.display(), .to.display(), .source)]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Duplicate extension '{extension}' in mask table")]
    DuplicateExtension { extension: String },

    #[error("Duplicate token '{token}' in mask table")]
    DuplicateToken { token: String },
}

impl MaskError {
    pub fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::ReadDir { path, source }
    }

    pub fn rename(from: PathBuf, to: PathBuf, source: io::Error) -> Self {
        Self::Rename { from, to, source }
    }

    /// True for the missing-input case, which the binary reports on stdout
    /// and treats as a normal completion.
    pub fn is_missing_path(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }
}

/// Result type for masking operations
pub type MaskResult<T> = Result<T, MaskError>;
