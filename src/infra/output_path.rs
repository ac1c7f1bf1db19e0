//! Output path validation and validated writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Why an output path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    IsADirectory,
    ParentMissing,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::IsADirectory => "is_a_directory",
            RejectReason::ParentMissing => "parent_missing",
        }
    }
}

/// Classification of a requested output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(PathBuf),
    Rejected(RejectReason),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    /// Converts the outcome into a `Result`, naming `path` in the error.
    ///
    /// # Errors
    ///
    /// Returns `OutputPathError::OutputIsDirectory` or
    /// `OutputPathError::OutputParentMissing` for a rejected path.
    pub fn into_result(self, path: &Path) -> Result<PathBuf, OutputPathError> {
        match self {
            ValidationOutcome::Accepted(p) => Ok(p),
            ValidationOutcome::Rejected(RejectReason::IsADirectory) => {
                Err(OutputPathError::OutputIsDirectory { path: path.into() })
            }
            ValidationOutcome::Rejected(RejectReason::ParentMissing) => {
                Err(OutputPathError::OutputParentMissing { path: path.into() })
            }
        }
    }
}

/// Errors for output paths and writes through them.
#[derive(Debug, Error)]
pub enum OutputPathError {
    #[error("output path is a directory: {path}")]
    OutputIsDirectory { path: PathBuf },

    #[error("parent directory does not exist: {path}")]
    OutputParentMissing { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Classifies `path` as a write target without touching the filesystem.
///
/// A bare file name such as `out.txt` has the current directory as its parent.
/// A path ending in a separator, or without a final file name component
/// (`..`, `/`), can only name a directory and is rejected as one.
/// Overwriting an existing file is allowed.
pub fn validate_output_path(path: &Path) -> ValidationOutcome {
    // An empty path names the current directory
    let inspected = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };

    if inspected.is_dir() || names_directory(inspected) {
        debug!(path = %path.display(), "output path rejected: is a directory");
        return ValidationOutcome::Rejected(RejectReason::IsADirectory);
    }

    if !parent_dir(inspected).is_dir() {
        debug!(path = %path.display(), "output path rejected: parent missing");
        return ValidationOutcome::Rejected(RejectReason::ParentMissing);
    }

    ValidationOutcome::Accepted(path.to_path_buf())
}

/// Validates `path`, then writes `contents` to it atomically.
///
/// Uses a temporary file in the parent directory and an atomic rename, so a
/// failed write never leaves a partial file at `path`.
///
/// # Errors
///
/// Returns the rejection as `OutputPathError` if validation fails.
/// Returns `OutputPathError::Io` if the temporary file cannot be written.
/// Returns `OutputPathError::AtomicWrite` if the rename fails.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<PathBuf, OutputPathError> {
    let target = validate_output_path(path).into_result(path)?;
    let parent = parent_dir(&target);

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| OutputPathError::Io {
        path: target.clone(),
        source: e,
    })?;

    temp.write_all(contents).map_err(|e| OutputPathError::Io {
        path: target.clone(),
        source: e,
    })?;

    temp.persist(&target)
        .map_err(|e| OutputPathError::AtomicWrite {
            path: target.clone(),
            source: e.error,
        })?;

    info!(path = %target.display(), bytes = contents.len(), "wrote output");
    Ok(target)
}

fn names_directory(path: &Path) -> bool {
    let trailing_separator = path
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| std::path::is_separator(b as char));
    trailing_separator || path.file_name().is_none()
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
