//! Error types for repoloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan or the staging of a repository.
///
/// Per-file problems (unreadable files, undecodable content) never surface
/// here: they are absorbed by the scan and the file is left out.
#[derive(Error, Debug)]
pub enum RepolocError {
    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Scan root exists but cannot be listed
    #[error("cannot read directory '{path}': {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input looked like a URL but is not a GitHub repository URL
    #[error("invalid GitHub repository URL: {0}")]
    InvalidRepoUrl(String),

    /// Cloning the remote repository failed
    #[error("failed to clone '{url}': {message}")]
    Clone { url: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
