//! Repository acquisition: resolve the user's input to a local directory.
//!
//! Inputs are either a GitHub repository URL, cloned into a temporary
//! directory for the duration of the run, or a path to a local checkout.

use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use tempfile::TempDir;
use tracing::{debug, info};

use crate::error::RepolocError;
use crate::Result;

/// Where the repository content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// A GitHub repository to clone.
    Remote { url: String },
    /// A directory already on disk.
    Local { path: PathBuf },
}

impl RepoSource {
    /// Interpret a command-line input.
    ///
    /// A leading `@` is ignored. Anything with a `scheme://` prefix or in
    /// scp form (`git@github.com:owner/repo`) is treated as a remote and must
    /// point at a GitHub repository (`https://github.com/<owner>/<repo>`);
    /// everything else is a local path.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.strip_prefix('@').unwrap_or(input);

        if looks_like_url(input) {
            if !is_github_repo_url(input) {
                return Err(RepolocError::InvalidRepoUrl(input.to_string()));
            }
            return Ok(RepoSource::Remote {
                url: input.to_string(),
            });
        }

        Ok(RepoSource::Local {
            path: PathBuf::from(input),
        })
    }

    /// Short name used in report headers: `owner/repo` for remotes.
    pub fn display_name(&self) -> String {
        match self {
            RepoSource::Remote { url } => {
                let segments: Vec<&str> = url
                    .trim_end_matches('/')
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .collect();
                let tail = &segments[segments.len().saturating_sub(2)..];
                tail.join("/").trim_end_matches(".git").to_string()
            }
            RepoSource::Local { path } => path.display().to_string(),
        }
    }

    /// Make the repository available on disk.
    ///
    /// Remote sources are cloned into a fresh temporary directory which is
    /// removed when the returned [`StagedRepo`] is dropped.
    pub fn stage(&self) -> Result<StagedRepo> {
        match self {
            RepoSource::Local { path } => {
                validate_local_dir(path)?;
                Ok(StagedRepo {
                    path: path.clone(),
                    temp: None,
                })
            }
            RepoSource::Remote { url } => {
                let temp = tempfile::Builder::new().prefix("repoloc-").tempdir()?;
                info!("Cloning repository {}...", url);
                clone_into(url, temp.path())?;
                Ok(StagedRepo {
                    path: temp.path().to_path_buf(),
                    temp: Some(temp),
                })
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, RepoSource::Remote { .. })
    }
}

/// A repository available on the local filesystem.
///
/// Holds the temporary clone directory (if any) alive; dropping it deletes
/// the clone.
#[derive(Debug)]
pub struct StagedRepo {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl StagedRepo {
    /// Root directory of the repository content.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the content lives in a temporary clone.
    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }
}

impl Drop for StagedRepo {
    fn drop(&mut self) {
        if self.temp.is_some() {
            debug!("Cleaning up temporary clone at {}", self.path.display());
        }
    }
}

/// `scheme://...` or scp-like `user@host:path`.
fn looks_like_url(input: &str) -> bool {
    if input.contains("://") {
        return true;
    }
    match input.split_once(':') {
        Some((user_host, _)) => user_host.contains('@') && !user_host.contains('/'),
        None => false,
    }
}

/// Check that a URL points at `github.com/<owner>/<repo>`.
pub fn is_github_repo_url(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    if scheme != "https" && scheme != "http" {
        return false;
    }

    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    if host != "github.com" {
        return false;
    }

    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).count() >= 2
}

fn validate_local_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(RepolocError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RepolocError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Clone `url` and check out its default branch into `dest`.
fn clone_into(url: &str, dest: &Path) -> Result<()> {
    let interrupt = AtomicBool::new(false);

    let mut prepare = gix::prepare_clone(url, dest).map_err(|e| clone_error(url, e))?;
    let (mut checkout, _) = prepare
        .fetch_then_checkout(gix::progress::Discard, &interrupt)
        .map_err(|e| clone_error(url, e))?;
    checkout
        .main_worktree(gix::progress::Discard, &interrupt)
        .map_err(|e| clone_error(url, e))?;

    debug!("Cloned {} into {}", url, dest.display());
    Ok(())
}

fn clone_error(url: &str, err: impl std::fmt::Display) -> RepolocError {
    RepolocError::Clone {
        url: url.to_string(),
        message: err.to_string(),
    }
}
