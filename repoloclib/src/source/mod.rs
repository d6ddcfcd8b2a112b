//! Source discovery: decide what to analyze.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Acquisition**: resolve a GitHub URL or local path to a directory
//! - **Languages**: map file extensions to language labels
//! - **Scope**: prune denylisted directories and glob-excluded paths
//!
//! ## Example
//!
//! ```rust,ignore
//! use repoloclib::source::{ExclusionRules, RepoSource};
//!
//! let staged = RepoSource::parse("https://github.com/owner/repo")?.stage()?;
//! let rules = ExclusionRules::new().exclude("tests/*")?;
//! ```

pub mod languages;
pub mod remote;
pub mod scope;

pub use languages::LanguageMap;
pub use remote::{is_github_repo_url, RepoSource, StagedRepo};
pub use scope::{relative_posix, DirectoryDenylist, EntryKind, ExclusionRules, Scope};
