//! # repoloclib
//!
//! A lines of code counter for whole repositories, grouped by language.
//!
//! ## Overview
//!
//! The library walks a directory tree, decides which files are in scope and
//! which language each one belongs to, counts raw lines and aggregates them
//! per language, with an optional per-file breakdown. Languages are
//! attributed by file extension only; there is no content sniffing.
//!
//! The pipeline has four stages:
//!
//! - **source**: resolve the repository (GitHub clone or local directory)
//!   and define the scan scope (extension map, denylist, glob exclusions)
//! - **data**: the pruned walk and line counting (`scan`)
//! - **query**: sorting, percentages and top-N file selection
//! - **output**: presentation-ready tables
//!
//! ## Features
//!
//! - **Two extension tiers**: code always, documentation on request
//! - **Denylist**: `.git`, `node_modules`, `venv`, `env`, `__pycache__`,
//!   `dist` and `build` are never walked
//! - **Glob filtering**: exclude files or whole subtrees by relative path
//! - **Encoding tolerant**: files are counted whatever their encoding
//! - **Pure Rust data types**: Returns structured data, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use repoloclib::{scan, ExclusionRules, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("app.py"), "import os\nprint(os.name)\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# Demo\n").unwrap();
//!
//! let result = scan(dir.path(), ScanOptions::new()).unwrap();
//! assert_eq!(result.lines_for("Python"), Some(2));
//! assert_eq!(result.lines_for("Markdown"), None);
//!
//! let result = scan(dir.path(), ScanOptions::new().include_docs(true)).unwrap();
//! assert_eq!(result.total_lines, 3);
//!
//! let rules = ExclusionRules::new().exclude("*.py").unwrap();
//! let result = scan(dir.path(), ScanOptions::new().exclusions(rules)).unwrap();
//! assert_eq!(result.total_lines, 0);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    count_file_lines, count_lines, scan, FileStats, LanguageFiles, LanguageStats, ScanOptions,
    ScanResult,
};
pub use error::RepolocError;
pub use output::{FileRow, ReportTable, TableRow};
pub use query::{
    FileItem, LanguageItem, OrderBy, OrderDirection, Ordering, ScanQuerySet, DEFAULT_TOP_FILES,
};
pub use source::{ExclusionRules, LanguageMap, RepoSource, Scope, StagedRepo};

/// Result type for repoloclib operations
pub type Result<T> = std::result::Result<T, RepolocError>;
