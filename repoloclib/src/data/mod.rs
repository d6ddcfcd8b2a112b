//! Data collection: walk files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading in-scope
//! files and aggregating their line counts. It provides:
//!
//! - **Counting**: raw line counting tolerant of any encoding
//! - **Scanning**: the pruned directory walk (`scan`)
//! - **Statistics**: result types (`ScanResult`, `LanguageStats`, ...)
//!
//! ## Example
//!
//! ```rust,ignore
//! use repoloclib::data::{scan, ScanOptions};
//!
//! let result = scan(".", ScanOptions::new().include_docs(true))?;
//! println!("Total lines: {}", result.total_lines);
//! ```

pub mod counter;
pub mod scan;
pub mod stats;

pub use counter::{count_file_lines, count_lines};
pub use scan::{scan, ScanOptions};
pub use stats::{FileStats, LanguageFiles, LanguageStats, ScanAccumulator, ScanResult};
