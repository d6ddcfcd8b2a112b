//! Query set: processed data ready for table rendering.
//!
//! A QuerySet sits between the raw scan result and the final table output.
//! It represents data that has been:
//! - Sorted according to the ordering preference
//! - Annotated with percentages of the enclosing total
//! - Truncated to the requested number of files per language
//!
//! The data pipeline is:
//! 1. Raw Data (ScanResult)
//! 2. QuerySet (sorted, annotated, truncated)
//! 3. ReportTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::stats::{FileStats, ScanResult};

use super::options::Ordering;

/// Files listed per language unless configured otherwise.
pub const DEFAULT_TOP_FILES: usize = 10;

/// One file row within a language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileItem {
    /// Path relative to the repository root
    pub path: String,
    pub lines: u64,
    /// Share of the language total, 0-100
    pub percentage: f64,
}

/// One language row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageItem {
    pub language: String,
    pub lines: u64,
    /// Number of files of this language
    pub file_count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
    /// Top files (verbose scans only)
    pub files: Vec<FileItem>,
    /// Files left out by the top-N cut
    pub remaining_files: usize,
}

/// Query set for scan results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanQuerySet {
    /// Language rows (sorted)
    pub items: Vec<LanguageItem>,
    /// Sum of all counted lines
    pub total_lines: u64,
    /// Number of files analyzed
    pub file_count: usize,
    /// Whether per-file rows were requested
    pub verbose: bool,
}

impl ScanQuerySet {
    /// Create a QuerySet from a ScanResult.
    ///
    /// `top_files` caps the number of files listed per language; the rest
    /// are only counted in `remaining_files`.
    pub fn from_result(result: &ScanResult, ordering: Ordering, top_files: usize) -> Self {
        let mut languages: Vec<&_> = result.languages.iter().collect();
        ordering.sort(&mut languages, |l| (l.language.as_str(), l.lines));

        let items = languages
            .into_iter()
            .map(|lang| {
                let (files, remaining_files) = match result.files_for(&lang.language) {
                    Some(group) => build_file_items(&group.files, lang.lines, ordering, top_files),
                    None => (Vec::new(), 0),
                };
                LanguageItem {
                    language: lang.language.clone(),
                    lines: lang.lines,
                    file_count: lang.files,
                    percentage: percentage(lang.lines, result.total_lines),
                    files,
                    remaining_files,
                }
            })
            .collect();

        ScanQuerySet {
            items,
            total_lines: result.total_lines,
            file_count: result.file_count,
            verbose: result.files.is_some(),
        }
    }
}

fn build_file_items(
    files: &[FileStats],
    language_total: u64,
    ordering: Ordering,
    top_files: usize,
) -> (Vec<FileItem>, usize) {
    let mut sorted: Vec<&FileStats> = files.iter().collect();
    ordering.sort(&mut sorted, |f| (f.path.as_str(), f.lines));

    let remaining = sorted.len().saturating_sub(top_files);
    let items = sorted
        .into_iter()
        .take(top_files)
        .map(|f| FileItem {
            path: f.path.clone(),
            lines: f.lines,
            percentage: percentage(f.lines, language_total),
        })
        .collect();
    (items, remaining)
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
