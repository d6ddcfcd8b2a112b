//! Table-ready data structures for report output.
//!
//! This module provides `ReportTable`, a presentation-ready data structure
//! that can be directly consumed by templates or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw Data (ScanResult)
//! 2. QuerySet (sorted, annotated, truncated)
//! 3. ReportTable (formatted strings for display)
//!
//! ReportTable is a pure presentation layer - it only formats data, no
//! sorting or filtering. All computation happens in the QuerySet layer.

use serde::{Deserialize, Serialize};

use crate::query::queryset::{FileItem, LanguageItem, ScanQuerySet};

/// A file row nested under a language row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    /// Relative file path
    pub path: String,
    /// Formatted line count (e.g. "1,204")
    pub lines: String,
    /// Formatted share of the language total (e.g. "12.5%")
    pub percentage: String,
}

/// A single language row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Language label
    pub label: String,
    /// Formatted line count
    pub lines: String,
    /// Formatted share of the grand total
    pub percentage: String,
    /// Top files for this language (verbose only)
    pub files: Vec<FileRow>,
    /// "... and N more files" note, when files were cut
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_files: Option<String>,
}

/// Table-ready report data.
///
/// This is the final data structure before presentation. Templates
/// iterate over rows and apply layout - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// "Repository: owner/repo"
    pub title: String,
    /// Formatted grand total
    pub total_lines: String,
    /// Whether any line was counted; the breakdown is omitted otherwise
    pub has_lines: bool,
    /// Language rows, in display order
    pub rows: Vec<TableRow>,
    /// "Total (N files)"
    pub footer: String,
    /// Whether file rows were requested
    pub verbose: bool,
}

impl ReportTable {
    /// Create a ReportTable from a ScanQuerySet.
    pub fn from_queryset(qs: &ScanQuerySet, repo_name: &str) -> Self {
        ReportTable {
            title: format!("Repository: {}", repo_name),
            total_lines: format_thousands(qs.total_lines),
            has_lines: qs.total_lines > 0,
            rows: qs.items.iter().map(language_row).collect(),
            footer: format!("Total ({} files)", qs.file_count),
            verbose: qs.verbose,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn language_row(item: &LanguageItem) -> TableRow {
    TableRow {
        label: item.language.clone(),
        lines: format_thousands(item.lines),
        percentage: format_percentage(item.percentage),
        files: item.files.iter().map(file_row).collect(),
        more_files: (item.remaining_files > 0)
            .then(|| format!("... and {} more files", item.remaining_files)),
    }
}

fn file_row(item: &FileItem) -> FileRow {
    FileRow {
        path: item.path.clone(),
        lines: format_thousands(item.lines),
        percentage: format_percentage(item.percentage),
    }
}

/// Format a count with `,` thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage with one decimal.
pub fn format_percentage(p: f64) -> String {
    format!("{:.1}%", p)
}
