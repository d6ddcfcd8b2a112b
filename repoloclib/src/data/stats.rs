//! Core data structures for scan statistics.
//!
//! Results keep languages and files in the order they were first seen
//! during the walk. Reporting sorts by line count with a stable sort, so
//! that order is the tie-break.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Line total for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Language label (e.g. "Python").
    pub language: String,
    /// Lines across all files of this language.
    pub lines: u64,
    /// Number of files attributed to this language.
    pub files: usize,
}

/// Line count of a single file, keyed by its path relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// POSIX-style path relative to the scan root.
    pub path: String,
    pub lines: u64,
}

/// All files of one language, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFiles {
    pub language: String,
    pub files: Vec<FileStats>,
}

impl LanguageFiles {
    /// Sum of the file counts.
    pub fn total(&self) -> u64 {
        self.files.iter().map(|f| f.lines).sum()
    }

    /// Look up a file by relative path.
    pub fn get(&self, path: &str) -> Option<u64> {
        self.files.iter().find(|f| f.path == path).map(|f| f.lines)
    }
}

/// Result of scanning one directory tree.
///
/// An immutable snapshot: nothing is added after the walk completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directory that was scanned.
    pub root: PathBuf,
    /// Per-language totals in first-seen order.
    pub languages: Vec<LanguageStats>,
    /// Sum of all counted lines.
    pub total_lines: u64,
    /// Number of files that contributed.
    pub file_count: usize,
    /// Per-language, per-file breakdown (verbose scans only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<LanguageFiles>>,
}

impl ScanResult {
    /// Line total for a language, if it was seen.
    pub fn lines_for(&self, language: &str) -> Option<u64> {
        self.languages
            .iter()
            .find(|l| l.language == language)
            .map(|l| l.lines)
    }

    /// File breakdown for a language (verbose scans only).
    pub fn files_for(&self, language: &str) -> Option<&LanguageFiles> {
        self.files
            .as_ref()?
            .iter()
            .find(|f| f.language == language)
    }

    /// Languages sorted by line count, largest first; ties keep walk order.
    pub fn sorted_languages(&self) -> Vec<&LanguageStats> {
        let mut sorted: Vec<&LanguageStats> = self.languages.iter().collect();
        sorted.sort_by(|a, b| b.lines.cmp(&a.lines));
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Accumulates counts during a single walk.
///
/// Counts only ever grow. `total_lines` is updated in the same step as the
/// language total, so it always equals their sum.
#[derive(Debug, Default)]
pub struct ScanAccumulator {
    verbose: bool,
    languages: Vec<LanguageStats>,
    files: Vec<LanguageFiles>,
    total_lines: u64,
    file_count: usize,
}

impl ScanAccumulator {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Record one counted file.
    pub fn record(&mut self, language: &str, relative_path: &str, lines: u64) {
        match self.languages.iter_mut().find(|l| l.language == language) {
            Some(stats) => {
                stats.lines += lines;
                stats.files += 1;
            }
            None => self.languages.push(LanguageStats {
                language: language.to_string(),
                lines,
                files: 1,
            }),
        }
        self.total_lines += lines;
        self.file_count += 1;

        if self.verbose {
            let entry = FileStats {
                path: relative_path.to_string(),
                lines,
            };
            match self.files.iter_mut().find(|f| f.language == language) {
                Some(group) => group.files.push(entry),
                None => self.files.push(LanguageFiles {
                    language: language.to_string(),
                    files: vec![entry],
                }),
            }
        }
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// Freeze the accumulated counts into a result.
    pub fn finish(self, root: PathBuf) -> ScanResult {
        ScanResult {
            root,
            languages: self.languages,
            total_lines: self.total_lines,
            file_count: self.file_count,
            files: self.verbose.then_some(self.files),
        }
    }
}
