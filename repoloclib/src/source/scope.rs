//! Scope resolution: which directories are walked and which files count.
//!
//! Two rule kinds decide whether a path is out of scope:
//!
//! - **Denylist**: well-known directory names (VCS metadata, dependency
//!   caches, virtual environments, build output) that are always pruned.
//! - **Exclusion rules**: user-supplied glob patterns matched against the
//!   path relative to the scan root, in POSIX form (`src/gen/api.py`).
//!
//! Both are folded into a single predicate, [`Scope::is_excluded_path`],
//! which the walker consults for directories and files alike.

use std::path::Path;

use glob::Pattern;

use crate::error::RepolocError;
use crate::Result;

use super::languages::LanguageMap;

/// Directory names that are never descended into.
const DENYLIST: &[&str] = &[
    ".git",
    "node_modules",
    "venv",
    "env",
    "__pycache__",
    "dist",
    "build",
];

/// Ordered set of glob patterns excluding paths from a scan.
///
/// Patterns use shell syntax (`*`, `?`, `[...]`). They are matched against
/// the whole relative path, so `*` also crosses `/`: `docs*` excludes
/// `docs/intro.py` as well as `docs_old.py`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    patterns: Vec<Pattern>,
}

impl ExclusionRules {
    /// Create an empty rule set (excludes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclusion pattern.
    ///
    /// Runs of `*` are collapsed to one, so `**` is an ordinary wildcard
    /// rather than a recursive-directory marker: `**/*.py` requires a `/`
    /// and `foo**` means `foo*`.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat =
            Pattern::new(&collapse_stars(pattern)).map_err(|e| RepolocError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        self.patterns.push(pat);
        Ok(self)
    }

    /// Add multiple exclusion patterns.
    pub fn exclude_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// True if any pattern matches the relative path.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(relative_path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The compiled patterns, with `*` runs collapsed.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.as_str()).collect()
    }
}

fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if ch == '*' && out.ends_with('*') {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Fixed set of directory names pruned from every scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryDenylist;

impl DirectoryDenylist {
    /// Exact name comparison; `build` denies `build/` but not `builder/`.
    pub fn contains(&self, name: &str) -> bool {
        DENYLIST.contains(&name)
    }

    pub fn names(&self) -> &'static [&'static str] {
        DENYLIST
    }
}

/// Kind of filesystem entry being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Scope of one scan: active languages plus exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    languages: LanguageMap,
    denylist: DirectoryDenylist,
    rules: ExclusionRules,
}

impl Scope {
    pub fn new(languages: LanguageMap, rules: ExclusionRules) -> Self {
        Self {
            languages,
            denylist: DirectoryDenylist,
            rules,
        }
    }

    pub fn languages(&self) -> &LanguageMap {
        &self.languages
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    /// The single "is this path out of scope" predicate.
    ///
    /// The denylist only applies to directory names; exclusion rules apply
    /// to both kinds.
    pub fn is_excluded_path(&self, kind: EntryKind, name: &str, relative_path: &str) -> bool {
        if kind == EntryKind::Directory && self.denylist.contains(name) {
            return true;
        }
        self.rules.matches(relative_path)
    }

    /// Check whether a directory should be pruned from traversal.
    pub fn is_dir_excluded(&self, name: &str, relative_path: &str) -> bool {
        self.is_excluded_path(EntryKind::Directory, name, relative_path)
    }

    /// Resolve the language of a file, or `None` if the file is out of scope.
    pub fn classify_file(&self, relative_path: &str) -> Option<&'static str> {
        let path = Path::new(relative_path);
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if self.is_excluded_path(EntryKind::File, name, relative_path) {
            return None;
        }
        self.languages.language_for(path)
    }
}

/// Render a path relative to `root` with `/` separators.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn relative_posix(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
