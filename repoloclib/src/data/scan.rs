//! Directory scanning: walk a tree and aggregate line counts by language.
//!
//! The walk is depth-first with entries sorted by file name, so repeated
//! scans of the same tree visit files in the same order. Directories that
//! are out of scope are pruned before their contents are listed.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::RepolocError;
use crate::source::languages::LanguageMap;
use crate::source::scope::{relative_posix, ExclusionRules, Scope};
use crate::Result;

use super::counter::count_file_lines;
use super::stats::{ScanAccumulator, ScanResult};

/// Options for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Record per-file line counts
    pub verbose: bool,
    /// Count documentation-tier extensions (Markdown, reStructuredText, text)
    pub include_docs: bool,
    /// Glob patterns excluding paths relative to the root
    pub exclusions: ExclusionRules,
    /// Count files on the rayon thread pool
    pub parallel: bool,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include per-file statistics in results.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Include documentation file types.
    pub fn include_docs(mut self, include: bool) -> Self {
        self.include_docs = include;
        self
    }

    /// Set exclusion rules.
    pub fn exclusions(mut self, rules: ExclusionRules) -> Self {
        self.exclusions = rules;
        self
    }

    /// Count files in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn scope(&self) -> Scope {
        Scope::new(LanguageMap::new(self.include_docs), self.exclusions.clone())
    }
}

/// A file that passed scope checks and will be counted.
#[derive(Debug, Clone)]
struct Candidate {
    path: PathBuf,
    relative: String,
    language: &'static str,
}

/// Scan a directory tree.
///
/// Fails only if `root` is missing, not a directory, or cannot be listed.
/// Files that cannot be read are left out of the result.
///
/// # Example
///
/// ```rust,ignore
/// use repoloclib::{scan, ExclusionRules, ScanOptions};
///
/// let rules = ExclusionRules::new().exclude("vendor/*")?;
/// let result = scan(".", ScanOptions::new().verbose(true).exclusions(rules))?;
/// println!("{} lines", result.total_lines);
/// ```
pub fn scan(root: impl AsRef<Path>, options: ScanOptions) -> Result<ScanResult> {
    let root = root.as_ref();
    validate_root(root)?;

    let scope = options.scope();
    let mut acc = ScanAccumulator::new(options.verbose);
    let candidates = discover(root, &scope);

    if options.parallel {
        let candidates: Vec<Candidate> = candidates.collect();
        let counts: Vec<Option<u64>> = candidates.par_iter().map(read_count).collect();
        for (candidate, count) in candidates.iter().zip(counts) {
            if let Some(lines) = count {
                acc.record(candidate.language, &candidate.relative, lines);
            }
        }
    } else {
        for candidate in candidates {
            if let Some(lines) = read_count(&candidate) {
                acc.record(candidate.language, &candidate.relative, lines);
            }
        }
    }

    let result = acc.finish(root.to_path_buf());
    info!(
        "Scanned {}: {} files, {} lines, {} languages",
        root.display(),
        result.file_count,
        result.total_lines,
        result.languages.len()
    );
    Ok(result)
}

fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(RepolocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RepolocError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| RepolocError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Walk the tree and yield in-scope files in walk order.
fn discover<'a>(root: &'a Path, scope: &'a Scope) -> impl Iterator<Item = Candidate> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !is_pruned(e, root, scope))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir() && e.path().is_file())
        .filter_map(move |e| {
            let relative = relative_posix(e.path(), root);
            let language = scope.classify_file(&relative)?;
            Some(Candidate {
                path: e.into_path(),
                relative,
                language,
            })
        })
}

/// True for directories below the root that are out of scope.
fn is_pruned(entry: &DirEntry, root: &Path, scope: &Scope) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let relative = relative_posix(entry.path(), root);
    let pruned = scope.is_dir_excluded(&name, &relative);
    if pruned {
        debug!("Pruning directory {}", relative);
    }
    pruned
}

fn read_count(candidate: &Candidate) -> Option<u64> {
    match count_file_lines(&candidate.path) {
        Ok(lines) => Some(lines),
        Err(err) => {
            debug!("Skipping {}: {}", candidate.relative, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_lines(path: &Path, count: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let content: String = (0..count).map(|i| format!("line {}\n", i)).collect();
        fs::write(path, content).unwrap();
    }

    /// a.py (10), b.py (5), readme.md (3), node_modules/dep.js (100)
    fn create_sample_repo(root: &Path) {
        write_lines(&root.join("a.py"), 10);
        write_lines(&root.join("b.py"), 5);
        write_lines(&root.join("readme.md"), 3);
        write_lines(&root.join("node_modules/dep.js"), 100);
    }

    fn create_mixed_repo(root: &Path) {
        write_lines(&root.join("src/main.rs"), 40);
        write_lines(&root.join("src/util/mod.rs"), 12);
        write_lines(&root.join("src/gen/schema.rs"), 300);
        write_lines(&root.join("web/app.ts"), 25);
        write_lines(&root.join("web/view.tsx"), 15);
        write_lines(&root.join("scripts/deploy.sh"), 8);
        write_lines(&root.join("docs/guide.md"), 30);
        write_lines(&root.join("docs/notes.txt"), 4);
        write_lines(&root.join(".git/hooks/pre-commit.sh"), 50);
        write_lines(&root.join("build/out.js"), 500);
        write_lines(&root.join("venv/lib/site.py"), 70);
        write_lines(&root.join("data/blob.xyz"), 9);
        write_lines(&root.join("Makefile"), 6);
    }

    fn assert_totals_consistent(result: &ScanResult) {
        let sum: u64 = result.languages.iter().map(|l| l.lines).sum();
        assert_eq!(result.total_lines, sum);
        if let Some(files) = &result.files {
            for group in files {
                assert_eq!(result.lines_for(&group.language), Some(group.total()));
            }
        }
    }

    #[test]
    fn test_scan_default_options() {
        let temp = tempdir().unwrap();
        create_sample_repo(temp.path());

        let result = scan(temp.path(), ScanOptions::new()).unwrap();

        assert_eq!(result.languages.len(), 1);
        assert_eq!(result.lines_for("Python"), Some(15));
        assert_eq!(result.total_lines, 15);
        assert_eq!(result.lines_for("JavaScript"), None);
        assert_eq!(result.lines_for("Markdown"), None);
        assert!(result.files.is_none());
    }

    #[test]
    fn test_scan_with_docs() {
        let temp = tempdir().unwrap();
        create_sample_repo(temp.path());

        let result = scan(temp.path(), ScanOptions::new().include_docs(true)).unwrap();

        assert_eq!(result.languages.len(), 2);
        assert_eq!(result.lines_for("Python"), Some(15));
        assert_eq!(result.lines_for("Markdown"), Some(3));
        assert_eq!(result.total_lines, 18);
    }

    #[test]
    fn test_scan_excluding_all_python() {
        let temp = tempdir().unwrap();
        create_sample_repo(temp.path());

        let rules = ExclusionRules::new().exclude("*.py").unwrap();
        let result = scan(temp.path(), ScanOptions::new().exclusions(rules)).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total_lines, 0);
        assert_eq!(result.file_count, 0);
    }

    #[test]
    fn test_denylisted_directories_are_pruned() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        let result = scan(temp.path(), ScanOptions::new().verbose(true)).unwrap();

        // .git/, build/ and venv/ contribute nothing
        assert_eq!(result.lines_for("Shell"), Some(8));
        assert_eq!(result.lines_for("JavaScript"), None);
        assert_eq!(result.lines_for("Python"), None);
        assert_totals_consistent(&result);
    }

    #[test]
    fn test_unknown_extensions_never_counted() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        for docs in [false, true] {
            let result = scan(temp.path(), ScanOptions::new().include_docs(docs).verbose(true))
                .unwrap();
            let all_files: Vec<&str> = result
                .files
                .as_ref()
                .unwrap()
                .iter()
                .flat_map(|g| g.files.iter().map(|f| f.path.as_str()))
                .collect();
            assert!(!all_files.iter().any(|p| p.ends_with(".xyz")));
            assert!(!all_files.contains(&"Makefile"));
        }
    }

    #[test]
    fn test_verbose_breakdown_uses_relative_paths() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        let result = scan(temp.path(), ScanOptions::new().verbose(true)).unwrap();
        let rust = result.files_for("Rust").unwrap();

        assert_eq!(rust.get("src/main.rs"), Some(40));
        assert_eq!(rust.get("src/util/mod.rs"), Some(12));
        assert_eq!(rust.get("src/gen/schema.rs"), Some(300));
        // Walk order is lexicographic, depth-first
        let paths: Vec<&str> = rust.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["src/gen/schema.rs", "src/main.rs", "src/util/mod.rs"]
        );
        assert_totals_consistent(&result);
    }

    #[test]
    fn test_file_pattern_removes_only_that_file() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        let baseline = scan(temp.path(), ScanOptions::new()).unwrap();
        let rules = ExclusionRules::new().exclude("src/main.rs").unwrap();
        let result = scan(temp.path(), ScanOptions::new().exclusions(rules)).unwrap();

        assert_eq!(result.total_lines, baseline.total_lines - 40);
        assert_eq!(result.lines_for("Rust"), Some(312));
        assert_eq!(result.lines_for("TypeScript"), baseline.lines_for("TypeScript"));
    }

    #[test]
    fn test_directory_pattern_removes_subtree() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        let rules = ExclusionRules::new().exclude("src/gen").unwrap();
        let result = scan(temp.path(), ScanOptions::new().verbose(true).exclusions(rules))
            .unwrap();

        assert_eq!(result.lines_for("Rust"), Some(52));
        assert_eq!(result.files_for("Rust").unwrap().get("src/gen/schema.rs"), None);
        assert_totals_consistent(&result);
    }

    #[test]
    fn test_double_star_pattern_needs_a_separator() {
        let temp = tempdir().unwrap();
        write_lines(&temp.path().join("a.py"), 1);
        write_lines(&temp.path().join("s/b.py"), 2);

        let rules = ExclusionRules::new().exclude("**/*.py").unwrap();
        let result = scan(temp.path(), ScanOptions::new().exclusions(rules)).unwrap();

        assert_eq!(result.total_lines, 1);
        assert_eq!(result.file_count, 1);
    }

    #[test]
    fn test_include_docs_only_adds_docs_languages() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        let without = scan(temp.path(), ScanOptions::new()).unwrap();
        let with = scan(temp.path(), ScanOptions::new().include_docs(true)).unwrap();

        assert!(with.total_lines >= without.total_lines);
        for lang in &without.languages {
            assert_eq!(with.lines_for(&lang.language), Some(lang.lines));
        }
        for lang in &with.languages {
            if without.lines_for(&lang.language).is_none() {
                assert!(LanguageMap::is_docs_language(&lang.language));
            }
        }
        assert_eq!(with.lines_for("Markdown"), Some(30));
        assert_eq!(with.lines_for("Text"), Some(4));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());

        let options = ScanOptions::new().include_docs(true).verbose(true);
        let first = scan(temp.path(), options.clone()).unwrap();
        let second = scan(temp.path(), options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let temp = tempdir().unwrap();
        create_mixed_repo(temp.path());
        for i in 0..40 {
            write_lines(&temp.path().join(format!("pkg/m{:02}.py", i)), i % 7);
        }

        let options = ScanOptions::new().include_docs(true).verbose(true);
        let sequential = scan(temp.path(), options.clone()).unwrap();
        let parallel = scan(temp.path(), options.parallel(true)).unwrap();

        assert_eq!(sequential, parallel);
        assert_totals_consistent(&parallel);
    }

    #[test]
    fn test_hidden_files_are_not_special() {
        let temp = tempdir().unwrap();
        write_lines(&temp.path().join(".config.yml"), 4);
        write_lines(&temp.path().join(".bashrc"), 9);

        let result = scan(temp.path(), ScanOptions::new()).unwrap();
        assert_eq!(result.lines_for("YAML"), Some(4));
        assert_eq!(result.total_lines, 4);
    }

    #[test]
    fn test_invalid_utf8_file_is_counted() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("latin1.py"), b"# caf\xe9\nx = 1\n").unwrap();

        let result = scan(temp.path(), ScanOptions::new()).unwrap();
        assert_eq!(result.lines_for("Python"), Some(2));
    }

    #[test]
    fn test_root_named_like_denylist_is_scanned() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("build");
        write_lines(&root.join("main.go"), 3);

        let result = scan(&root, ScanOptions::new()).unwrap();
        assert_eq!(result.lines_for("Go"), Some(3));
    }

    #[test]
    fn test_scan_missing_root() {
        let result = scan("/nonexistent/path/for/repoloc", ScanOptions::new());
        assert!(matches!(result, Err(RepolocError::PathNotFound(_))));
    }

    #[test]
    fn test_scan_file_root() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.py");
        write_lines(&file, 1);

        let result = scan(&file, ScanOptions::new());
        assert!(matches!(result, Err(RepolocError::NotADirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        write_lines(&temp.path().join("ok.py"), 2);
        let locked = temp.path().join("locked.py");
        write_lines(&locked, 5);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the file; only assert the skip
        // when the permissions actually take effect.
        if fs::File::open(&locked).is_err() {
            let result = scan(temp.path(), ScanOptions::new().verbose(true)).unwrap();
            assert_eq!(result.lines_for("Python"), Some(2));
            assert_eq!(result.files_for("Python").unwrap().get("locked.py"), None);
        }
    }
}
