//! Extension to language mapping.
//!
//! Languages are attributed purely by file extension. The table is split in
//! two tiers: code extensions are always active, documentation extensions
//! only when the caller asks for them.

use std::path::Path;

/// Extensions that are always counted.
const CODE_TIER: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".jsx", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".html", "HTML"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".sass", "SASS"),
    (".java", "Java"),
    (".c", "C"),
    (".cpp", "C++"),
    (".cs", "C#"),
    (".go", "Go"),
    (".rb", "Ruby"),
    (".php", "PHP"),
    (".swift", "Swift"),
    (".kt", "Kotlin"),
    (".rs", "Rust"),
    (".sh", "Shell"),
    (".json", "JSON"),
    (".xml", "XML"),
    (".yml", "YAML"),
    (".yaml", "YAML"),
];

/// Extensions counted only when documentation is included.
const DOCS_TIER: &[(&str, &str)] = &[
    (".md", "Markdown"),
    (".rst", "reStructuredText"),
    (".txt", "Text"),
];

/// The active extension table for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageMap {
    include_docs: bool,
}

impl LanguageMap {
    /// Code tier only.
    pub fn code() -> Self {
        Self::default()
    }

    /// Code tier plus documentation tier.
    pub fn with_docs() -> Self {
        Self { include_docs: true }
    }

    /// Build the map for the given documentation setting.
    pub fn new(include_docs: bool) -> Self {
        Self { include_docs }
    }

    /// Whether the documentation tier is active.
    pub fn includes_docs(&self) -> bool {
        self.include_docs
    }

    /// Look up a language by extension, including the leading dot.
    ///
    /// Matching is exact and case-sensitive: `.PY` is not `.py`.
    pub fn lookup(&self, extension: &str) -> Option<&'static str> {
        self.entries()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, language)| language)
    }

    /// Resolve the language of a path from its extension.
    ///
    /// Files without an extension (including dotfiles such as `.bashrc`)
    /// never resolve.
    pub fn language_for(&self, path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?;
        self.lookup(&format!(".{ext}"))
    }

    /// Iterate over the active `(extension, language)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        let docs: &[(&str, &str)] = if self.include_docs { DOCS_TIER } else { &[] };
        CODE_TIER.iter().chain(docs.iter()).copied()
    }

    /// Whether `language` is a documentation-tier label.
    pub fn is_docs_language(language: &str) -> bool {
        DOCS_TIER.iter().any(|(_, l)| *l == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_tier_lookup() {
        let map = LanguageMap::code();
        assert_eq!(map.lookup(".py"), Some("Python"));
        assert_eq!(map.lookup(".tsx"), Some("TypeScript"));
        assert_eq!(map.lookup(".yaml"), Some("YAML"));
        assert_eq!(map.lookup(".md"), None);
    }

    #[test]
    fn test_docs_tier_only_with_docs() {
        assert_eq!(LanguageMap::code().lookup(".md"), None);
        assert_eq!(LanguageMap::with_docs().lookup(".md"), Some("Markdown"));
        assert_eq!(LanguageMap::with_docs().lookup(".py"), Some("Python"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = LanguageMap::code();
        assert_eq!(map.lookup(".PY"), None);
        assert_eq!(map.lookup("py"), None);
    }

    #[test]
    fn test_language_for_path() {
        let map = LanguageMap::code();
        assert_eq!(map.language_for(Path::new("src/app.py")), Some("Python"));
        assert_eq!(map.language_for(Path::new(".hidden.py")), Some("Python"));
        assert_eq!(map.language_for(Path::new("archive.tar.rs")), Some("Rust"));
        assert_eq!(map.language_for(Path::new("Makefile")), None);
        assert_eq!(map.language_for(Path::new(".bashrc")), None);
        assert_eq!(map.language_for(Path::new("file.")), None);
        assert_eq!(map.language_for(Path::new("data.xyz")), None);
    }

    #[test]
    fn test_tiers_are_disjoint_and_unique() {
        let mut seen = HashSet::new();
        for (ext, _) in CODE_TIER.iter().chain(DOCS_TIER.iter()) {
            assert!(seen.insert(*ext), "duplicate extension {ext}");
            assert!(ext.starts_with('.'));
        }
        for (_, language) in CODE_TIER {
            assert!(!LanguageMap::is_docs_language(language));
        }
    }
}
