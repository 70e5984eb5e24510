// src/filtering/extension.rs

use crate::core_types::CandidateFile;
use std::collections::BTreeSet;

/// Splits off a filename's extension, including the leading dot.
///
/// The extension starts at the last `.`; leading dots are part of the name, so
/// dotfiles such as `.env` have no extension.
///
/// # Examples
///
/// ```
/// use projcat::filtering::split_extension;
///
/// assert_eq!(split_extension("main.py"), Some(".py"));
/// assert_eq!(split_extension("archive.tar.gz"), Some(".gz"));
/// assert_eq!(split_extension(".env"), None);
/// assert_eq!(split_extension(".eslintrc.json"), Some(".json"));
/// assert_eq!(split_extension("Makefile"), None);
/// ```
pub fn split_extension(name: &str) -> Option<&str> {
    let without_leading_dots = name.trim_start_matches('.');
    let offset = name.len() - without_leading_dots.len();
    without_leading_dots
        .rfind('.')
        .map(|idx| &name[offset + idx..])
}

/// Checks the candidate against the include set.
///
/// Passes if the lower-cased extension is in the set, or if the full filename is
/// (which is how extensionless names like `Dockerfile` are selected). Entries
/// of the set are compared as they are, so only lowercase extensions can match.
pub fn passes_extension_filter(candidate: &CandidateFile, extensions: &BTreeSet<String>) -> bool {
    let extension_matches = candidate
        .extension
        .as_deref()
        .is_some_and(|ext| extensions.contains(&ext.to_lowercase()));
    extension_matches || extensions.contains(&candidate.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidate(name: &str) -> CandidateFile {
        CandidateFile {
            absolute_path: PathBuf::from("/project").join(name),
            relative_path: name.to_string(),
            name: name.to_string(),
            extension: split_extension(name).map(str::to_string),
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_extension_edge_cases() {
        assert_eq!(split_extension("a."), Some("."));
        assert_eq!(split_extension("..hidden"), None);
        assert_eq!(split_extension("..a.b"), Some(".b"));
        assert_eq!(split_extension(""), None);
        assert_eq!(split_extension("..."), None);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let exts = set(&[".py"]);
        assert!(passes_extension_filter(&candidate("app.py"), &exts));
        assert!(passes_extension_filter(&candidate("APP.PY"), &exts));
        assert!(!passes_extension_filter(&candidate("app.pyc"), &exts));
    }

    #[test]
    fn test_uppercase_set_entries_never_match_extensions() {
        let exts = set(&[".PY"]);
        assert!(!passes_extension_filter(&candidate("app.PY"), &exts));
    }

    #[test]
    fn test_full_name_match() {
        let exts = set(&["Dockerfile", ".env"]);
        assert!(passes_extension_filter(&candidate("Dockerfile"), &exts));
        // Name comparison is exact.
        assert!(!passes_extension_filter(&candidate("dockerfile"), &exts));
        // A dotfile has no extension but matches by its full name.
        assert!(passes_extension_filter(&candidate(".env"), &exts));
        // "prod.env" matches through its extension.
        assert!(passes_extension_filter(&candidate("prod.env"), &exts));
    }

    #[test]
    fn test_no_extension_no_name_match() {
        let exts = set(&[".py"]);
        assert!(!passes_extension_filter(&candidate("Makefile"), &exts));
    }
}
