// src/filtering/exclusion.rs

use glob::Pattern;

/// Returns `true` if the filename matches any exclusion pattern.
///
/// Patterns use shell wildcards (`*`, `?`, `[seq]`, `[!seq]`) and are
/// case-sensitive. They are matched against the bare filename, never the path.
///
/// # Examples
///
/// ```
/// use glob::Pattern;
/// use projcat::filtering::matches_exclusion;
///
/// let patterns = vec![Pattern::new("*.min.js").unwrap(), Pattern::new(".DS_Store").unwrap()];
/// assert!(matches_exclusion("app.min.js", &patterns));
/// assert!(matches_exclusion(".DS_Store", &patterns));
/// assert!(!matches_exclusion("app.js", &patterns));
/// ```
pub fn matches_exclusion(name: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches(name))
}
