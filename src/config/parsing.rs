// src/config/parsing.rs

use crate::constants::{BARE_EXTENSION_MAX_LEN, BYTES_PER_MB};
use glob::Pattern;
use std::collections::BTreeSet;

/// Normalizes user-supplied extension tokens into the include set.
///
/// - Tokens containing a `.` are kept as they are (`.py`, `.tar.gz`).
/// - Tokens containing a path separator or a wildcard (`*`, `?`, `[`) are kept
///   as literal names.
/// - Short lowercase tokens (`py`, `rs`, `yaml`) get a leading dot.
/// - Anything else (`Dockerfile`, `Makefile`, `license`) is a literal filename.
///
/// Empty tokens are dropped and the result is de-duplicated.
///
/// # Examples
///
/// ```
/// use projcat::config::normalize_extensions;
///
/// let set = normalize_extensions(["py", ".rs", "Dockerfile", "py", ""].map(String::from));
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(".py"));
/// assert!(set.contains(".rs"));
/// assert!(set.contains("Dockerfile"));
/// ```
pub fn normalize_extensions<I>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(normalize_token)
        .collect()
}

fn normalize_token(token: String) -> String {
    if token.contains('.') || looks_like_path_or_pattern(&token) {
        return token;
    }
    if is_lowercase_word(&token) && token.chars().count() < BARE_EXTENSION_MAX_LEN {
        format!(".{token}")
    } else {
        token
    }
}

fn looks_like_path_or_pattern(token: &str) -> bool {
    token.contains('/')
        || token.contains(std::path::MAIN_SEPARATOR)
        || token.contains(['*', '?', '['])
}

/// At least one cased character and no uppercase ones ("py", "mp3"; not "123" or "Py").
fn is_lowercase_word(token: &str) -> bool {
    token.chars().any(char::is_lowercase) && !token.chars().any(char::is_uppercase)
}

/// Compiles the exclusion patterns with shell wildcard semantics.
///
/// Runs of `*` act as a single `*`, and a `[` without a closing `]` matches a
/// literal `[`; every other wildcard in the pattern keeps its meaning. A pattern
/// the matcher still rejects is matched literally, with a warning.
pub(super) fn compile_exclusion_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(&to_glob_syntax(p)) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!(
                    "Invalid exclude pattern '{}' ({}), matching it literally.",
                    p,
                    e
                );
                Pattern::new(&Pattern::escape(p)).ok()
            }
        })
        .collect()
}

/// Rewrites a shell pattern into the subset of syntax `glob::Pattern` accepts.
fn to_glob_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match bracket_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing the bracket expression opened at `start`.
///
/// A `]` right after `[` or `[!` belongs to the set rather than closing it.
fn bracket_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars
        .get(j..)?
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Converts the megabyte ceiling into whole bytes.
///
/// Sizes are integers, so `size > mb * 2^20` holds exactly when
/// `size > floor(mb * 2^20)`.
pub(super) fn max_size_in_bytes(mb: f64) -> u64 {
    (mb * BYTES_PER_MB).floor() as u64
}
