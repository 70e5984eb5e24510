// src/filtering/decode.rs

//! Best-effort text decoding.
//!
//! Files are read as UTF-8 and any byte sequence that is not valid UTF-8 is
//! dropped, never replaced. Line endings are then translated the way text-mode
//! readers do: `\r\n` and a lone `\r` both become `\n`.

use std::{fs, io, path::Path};

/// Decodes bytes as UTF-8, silently dropping invalid sequences.
///
/// # Examples
/// ```
/// use projcat::filtering::decode_ignoring_invalid;
///
/// assert_eq!(decode_ignoring_invalid(b"caf\xc3\xa9"), "café");
/// assert_eq!(decode_ignoring_invalid(b"Hell\x80o"), "Hello");
/// assert_eq!(decode_ignoring_invalid(&[0xff, 0xfe, 0xfd]), "");
/// ```
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Translates `\r\n` and `\r` line endings to `\n`.
///
/// # Examples
/// ```
/// use projcat::filtering::translate_newlines;
///
/// assert_eq!(translate_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
/// ```
pub fn translate_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns `true` if the text has no visible content.
///
/// Blank means only whitespace, which here also covers the information
/// separators U+001C to U+001F.
///
/// # Examples
/// ```
/// use projcat::filtering::is_blank;
///
/// assert!(is_blank(" \t\r\n"));
/// assert!(is_blank("\u{1c}\u{1d}\n"));
/// assert!(!is_blank("  x  "));
/// ```
pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Reads a whole file as text.
///
/// # Errors
/// Propagates the read error unchanged. The filter chain maps
/// `ErrorKind::InvalidData` to a decode error and everything else to a read error.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(translate_newlines(decode_ignoring_invalid(&bytes)))
}
