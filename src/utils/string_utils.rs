//! UTF-8-safe text utilities for extracted page content
//!
//! Extracted text is arbitrary Unicode; naive byte slicing panics on
//! multi-byte characters, so all truncation here operates on character
//! boundaries.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace regex is valid");
}

/// Collapse all whitespace runs (spaces, tabs, newlines) into single spaces
/// and trim the ends.
///
/// Page `innerText` arrives full of layout artifacts: indentation, blank
/// lines between blocks, non-breaking spaces rendered as `\u{a0}`.
///
/// # Examples
/// ```
/// # use sitesnap::utils::string_utils::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  a\n\n  b\tc  "), "a b c");
/// assert_eq!(collapse_whitespace(""), "");
/// ```
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Respects UTF-8 character boundaries and will never panic, even with
/// multi-byte characters like emoji or box-drawing symbols.
///
/// # Examples
/// ```
/// # use sitesnap::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}
