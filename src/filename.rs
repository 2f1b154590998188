//! Output file naming derived from the book title.

use crate::error::ConvertError;
use std::path::{Path, PathBuf};

/// Turn a title into a lowercase, hyphenated file name stem.
///
/// Applied in order: lowercase, whitespace runs to `-`, drop everything
/// outside `[a-z0-9-]`, collapse repeated `-`, trim. The result only ever
/// contains `[a-z0-9-]` and sanitizing it again changes nothing.
///
/// ```text
/// "My Book: Vol. 2!"  -> "my-book-vol-2"
/// "???"               -> ""
/// ```
pub fn sanitize(title: &str) -> String {
    let lowered = title.to_lowercase();

    let mut hyphenated = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                hyphenated.push('-');
            }
            in_whitespace = true;
        } else {
            hyphenated.push(c);
            in_whitespace = false;
        }
    }

    let mut stem = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars() {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            continue;
        }
        if c == '-' && stem.ends_with('-') {
            continue;
        }
        stem.push(c);
    }

    stem.trim().to_string()
}

/// `<input dir>/<sanitized title>.epub`.
///
/// A title with nothing usable in it is rejected rather than producing a
/// bare `.epub`.
pub fn output_path(input: &Path, title: &str) -> Result<PathBuf, ConvertError> {
    let stem = sanitize(title);
    if stem.is_empty() {
        return Err(ConvertError::EmptyFilename(title.to_string()));
    }

    Ok(input.with_file_name(format!("{}.epub", stem)))
}
