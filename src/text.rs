//! Small, allocation-free helpers shared by the line index, the matchers, and
//! the processor. Kept separate so none of those modules need to agree on a
//! particular line-splitting convention independently.

pub(crate) const SEARCH_MARKER: &str = "<<<<<<< SEARCH";
pub(crate) const SEP_MARKER: &str = "=======";
pub(crate) const REPLACE_MARKER: &str = ">>>>>>> REPLACE";

/// Strips leading/trailing ASCII whitespace (space, tab, CR, LF, FF, VT).
///
/// Deliberately narrower than `str::trim`, which strips any Unicode
/// whitespace — model-generated indentation drift is always plain ASCII.
pub(crate) fn trim_ascii(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0c' | '\x0b'))
}

/// Splits `original` into lines and their starting byte offsets.
///
/// `offsets` always has `lines.len() + 1` entries; `offsets[lines.len()]`
/// equals `original.len()`. The final line carries no trailing `\n` unless
/// `original` itself ends with one, matching the invariant that trailing-
/// newline presence is preserved rather than normalized away.
pub(crate) fn build_lines(original: &str) -> (Vec<&str>, Vec<usize>) {
    let bytes = original.as_bytes();
    let mut lines = Vec::new();
    let mut offsets = Vec::new();
    let mut start = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            offsets.push(start);
            lines.push(&original[start..i]);
            start = i + 1;
        }
    }
    if start < bytes.len() {
        offsets.push(start);
        lines.push(&original[start..]);
    }
    offsets.push(bytes.len());

    (lines, offsets)
}

/// First line index `p` such that `offsets[p] >= cursor`.
pub(crate) fn find_start_line(offsets: &[usize], cursor: usize) -> usize {
    offsets.binary_search(&cursor).unwrap_or_else(|insert_at| insert_at)
}

/// Counts `\n` bytes in `s`, used to keep a running result-side line count
/// without rescanning the whole result buffer per change region.
pub(crate) fn count_newlines(s: &str) -> usize {
    s.as_bytes().iter().filter(|&&b| b == b'\n').count()
}
