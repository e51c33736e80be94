//! Accelerates candidate discovery for line-based matching on large
//! originals.
//!
//! Below [`EngineConfig::large_file_threshold`](crate::EngineConfig), matchers
//! scan the text directly and this type is never constructed — the map-build
//! cost isn't worth it for small files. Above it, [`LineIndex::build`] does a
//! single pass that every matcher in the call then shares.

use std::collections::HashMap;

use crate::text::{build_lines, trim_ascii};

pub struct LineIndex<'a> {
    lines: Vec<&'a str>,
    line_offsets: Vec<usize>,
    content_to_positions: HashMap<&'a str, Vec<usize>>,
}

impl<'a> LineIndex<'a> {
    /// Single pass over `original`, splitting on `\n` and keying
    /// `content_to_positions` by the *trimmed* line content.
    pub fn build(original: &'a str) -> Self {
        let (lines, line_offsets) = build_lines(original);
        let mut content_to_positions: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (i, line) in lines.iter().enumerate() {
            content_to_positions.entry(trim_ascii(line)).or_default().push(i);
        }
        Self { lines, line_offsets, content_to_positions }
    }

    /// Line indices containing `trimmed_line`, in ascending order. Empty if
    /// absent.
    pub fn positions_of(&self, trimmed_line: &str) -> &[usize] {
        self.content_to_positions
            .get(trimmed_line)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Byte offset of line `i`'s first byte. `i == line_count()` is valid and
    /// returns `original.len()`.
    pub fn offset_of_line(&self, i: usize) -> usize {
        self.line_offsets[i]
    }

    /// Raw content of line `i` (no trailing newline).
    pub fn line_at(&self, i: usize) -> &'a str {
        self.lines[i]
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub(crate) fn line_offsets(&self) -> &[usize] {
        &self.line_offsets
    }

    /// Line indices `p >= min_line` such that `lines[p]` matches the first
    /// search line and, when there's more than one search line, `lines[p + k
    /// - 1]` matches the last. Used by the line-trimmed and block-anchor
    /// matchers to avoid a full linear scan over a large original.
    pub(crate) fn find_potential_starts(&self, search_lines: &[&str], min_line: usize) -> Vec<usize> {
        if search_lines.is_empty() {
            return Vec::new();
        }
        let k = search_lines.len();
        let n = self.lines.len();
        let first_trim = trim_ascii(search_lines[0]);
        let last_trim = trim_ascii(search_lines[k - 1]);

        self.positions_of(first_trim)
            .iter()
            .copied()
            .filter(|&p| p >= min_line)
            .filter(|&p| k == 1 || (p + k - 1 < n && trim_ascii(self.lines[p + k - 1]) == last_trim))
            .collect()
    }
}
