use crate::line_index::LineIndex;
use crate::text::{build_lines, find_start_line, trim_ascii};

/// Line-by-line, whitespace-insensitive match: drops a trailing empty search
/// line (the processor always appends one trailing `\n` to search content),
/// then looks for the first candidate at or after `cursor` whose trimmed
/// lines equal the trimmed search lines.
pub(crate) fn line_trimmed_match(
    original: &str,
    search: &str,
    cursor: usize,
    index: Option<&LineIndex>,
) -> Option<(usize, usize)> {
    let mut raw_lines: Vec<&str> = search.split('\n').collect();
    if raw_lines.last() == Some(&"") {
        raw_lines.pop();
    }
    if raw_lines.is_empty() {
        return None;
    }

    match index {
        Some(idx) => core_match(idx.lines(), idx.line_offsets(), Some(idx), &raw_lines, cursor),
        None => {
            let (lines, offsets) = build_lines(original);
            core_match(&lines, &offsets, None, &raw_lines, cursor)
        }
    }
}

fn core_match(
    lines: &[&str],
    offsets: &[usize],
    index: Option<&LineIndex>,
    search_lines: &[&str],
    cursor: usize,
) -> Option<(usize, usize)> {
    let k = search_lines.len();
    let n = lines.len();
    if k == 0 || k > n {
        return None;
    }

    let start_line = find_start_line(offsets, cursor);
    if start_line + k > n {
        return None;
    }

    let candidates: Vec<usize> = match index {
        Some(idx) => idx.find_potential_starts(search_lines, start_line),
        None => (start_line..=n - k).collect(),
    };

    let trimmed_search: Vec<&str> = search_lines.iter().map(|l| trim_ascii(l)).collect();
    for p in candidates {
        if p + k > n {
            continue;
        }
        let matches = (0..k).all(|j| trim_ascii(lines[p + j]) == trimmed_search[j]);
        if matches {
            return Some((offsets[p], offsets[p + k]));
        }
    }

    None
}
