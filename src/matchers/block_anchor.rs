use crate::line_index::LineIndex;
use crate::text::{build_lines, find_start_line, trim_ascii};

/// First/last-line anchoring for blocks of at least `min_lines` search lines.
/// Deliberately ignores interior content drift — models reliably get the
/// first and last line of a block right even when they hallucinate the
/// middle.
pub(crate) fn block_anchor_match(
    original: &str,
    search: &str,
    cursor: usize,
    index: Option<&LineIndex>,
    min_lines: usize,
) -> Option<(usize, usize)> {
    let mut raw_lines: Vec<&str> = search.split('\n').collect();
    if raw_lines.last() == Some(&"") {
        raw_lines.pop();
    }
    let k = raw_lines.len();
    if k < min_lines {
        return None;
    }

    let anchor_first = trim_ascii(raw_lines[0]);
    let anchor_last = trim_ascii(raw_lines[k - 1]);

    match index {
        Some(idx) => match_indexed(idx, anchor_first, anchor_last, k, cursor),
        None => {
            let (lines, offsets) = build_lines(original);
            match_scan(&lines, &offsets, anchor_first, anchor_last, k, cursor)
        }
    }
}

fn match_scan(
    lines: &[&str],
    offsets: &[usize],
    anchor_first: &str,
    anchor_last: &str,
    k: usize,
    cursor: usize,
) -> Option<(usize, usize)> {
    let n = lines.len();
    let start_line = find_start_line(offsets, cursor);
    if start_line + k > n {
        return None;
    }
    for p in start_line..=n - k {
        if trim_ascii(lines[p]) == anchor_first && trim_ascii(lines[p + k - 1]) == anchor_last {
            return Some((offsets[p], offsets[p + k]));
        }
    }
    None
}

fn match_indexed(
    idx: &LineIndex,
    anchor_first: &str,
    anchor_last: &str,
    k: usize,
    cursor: usize,
) -> Option<(usize, usize)> {
    let n = idx.line_count();
    let start_line = find_start_line(idx.line_offsets(), cursor);
    if start_line + k > n {
        return None;
    }
    for &p in idx.positions_of(anchor_first) {
        if p < start_line || p + k > n {
            continue;
        }
        if trim_ascii(idx.line_at(p + k - 1)) == anchor_last {
            return Some((idx.offset_of_line(p), idx.offset_of_line(p + k)));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_interior_drift_with_matching_anchors() {
        // Same first/last line as the search block, but the model hallucinated
        // different content in between — anchoring still finds it.
        let original = "fn process() {\n    step_one();\n}\n";
        let search = "fn process() {\n    do_something_else();\n}\n";
        let (start, end) = block_anchor_match(original, search, 0, None, 3).unwrap();
        assert_eq!(&original[start..end], original);
    }

    #[test]
    fn requires_at_least_min_lines() {
        let original = "a\nb\nc\n";
        let search = "a\nb\n";
        assert!(block_anchor_match(original, search, 0, None, 3).is_none());
    }

    #[test]
    fn returns_none_without_matching_both_anchors() {
        let original = "start\nbody\nend\n";
        let search = "start\nbody\nmismatch\n";
        assert!(block_anchor_match(original, search, 0, None, 3).is_none());
    }

    #[test]
    fn indexed_and_scan_paths_agree() {
        let original = "fn process() {\n    step_one();\n    step_two();\n}\nfn other() {\n    x();\n}\n";
        let search = "fn other() {\n    z();\n}\n";
        let index = LineIndex::build(original);
        let direct = block_anchor_match(original, search, 0, None, 3).unwrap();
        let indexed = block_anchor_match(original, search, 0, Some(&index), 3).unwrap();
        assert_eq!(direct, indexed);
    }

    #[test]
    fn respects_cursor_for_repeated_anchors() {
        let original = "fn a() {\nbody\n}\nfn a() {\nother\n}\n";
        let search = "fn a() {\nanything\n}\n";
        // Cursor lands inside the first block, past its opening line, so
        // only the second occurrence can satisfy both anchors.
        let (start, _) = block_anchor_match(original, search, 9, None, 3).unwrap();
        assert_eq!(start, 16);
    }
}
