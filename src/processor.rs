use crate::config::EngineConfig;
use crate::error::DiffError;
use crate::line_index::LineIndex;
use crate::matchers::{block_anchor_match, exact_match, line_trimmed_match};
use crate::parser::{BlockParser, LineEvent};
use crate::text::{count_newlines, REPLACE_MARKER, SEARCH_MARKER, SEP_MARKER};
use crate::types::{ChangeRegion, FileChangeResult};

/// Applies one diff chunk to `original`, using the engine's default tuning.
/// See [`crate::DiffApplier`] for a reusable wrapper around a custom
/// [`EngineConfig`].
///
/// `diff` is the *cumulative* diff text seen so far for this file (not just
/// the newly-arrived bytes), and `original` never changes between calls on
/// the same file — this function is a pure, stateless replay: calling it
/// again with a longer `diff` re-derives the whole result from scratch. This
/// is what lets a caller show a live, monotonically-converging preview while
/// a model is still streaming, and why there is no persistent session state
/// here for the caller to manage.
pub fn apply_diff_chunk(
    diff: &str,
    original: &str,
    is_final: bool,
) -> Result<FileChangeResult, DiffError> {
    apply_diff_chunk_with_config(diff, original, is_final, &EngineConfig::default())
}

pub(crate) fn apply_diff_chunk_with_config(
    diff: &str,
    original: &str,
    is_final: bool,
    config: &EngineConfig,
) -> Result<FileChangeResult, DiffError> {
    if is_final && !diff.contains(SEARCH_MARKER) {
        return Ok(FileChangeResult {
            content: original.to_string(),
            changed_regions: Vec::new(),
        });
    }

    let diff = strip_partial_trailing_marker(diff);

    let index = if original.len() > config.large_file_threshold {
        tracing::trace!(len = original.len(), "building line index for large original");
        Some(LineIndex::build(original))
    } else {
        None
    };

    let mut parser = BlockParser::new();
    let mut result = String::new();
    let mut cursor = 0usize;
    let mut changed_regions = Vec::new();
    let mut pending: Option<PendingBlock> = None;

    for line in split_diff_lines(diff) {
        match parser.feed_line(line) {
            LineEvent::Noop => {}
            LineEvent::SearchReady(search_content) => {
                let (match_start, match_end) =
                    resolve_match(original, &search_content, cursor, index.as_ref(), config)?;
                result.push_str(&original[cursor..match_start]);
                pending = Some(PendingBlock {
                    match_end,
                    replacement_start: result.len(),
                });
            }
            LineEvent::ReplaceLine(replace_line) => {
                if pending.is_some() {
                    result.push_str(&replace_line);
                    result.push('\n');
                }
            }
            LineEvent::BlockClosed => {
                if let Some(block) = pending.take() {
                    let start_line = count_newlines(&result[..block.replacement_start]);
                    let end_line = count_newlines(&result[..]);
                    changed_regions.push(ChangeRegion {
                        start_line,
                        end_line,
                        start_offset: block.replacement_start,
                        end_offset: result.len(),
                    });
                    cursor = block.match_end;
                }
            }
            LineEvent::Abandoned => {
                pending = None;
            }
        }
    }

    if is_final {
        result.push_str(&original[cursor..]);
    }

    Ok(FileChangeResult {
        content: result,
        changed_regions,
    })
}

struct PendingBlock {
    match_end: usize,
    replacement_start: usize,
}

/// Exact → line-trimmed → block-anchor, in that order; the first hit wins.
/// Empty search content is special-cased: it means "replace the whole file"
/// (or, against an empty original, "insert this as the new file").
fn resolve_match(
    original: &str,
    search_content: &str,
    cursor: usize,
    index: Option<&LineIndex>,
    config: &EngineConfig,
) -> Result<(usize, usize), DiffError> {
    if search_content.is_empty() {
        return Ok(if original.is_empty() {
            (0, 0)
        } else {
            (0, original.len())
        });
    }

    if let Some(range) = exact_match(original, search_content, cursor) {
        return Ok(range);
    }
    tracing::debug!("exact match failed, falling back to line-trimmed match");
    if let Some(range) = line_trimmed_match(original, search_content, cursor, index) {
        return Ok(range);
    }
    tracing::debug!("line-trimmed match failed, falling back to block-anchor match");
    if let Some(range) = block_anchor_match(original, search_content, cursor, index, config.block_anchor_min_lines) {
        return Ok(range);
    }

    let reported = search_content.strip_suffix('\n').unwrap_or(search_content).to_string();
    tracing::warn!(search_content = %reported, "no matcher located the search block");
    Err(DiffError::NoMatch { search_content: reported })
}

/// Splits `diff` into lines without a trailing empty element when `diff`
/// ends in `\n`. Unlike [`crate::text::build_lines`], a final fragment with
/// no trailing newline is still returned as a line — an in-flight diff chunk
/// legitimately ends mid-line, and re-parsing the next (longer) cumulative
/// chunk from scratch corrects it naturally.
fn split_diff_lines(diff: &str) -> Vec<&str> {
    if diff.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = diff.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Drops a final, unterminated line that merely looks like the start of a
/// marker (`<`, `=`, `>`) but isn't one of the three exact marker strings —
/// it may be the first bytes of a marker still arriving. Only the last line
/// is ever special-cased this way; an identical prefix earlier in the chunk
/// is ordinary content (HTML, shell redirection, a conflict marker inside
/// the file being edited).
fn strip_partial_trailing_marker(diff: &str) -> &str {
    if diff.is_empty() || diff.ends_with('\n') {
        return diff;
    }
    let last_line = diff.rsplit('\n').next().unwrap_or(diff);
    if is_partial_marker_like(last_line) {
        &diff[..diff.len() - last_line.len()]
    } else {
        diff
    }
}

fn is_partial_marker_like(line: &str) -> bool {
    let starts_marker_like = matches!(line.as_bytes().first(), Some(b'<') | Some(b'=') | Some(b'>'));
    starts_marker_like && line != SEARCH_MARKER && line != SEP_MARKER && line != REPLACE_MARKER
}
