use crate::text::{REPLACE_MARKER, SEARCH_MARKER, SEP_MARKER};

/// Recognises the three marker lines and accumulates a block's search body,
/// one line at a time. Replace-body lines are not buffered here — the
/// processor streams them straight into the result builder as they arrive,
/// per the incremental-output contract, so this type only needs to track
/// enough state to know whether a line belongs to a search body.
pub(crate) struct BlockParser {
    state: State,
    search_buf: Vec<String>,
}

enum State {
    Idle,
    InSearch,
    InReplace,
}

/// What happened as a result of feeding one line to the parser.
pub(crate) enum LineEvent {
    /// Pre-block noise, or a line buffered into the current search body.
    Noop,
    /// `=======` seen; search content finalized per the join rule (empty
    /// search buffer maps to the empty string, not `"\n"`).
    SearchReady(String),
    /// A replace-body line, to be appended (plus `\n`) if a match is active.
    ReplaceLine(String),
    /// `>>>>>>> REPLACE` seen; the processor should commit its pending block.
    BlockClosed,
    /// The current block was malformed and must be discarded. The processor
    /// clears any pending match/replacement bookkeeping; it must not commit
    /// a change region for it.
    Abandoned,
}

impl BlockParser {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Idle,
            search_buf: Vec::new(),
        }
    }

    pub(crate) fn feed_line(&mut self, line: &str) -> LineEvent {
        match self.state {
            State::Idle => {
                if line == SEARCH_MARKER {
                    self.search_buf.clear();
                    self.state = State::InSearch;
                }
                LineEvent::Noop
            }
            State::InSearch => {
                if line == SEP_MARKER {
                    let content = if self.search_buf.is_empty() {
                        String::new()
                    } else {
                        format!("{}\n", self.search_buf.join("\n"))
                    };
                    self.state = State::InReplace;
                    LineEvent::SearchReady(content)
                } else if line == SEARCH_MARKER {
                    tracing::warn!("SEARCH marker re-opened mid-search body; discarding partial block");
                    self.search_buf.clear();
                    LineEvent::Abandoned
                } else if line == REPLACE_MARKER {
                    tracing::warn!("REPLACE marker seen before a ======= separator; discarding malformed block");
                    self.search_buf.clear();
                    self.state = State::Idle;
                    LineEvent::Abandoned
                } else {
                    self.search_buf.push(line.to_string());
                    LineEvent::Noop
                }
            }
            State::InReplace => {
                if line == REPLACE_MARKER {
                    self.state = State::Idle;
                    LineEvent::BlockClosed
                } else if line == SEARCH_MARKER {
                    tracing::warn!("SEARCH marker re-opened mid-replace body; discarding partial block");
                    self.search_buf.clear();
                    self.state = State::InSearch;
                    LineEvent::Abandoned
                } else if line == SEP_MARKER {
                    tracing::warn!("unexpected ======= while already composing a replace body; discarding block");
                    LineEvent::Abandoned
                } else {
                    LineEvent::ReplaceLine(line.to_string())
                }
            }
        }
    }
}
