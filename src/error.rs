use thiserror::Error;

/// The one fatal error the engine can produce. Malformed blocks are not an
/// error at this layer — they are recovered from silently (see the parser's
/// state machine) so that a single model glitch doesn't poison the rest of
/// the stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("no match found for search content:\n{search_content}")]
    NoMatch { search_content: String },
}
