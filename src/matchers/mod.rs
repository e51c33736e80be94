//! Three pure functions, tried in order by the processor, that locate a
//! SEARCH block in the original text starting at a cursor. Each returns a
//! half-open byte range `[start, end)`, never starting below `cursor`, and
//! none mutate their inputs or hold state across calls — the processor is
//! free to call them in whatever order the precedence ladder dictates.

mod block_anchor;
mod exact;
mod line_trimmed;

pub(crate) use block_anchor::block_anchor_match;
pub(crate) use exact::exact_match;
pub(crate) use line_trimmed::line_trimmed_match;
