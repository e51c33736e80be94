use serde::{Deserialize, Serialize};

/// Tunable constants for the matching ladder. `EngineConfig::default()`
/// reproduces the values the engine has always used; the struct exists so
/// embedders (e.g. a bench harness exercising the large-file path against a
/// smaller corpus) can override them without patching constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Original-text length, in bytes, above which a [`crate::LineIndex`] is
    /// built to accelerate line-based matching. Below this, matchers fall
    /// back to direct scans.
    pub large_file_threshold: usize,

    /// Minimum search-block line count for `BlockAnchorMatch` to apply.
    pub block_anchor_min_lines: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            large_file_threshold: 1_048_576,
            block_anchor_min_lines: 3,
        }
    }
}
