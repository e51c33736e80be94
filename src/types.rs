/// A contiguous span touched by one applied block, expressed in *result*
/// coordinates. `start_line`/`end_line` are zero-based newline counts from
/// the start of the result to the respective offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRegion {
    pub start_line: usize,
    pub end_line: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Output of [`crate::apply_diff_chunk`]: the reconstructed content plus the
/// regions it touched during this call, ordered by `start_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChangeResult {
    pub content: String,
    pub changed_regions: Vec<ChangeRegion>,
}
