//! Code fence tracking for list-boundary normalization.
//!
//! Tracks whether we're inside a fenced code block so that lines which look
//! like list items inside code are left alone.

/// Tracks code fence state during line-by-line processing.
///
/// Any line whose trimmed content begins with three backticks or three tildes
/// toggles the state, regardless of the fence character that opened the block.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: bool,
}

impl FenceTracker {
    /// Create a new fence tracker.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open
    }

    /// Update fence state based on a line.
    ///
    /// Returns `true` if the line is a fence delimiter (opening or closing).
    pub(crate) fn update(&mut self, line: &str) -> bool {
        if is_fence_delimiter(line.trim()) {
            self.open = !self.open;
            return true;
        }
        false
    }
}

fn is_fence_delimiter(trimmed: &str) -> bool {
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}
