//! Export progress reporting.

/// One progress notification emitted during a batch export.
///
/// Transient: emitted through the callback and never persisted. The
/// label is a human-readable string for status displays, not a stable
/// API.
#[derive(Debug, Clone)]
pub struct ExportProgress {
    /// 1-based index of the item being processed (equal to `total`
    /// during archive finalization).
    pub completed: usize,
    /// Total number of items in the batch.
    pub total: usize,
    /// Human-readable status line.
    pub label: String,
}

/// Progress callback for batch exports.
pub type ProgressCallback = Box<dyn Fn(ExportProgress) + Send>;
