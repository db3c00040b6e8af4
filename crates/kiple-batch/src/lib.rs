//! kiple-batch: the sequential export pipeline.
//!
//! Orchestrates screen exports: an off-screen [`Stage`] mounts one
//! screen at a time, the rasterizer captures it, the filename
//! generator names it, and the archive packager collects it. Exports
//! run strictly one after another -- the run shares a single staging
//! surface, so interleaving two in-flight mounts could capture the
//! wrong screen's content.
//!
//! Per-item failures (unknown IDs, capture errors) are recorded in the
//! run's [`ExportSummary`] without aborting the batch; only archive
//! packaging failures are fatal.

pub mod export;
pub mod progress;
pub mod stage;

pub use export::{
    BatchArchive, BatchError, BatchOutcome, ExportConfig, ExportError, ExportFile, ExportSummary,
    export_batch, export_screen,
};
pub use progress::{ExportProgress, ProgressCallback};
pub use stage::{Mounted, SETTLE_DELAY, Stage, StageError, active_stage_count};
