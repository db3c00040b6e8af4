//! Batch export orchestration.
//!
//! Drives the stage, rasterizer, filename generator, and archive
//! packager over an ordered list of screen IDs: strictly sequential,
//! one shared stage per run, per-item failures recorded without
//! aborting the batch. Only archive failures are fatal.

use chrono::Local;

use kiple_export::{
    ArchiveBuilder, ArchiveError, ExportScope, RasterError, RasterFormat, RasterOptions,
    archive_filename, image_filename, rasterize,
};
use kiple_screens::{DeviceType, FrameOptions, ScreenConfig};

use crate::progress::{ExportProgress, ProgressCallback};
use crate::stage::{Stage, StageError};

/// Export settings for one run, supplied by the caller per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportConfig {
    /// Output encoding.
    pub format: RasterFormat,
    /// Output resolution relative to logical pixels.
    pub pixel_ratio: f32,
    /// JPEG quality factor in `(0, 1]`; ignored for PNG.
    pub jpeg_quality: f32,
    /// Whether to wrap each screen in a device frame.
    pub include_device_frame: bool,
    /// Device style when the frame is enabled.
    pub device: DeviceType,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: RasterFormat::default(),
            pixel_ratio: kiple_export::DEFAULT_PIXEL_RATIO,
            jpeg_quality: kiple_export::DEFAULT_JPEG_QUALITY,
            include_device_frame: false,
            device: DeviceType::default(),
        }
    }
}

impl ExportConfig {
    /// Capture options for the rasterizer.
    #[must_use]
    pub const fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            format: self.format,
            pixel_ratio: self.pixel_ratio,
            jpeg_quality: self.jpeg_quality,
        }
    }

    /// Frame options for the stage.
    #[must_use]
    pub const fn frame_options(&self) -> FrameOptions {
        FrameOptions {
            show: self.include_device_frame,
            device: self.device,
        }
    }
}

/// One exported screen image, ready for a save-as-file action.
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// The screen the image came from.
    pub screen_id: String,
    /// Deterministic output filename.
    pub filename: String,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}

/// Per-item results of a batch run, in input order within each list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Screens captured and packaged.
    pub succeeded: Vec<String>,
    /// Screens whose IDs did not resolve.
    pub skipped: Vec<String>,
    /// Screens whose capture failed.
    pub failed: Vec<String>,
}

/// A finalized batch archive.
#[derive(Debug, Clone)]
pub struct BatchArchive {
    /// Deterministic archive filename.
    pub filename: String,
    /// Compressed archive bytes.
    pub bytes: Vec<u8>,
    /// Per-item results.
    pub summary: ExportSummary,
}

/// Outcome of a batch export request.
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// The request named zero screens; nothing was staged or archived.
    EmptySelection,
    /// The archive was produced.
    Archive(BatchArchive),
}

/// Errors from the single-screen export path.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The requested screen ID does not exist.
    #[error("unknown screen id: {0}")]
    UnknownScreen(String),

    /// Capturing the screen failed.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

impl From<StageError> for ExportError {
    fn from(error: StageError) -> Self {
        match error {
            StageError::Render(e) => Self::Raster(RasterError::Render(e)),
        }
    }
}

/// Errors that abort a batch export.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Every item was skipped or failed; no archive was produced.
    #[error("no screens could be exported")]
    NothingExported {
        /// What happened to each requested item.
        summary: ExportSummary,
    },

    /// Archive packaging failed; no partial archive is emitted.
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

fn emit(progress: Option<&ProgressCallback>, notification: ExportProgress) {
    if let Some(callback) = progress {
        callback(notification);
    }
}

/// Export a single screen and return its `{filename, bytes}` pair.
///
/// This is the "current screen" path; unlike the batch loop, an
/// unknown ID here is a hard error.
///
/// # Errors
///
/// Returns [`ExportError::UnknownScreen`] for an unresolvable ID and
/// [`ExportError::Raster`] when capture fails.
pub async fn export_screen(
    screen_id: &str,
    screen_config: &ScreenConfig,
    export_config: &ExportConfig,
) -> Result<ExportFile, ExportError> {
    let stage = Stage::new();
    let mounted = stage
        .mount(screen_id, screen_config, export_config.frame_options())
        .await?
        .ok_or_else(|| ExportError::UnknownScreen(screen_id.to_string()))?;

    let bytes = rasterize(mounted.scene(), &export_config.raster_options())?;
    let filename = image_filename(screen_id, Local::now().date_naive(), export_config.format);
    tracing::info!(screen_id, filename, size = bytes.len(), "screen exported");

    Ok(ExportFile {
        screen_id: screen_id.to_string(),
        filename,
        bytes,
    })
}

/// Export an ordered list of screens into one ZIP archive.
///
/// Screens are processed strictly in list order, one at a time: the
/// run shares a single stage, and each screen is unmounted right after
/// capture. Unknown IDs are skipped and capture failures recorded; both
/// leave the batch running. Progress fires before each item and once
/// more before archive finalization.
///
/// An empty list returns [`BatchOutcome::EmptySelection`] immediately
/// without staging anything.
///
/// # Errors
///
/// Returns [`BatchError::NothingExported`] when a non-empty request
/// produced zero images, and [`BatchError::Archive`] when packaging
/// fails. The stage is detached on every path.
pub async fn export_batch(
    screen_ids: &[impl AsRef<str>],
    screen_config: &ScreenConfig,
    export_config: &ExportConfig,
    scope: ExportScope,
    progress: Option<ProgressCallback>,
) -> Result<BatchOutcome, BatchError> {
    if screen_ids.is_empty() {
        tracing::info!("empty selection, nothing to export");
        return Ok(BatchOutcome::EmptySelection);
    }

    let total = screen_ids.len();
    let date = Local::now().date_naive();
    tracing::info!(total, format = ?export_config.format, "starting batch export");

    // One stage for the whole run; detached on drop, even on the error
    // paths below.
    let stage = Stage::new();
    let mut builder = ArchiveBuilder::new();
    let mut summary = ExportSummary::default();

    for (index, screen_id) in screen_ids.iter().enumerate() {
        let screen_id = screen_id.as_ref();
        emit(
            progress.as_ref(),
            ExportProgress {
                completed: index + 1,
                total,
                label: format!("Exporting {} of {total}: {screen_id}...", index + 1),
            },
        );

        let mounted = match stage
            .mount(screen_id, screen_config, export_config.frame_options())
            .await
        {
            Ok(Some(mounted)) => mounted,
            Ok(None) => {
                summary.skipped.push(screen_id.to_string());
                continue;
            }
            Err(error) => {
                tracing::warn!(screen_id, error = %error, "mount failed");
                summary.failed.push(screen_id.to_string());
                continue;
            }
        };

        match rasterize(mounted.scene(), &export_config.raster_options()) {
            Ok(bytes) => {
                let filename = image_filename(screen_id, date, export_config.format);
                builder.add_image(&filename, &bytes)?;
                summary.succeeded.push(screen_id.to_string());
            }
            Err(error) => {
                tracing::warn!(screen_id, error = %error, "capture failed");
                summary.failed.push(screen_id.to_string());
            }
        }
        // The mounted screen is dropped here, unmounting it before the
        // next iteration.
    }

    emit(
        progress.as_ref(),
        ExportProgress {
            completed: total,
            total,
            label: "Creating archive...".to_string(),
        },
    );

    if summary.succeeded.is_empty() {
        tracing::warn!(
            skipped = summary.skipped.len(),
            failed = summary.failed.len(),
            "batch produced no images",
        );
        return Err(BatchError::NothingExported { summary });
    }

    let bytes = builder.finish()?;
    tracing::info!(
        succeeded = summary.succeeded.len(),
        skipped = summary.skipped.len(),
        failed = summary.failed.len(),
        size = bytes.len(),
        "batch export complete",
    );

    Ok(BatchOutcome::Archive(BatchArchive {
        filename: archive_filename(scope, date),
        bytes,
        summary,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn collecting_progress() -> (ProgressCallback, Arc<Mutex<Vec<ExportProgress>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: ProgressCallback = Box::new(move |notification| {
            sink.lock().unwrap().push(notification);
        });
        (callback, seen)
    }

    fn archive_entry_names(bytes: &[u8]) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn empty_selection_is_a_no_op() {
        let outcome = export_batch(
            &[] as &[&str],
            &ScreenConfig::default(),
            &ExportConfig::default(),
            ExportScope::Selected,
            None,
        )
        .await
        .unwrap();
        assert!(matches!(outcome, BatchOutcome::EmptySelection));
    }

    #[tokio::test(start_paused = true)]
    async fn all_valid_ids_produce_one_entry_each() {
        let outcome = export_batch(
            &["splash", "home", "login"],
            &ScreenConfig::default(),
            &ExportConfig {
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
            ExportScope::Selected,
            None,
        )
        .await
        .unwrap();

        let BatchOutcome::Archive(archive) = outcome else {
            panic!("expected an archive outcome");
        };
        assert_eq!(archive_entry_names(&archive.bytes).len(), 3);
        assert_eq!(archive.summary.succeeded, vec!["splash", "home", "login"]);
        assert!(archive.summary.skipped.is_empty());
        assert!(archive.summary.failed.is_empty());
        assert!(archive.filename.starts_with("kiple-screens-"));
        assert!(archive.filename.ends_with(".zip"));
    }

    #[tokio::test(start_paused = true)]
    async fn progress_fires_in_input_order_with_labels() {
        let (callback, seen) = collecting_progress();
        export_batch(
            &["splash", "home", "login"],
            &ScreenConfig::default(),
            &ExportConfig {
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
            ExportScope::Selected,
            Some(callback),
        )
        .await
        .unwrap();

        let seen = seen.lock().unwrap();
        let pairs: Vec<(usize, usize)> = seen.iter().map(|p| (p.completed, p.total)).collect();
        assert_eq!(pairs, vec![(1, 3), (2, 3), (3, 3), (3, 3)]);
        assert!(seen[0].label.contains("splash"));
        assert!(seen[1].label.contains("home"));
        assert!(seen[2].label.contains("login"));
        assert_eq!(seen[3].label, "Creating archive...");
    }

    #[tokio::test(start_paused = true)]
    async fn one_unknown_id_among_five_is_skipped() {
        let outcome = export_batch(
            &["splash", "home", "unknown-id", "login", "touch-id"],
            &ScreenConfig::default(),
            &ExportConfig {
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
            ExportScope::Selected,
            None,
        )
        .await
        .unwrap();

        let BatchOutcome::Archive(archive) = outcome else {
            panic!("expected an archive outcome");
        };
        assert_eq!(archive_entry_names(&archive.bytes).len(), 4);
        assert_eq!(archive.summary.succeeded.len(), 4);
        assert_eq!(archive.summary.skipped, vec!["unknown-id"]);
        assert!(archive.summary.failed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn all_unknown_ids_fail_the_batch() {
        let result = export_batch(
            &["nope", "also-nope"],
            &ScreenConfig::default(),
            &ExportConfig::default(),
            ExportScope::Selected,
            None,
        )
        .await;

        let Err(BatchError::NothingExported { summary }) = result else {
            panic!("expected NothingExported");
        };
        assert_eq!(summary.skipped, vec!["nope", "also-nope"]);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_capture_options_record_failures_not_aborts() {
        let result = export_batch(
            &["splash", "home"],
            &ScreenConfig::default(),
            &ExportConfig {
                pixel_ratio: -1.0,
                ..ExportConfig::default()
            },
            ExportScope::Selected,
            None,
        )
        .await;

        // Every capture fails, so the batch reports NothingExported
        // with both items in the failed list -- it does not abort on
        // the first item.
        let Err(BatchError::NothingExported { summary }) = result else {
            panic!("expected NothingExported");
        };
        assert_eq!(summary.failed, vec!["splash", "home"]);
    }

    #[tokio::test(start_paused = true)]
    async fn all_scope_uses_the_all_screens_archive_name() {
        let outcome = export_batch(
            &["splash"],
            &ScreenConfig::default(),
            &ExportConfig {
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
            ExportScope::All,
            None,
        )
        .await
        .unwrap();
        let BatchOutcome::Archive(archive) = outcome else {
            panic!("expected an archive outcome");
        };
        assert!(archive.filename.starts_with("kiple-all-screens-"));
    }

    #[tokio::test(start_paused = true)]
    async fn export_screen_returns_a_named_file() {
        let file = export_screen(
            "splash",
            &ScreenConfig::default(),
            &ExportConfig {
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(file.screen_id, "splash");
        assert!(file.filename.starts_with("splash-"));
        assert!(file.filename.ends_with(".png"));
        // PNG magic bytes.
        assert_eq!(&file.bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test(start_paused = true)]
    async fn export_screen_rejects_unknown_ids() {
        let result = export_screen(
            "unknown-id",
            &ScreenConfig::default(),
            &ExportConfig::default(),
        )
        .await;
        assert!(matches!(result, Err(ExportError::UnknownScreen(id)) if id == "unknown-id"));
    }

    #[tokio::test(start_paused = true)]
    async fn jpeg_batch_names_entries_with_jpg_extension() {
        let outcome = export_batch(
            &["splash"],
            &ScreenConfig::default(),
            &ExportConfig {
                format: RasterFormat::Jpeg,
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
            ExportScope::Selected,
            None,
        )
        .await
        .unwrap();
        let BatchOutcome::Archive(archive) = outcome else {
            panic!("expected an archive outcome");
        };
        let names = archive_entry_names(&archive.bytes);
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("screens/splash-"));
        assert!(names[0].ends_with(".jpg"));
    }
}
