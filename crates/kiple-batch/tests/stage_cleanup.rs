//! Cleanup invariant: after any export run completes -- success,
//! failure, or no-op -- no staging container added by that run remains
//! attached.
//!
//! These tests assert on the process-wide stage counter, so every test
//! in this file serializes on one lock to keep the counts stable.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use kiple_batch::{
    BatchError, BatchOutcome, ExportConfig, Stage, active_stage_count, export_batch, export_screen,
};
use kiple_export::ExportScope;
use kiple_screens::{FrameOptions, ScreenConfig};

static COUNTER_LOCK: Mutex<()> = Mutex::new(());

fn counter_guard() -> MutexGuard<'static, ()> {
    COUNTER_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[tokio::test(start_paused = true)]
async fn stage_lifecycle_drives_the_counter() {
    let _guard = counter_guard();
    let before = active_stage_count();

    let stage = Stage::new();
    assert_eq!(active_stage_count(), before + 1);

    let mounted = stage
        .mount("splash", &ScreenConfig::default(), FrameOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stage.mounted_count(), 1);

    drop(mounted);
    drop(stage);
    assert_eq!(active_stage_count(), before);
}

#[tokio::test(start_paused = true)]
async fn successful_batch_detaches_its_stage() {
    let _guard = counter_guard();
    let before = active_stage_count();

    let outcome = export_batch(
        &["splash", "home"],
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
    assert!(matches!(outcome, BatchOutcome::Archive(_)));
    assert_eq!(active_stage_count(), before);
}

#[tokio::test(start_paused = true)]
async fn failed_batch_detaches_its_stage() {
    let _guard = counter_guard();
    let before = active_stage_count();

    let result = export_batch(
        &["nope-1", "nope-2"],
        &ScreenConfig::default(),
        &ExportConfig::default(),
        ExportScope::Selected,
        None,
    )
    .await;
    assert!(matches!(result, Err(BatchError::NothingExported { .. })));
    assert_eq!(active_stage_count(), before);
}

#[tokio::test(start_paused = true)]
async fn empty_selection_never_attaches_a_stage() {
    let _guard = counter_guard();
    let before = active_stage_count();

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
    assert_eq!(active_stage_count(), before);
}

#[tokio::test(start_paused = true)]
async fn single_screen_export_detaches_its_stage() {
    let _guard = counter_guard();
    let before = active_stage_count();

    export_screen(
        "touch-id",
        &ScreenConfig::default(),
        &ExportConfig {
            pixel_ratio: 1.0,
            ..ExportConfig::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(active_stage_count(), before);
}
