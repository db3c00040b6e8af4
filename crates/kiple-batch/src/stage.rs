//! Off-screen staging for export capture.
//!
//! A [`Stage`] is the detached rendering surface an export run mounts
//! screens into, one at a time, away from any interactive UI. Each
//! [`mount`](Stage::mount) resolves a screen ID, builds the scene,
//! performs the initial render, then waits a fixed settling delay
//! before handing the mounted screen to the rasterizer.
//!
//! The settling delay is a heuristic carried over from the product:
//! there is no synchronous signal for style/layout/asset settling on a
//! freshly rendered surface, so the stage waits [`SETTLE_DELAY`] and
//! accepts that a capture may be visually incomplete if assets need
//! longer. Best effort, not a guarantee.
//!
//! Cleanup is RAII: dropping a [`Mounted`] unmounts it, and dropping
//! the [`Stage`] detaches the container, whether the run succeeded or
//! failed.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kiple_screens::{FrameOptions, Pixmap, RenderError, Scene, ScreenConfig, screen_by_id};

/// Fixed settling delay between the initial render and capture.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Stages currently attached process-wide. One per in-flight export
/// run; restored to its prior value once a run's [`Stage`] is dropped.
static ACTIVE_STAGES: AtomicUsize = AtomicUsize::new(0);

/// Number of staging containers currently attached.
#[must_use]
pub fn active_stage_count() -> usize {
    ACTIVE_STAGES.load(Ordering::SeqCst)
}

/// Errors produced while mounting a screen.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The initial render of the mounted screen failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The detached rendering surface for one export run.
///
/// Exclusively owned by the run that created it; overlapping runs each
/// allocate their own stage, so no cross-run sharing can occur.
#[derive(Debug)]
pub struct Stage {
    live_mounts: Arc<AtomicUsize>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    /// Attach a new staging container.
    #[must_use]
    pub fn new() -> Self {
        ACTIVE_STAGES.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("staging container attached");
        Self {
            live_mounts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Screens currently mounted in this stage.
    ///
    /// The export loop unmounts each screen right after capture, so
    /// this stays at most 1 during a well-behaved run.
    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.live_mounts.load(Ordering::SeqCst)
    }

    /// Mount a screen: resolve its descriptor, render it once, and
    /// wait for visual settling.
    ///
    /// An unknown `screen_id` mounts nothing and returns `Ok(None)` --
    /// a soft skip, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Render`] if the initial render fails.
    pub async fn mount(
        &self,
        screen_id: &str,
        config: &ScreenConfig,
        frame: FrameOptions,
    ) -> Result<Option<Mounted>, StageError> {
        let Some(descriptor) = screen_by_id(screen_id) else {
            tracing::warn!(screen_id, "unknown screen id, mounting nothing");
            return Ok(None);
        };

        let scene = Scene::new(descriptor, config.clone(), frame);
        let root = scene.paint(1.0)?;
        self.live_mounts.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(screen_id, "screen mounted, settling");

        tokio::time::sleep(SETTLE_DELAY).await;

        Ok(Some(Mounted {
            scene,
            root,
            live_mounts: Arc::clone(&self.live_mounts),
        }))
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        ACTIVE_STAGES.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!("staging container detached");
    }
}

/// A screen mounted in a [`Stage`], settled and ready for capture.
///
/// Dropping the value unmounts the screen, bounding memory growth
/// during long batches.
#[derive(Debug)]
pub struct Mounted {
    scene: Scene,
    root: Pixmap,
    live_mounts: Arc<AtomicUsize>,
}

impl Mounted {
    /// The mounted screen's ID.
    #[must_use]
    pub const fn screen_id(&self) -> &'static str {
        self.scene.screen_id()
    }

    /// The staged scene, for capture at an arbitrary pixel density.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The settled root surface from the initial 1x render.
    #[must_use]
    pub const fn root(&self) -> &Pixmap {
        &self.root
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.live_mounts.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(screen_id = self.scene.screen_id(), "screen unmounted");
    }
}
