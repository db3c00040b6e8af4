//! kiple: command-line exporter for branded e-wallet screen mockups.
//!
//! Renders screens from the built-in template table under a brand
//! configuration and saves them as PNG/JPEG files, individually or as
//! a ZIP batch.
//!
//! # Usage
//!
//! ```text
//! kiple --list
//! kiple --current splash --out exports/
//! kiple --screens splash,home,login --format jpeg --out exports/
//! kiple --all --frame --device android --config brand.json
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use kiple_batch::{
    BatchOutcome, ExportConfig, ExportSummary, ProgressCallback, export_batch, export_screen,
};
use kiple_export::{ExportScope, RasterFormat};
use kiple_screens::{DeviceType, SCREENS, ScreenConfig, all_screen_ids};

/// Export branded e-wallet screen mockups as images.
///
/// Exactly one selection is required: `--current` for a single image,
/// `--screens` for a curated ZIP, or `--all` for the full table.
#[derive(Parser)]
#[command(name = "kiple", version)]
struct Cli {
    /// List available screens and exit.
    #[arg(long)]
    list: bool,

    /// Export a single screen by ID.
    #[arg(long, value_name = "ID", conflicts_with_all = ["screens", "all"])]
    current: Option<String>,

    /// Export a comma-separated list of screen IDs as a ZIP.
    #[arg(long, value_delimiter = ',', value_name = "IDS", conflicts_with = "all")]
    screens: Vec<String>,

    /// Export every screen in the table as a ZIP.
    #[arg(long)]
    all: bool,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Pixel-density multiplier (output pixels per logical pixel).
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// JPEG quality factor in (0, 1].
    #[arg(long, default_value_t = 0.9)]
    quality: f32,

    /// Wrap each screen in a device frame.
    #[arg(long)]
    frame: bool,

    /// Device style for the frame.
    #[arg(long, value_enum, default_value_t = Device::Iphone)]
    device: Device,

    /// Brand configuration JSON file (full or partial `ScreenConfig`).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

/// Output format selection.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// PNG with transparency.
    Png,
    /// JPEG, flattened onto white.
    Jpeg,
}

impl From<Format> for RasterFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => Self::Png,
            Format::Jpeg => Self::Jpeg,
        }
    }
}

/// Device frame selection.
#[derive(Clone, Copy, ValueEnum)]
enum Device {
    /// iPhone-style frame.
    Iphone,
    /// Android (Samsung-style) frame.
    Android,
}

impl From<Device> for DeviceType {
    fn from(device: Device) -> Self {
        match device {
            Device::Iphone => Self::Iphone,
            Device::Android => Self::Android,
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Load the brand configuration from `--config`, or fall back to the
/// stock defaults.
fn load_screen_config(path: Option<&Path>) -> Result<ScreenConfig, String> {
    let Some(path) = path else {
        return Ok(ScreenConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("Error parsing {}: {e}", path.display()))
}

fn write_output(out_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, String> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("Error creating {}: {e}", out_dir.display()))?;
    let path = out_dir.join(filename);
    std::fs::write(&path, bytes).map_err(|e| format!("Error writing {}: {e}", path.display()))?;
    Ok(path)
}

fn print_screen_table() {
    println!("{:<26} {:<28} {}", "ID", "NAME", "CATEGORY");
    for screen in SCREENS {
        println!(
            "{:<26} {:<28} {}",
            screen.id,
            screen.name,
            screen.category.label(),
        );
    }
}

fn print_summary(summary: &ExportSummary) {
    eprintln!(
        "Done: {} exported, {} skipped, {} failed",
        summary.succeeded.len(),
        summary.skipped.len(),
        summary.failed.len(),
    );
    for id in &summary.skipped {
        eprintln!("  skipped: {id} (unknown screen id)");
    }
    for id in &summary.failed {
        eprintln!("  failed:  {id}");
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    if cli.list {
        print_screen_table();
        return Ok(());
    }

    let screen_config = load_screen_config(cli.config.as_deref())?;
    let export_config = ExportConfig {
        format: cli.format.into(),
        pixel_ratio: cli.scale,
        jpeg_quality: cli.quality,
        include_device_frame: cli.frame,
        device: cli.device.into(),
    };

    if let Some(ref screen_id) = cli.current {
        let file = export_screen(screen_id, &screen_config, &export_config)
            .await
            .map_err(|e| format!("Export failed: {e}"))?;
        let path = write_output(&cli.out, &file.filename, &file.bytes)?;
        eprintln!("Saved {} ({} bytes)", path.display(), file.bytes.len());
        return Ok(());
    }

    let (ids, scope) = if cli.all {
        (
            all_screen_ids().iter().map(ToString::to_string).collect(),
            ExportScope::All,
        )
    } else if cli.screens.is_empty() {
        return Err("Nothing selected: pass --current, --screens, or --all (see --help)".into());
    } else {
        (cli.screens.clone(), ExportScope::Selected)
    };

    let progress: ProgressCallback = Box::new(|notification| {
        eprintln!("{}", notification.label);
    });

    let outcome = export_batch(
        &ids,
        &screen_config,
        &export_config,
        scope,
        Some(progress),
    )
    .await
    .map_err(|e| format!("Batch export failed: {e}"))?;

    match outcome {
        BatchOutcome::EmptySelection => {
            eprintln!("Nothing to export.");
        }
        BatchOutcome::Archive(archive) => {
            let path = write_output(&cli.out, &archive.filename, &archive.bytes)?;
            eprintln!("Saved {} ({} bytes)", path.display(), archive.bytes.len());
            print_summary(&archive.summary);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
