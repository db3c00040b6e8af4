//! Integration test: run a mixed batch through the full pipeline and
//! inspect the produced archive entry by entry.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Read;

use kiple_batch::{BatchOutcome, ExportConfig, export_batch};
use kiple_export::ExportScope;
use kiple_screens::ScreenConfig;

#[tokio::test(start_paused = true)]
async fn mixed_batch_produces_the_expected_archive() {
    let screen_ids = ["splash", "home", "unknown-id"];
    let config = ExportConfig {
        pixel_ratio: 2.0,
        ..ExportConfig::default()
    };

    let outcome = export_batch(
        &screen_ids,
        &ScreenConfig::default(),
        &config,
        ExportScope::Selected,
        None,
    )
    .await
    .expect("batch should succeed despite the unknown id");

    let BatchOutcome::Archive(archive) = outcome else {
        panic!("expected an archive outcome");
    };

    // Summary: two captured, the unknown id skipped, nothing failed.
    assert_eq!(archive.summary.succeeded, vec!["splash", "home"]);
    assert_eq!(archive.summary.skipped, vec!["unknown-id"]);
    assert!(archive.summary.failed.is_empty());

    // Archive name carries the "selected" prefix and a date stamp.
    assert!(archive.filename.starts_with("kiple-screens-"));
    assert!(archive.filename.ends_with(".zip"));

    // Inspect the archive: two PNG entries under screens/, named per
    // the deterministic {id}-{date}.png scheme, each a decodable
    // 750x1624 image (375x812 at 2x).
    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(archive.bytes)).unwrap();
    assert_eq!(zip.len(), 2);

    for (index, id) in ["splash", "home"].iter().enumerate() {
        let mut entry = zip.by_index(index).unwrap();
        let name = entry.name().to_string();
        assert!(
            name.starts_with(&format!("screens/{id}-")) && name.ends_with(".png"),
            "unexpected entry name {name:?}",
        );

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        eprintln!("{name}: {} bytes", bytes.len());
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}

#[tokio::test(start_paused = true)]
async fn full_table_batch_captures_every_screen() {
    let ids: Vec<&str> = kiple_screens::all_screen_ids();
    let total = ids.len();

    let outcome = export_batch(
        &ids,
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
    assert_eq!(archive.summary.succeeded.len(), total);
    assert!(archive.filename.starts_with("kiple-all-screens-"));

    let zip = zip::ZipArchive::new(std::io::Cursor::new(archive.bytes)).unwrap();
    assert_eq!(zip.len(), total);
}
