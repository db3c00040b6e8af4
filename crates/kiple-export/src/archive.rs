//! Batch archive packaging.
//!
//! [`ArchiveBuilder`] accumulates named image blobs under a single
//! `screens/` folder and produces one deflate-compressed ZIP blob on
//! [`finish`](ArchiveBuilder::finish). The builder is single-use:
//! `finish` consumes it, so a second finalize cannot be expressed.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Folder inside the archive that holds every screen image.
pub const ENTRY_FOLDER: &str = "screens";

/// Deflate level used for every entry. Moderate: balances speed and
/// size; not user-tunable.
const COMPRESSION_LEVEL: i64 = 6;

/// Errors produced while building an archive. Fatal to a batch export;
/// no partial archive is emitted.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The underlying ZIP writer rejected an operation.
    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Writing entry data failed.
    #[error("failed to write archive data: {0}")]
    Io(#[from] std::io::Error),
}

/// Accumulates named blobs and produces one ZIP archive.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveBuilder {
    /// Create an empty archive builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    /// Add one image blob under `screens/{filename}`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError`] if the entry cannot be written.
    pub fn add_image(&mut self, filename: &str, bytes: &[u8]) -> Result<(), ArchiveError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL));
        self.writer
            .start_file(format!("{ENTRY_FOLDER}/{filename}"), options)?;
        self.writer.write_all(bytes)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries added so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// Whether no entries have been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Finalize the archive and return its bytes.
    ///
    /// Consumes the builder; finalizing twice is unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError`] if the central directory cannot be
    /// written.
    pub fn finish(self) -> Result<Vec<u8>, ArchiveError> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Read;

    use super::*;

    fn read_back(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
        zip::ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn entries_land_under_the_screens_folder() {
        let mut builder = ArchiveBuilder::new();
        builder.add_image("splash-2024-06-01.png", b"png-bytes").unwrap();
        builder.add_image("home-2024-06-01.png", b"more-bytes").unwrap();
        assert_eq!(builder.len(), 2);

        let mut archive = read_back(builder.finish().unwrap());
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "screens/splash-2024-06-01.png",
                "screens/home-2024-06-01.png",
            ],
        );
    }

    #[test]
    fn entry_contents_round_trip() {
        let payload = vec![7_u8; 4096];
        let mut builder = ArchiveBuilder::new();
        builder.add_image("touch-id-2024-06-01.png", &payload).unwrap();

        let mut archive = read_back(builder.finish().unwrap());
        let mut entry = archive.by_name("screens/touch-id-2024-06-01.png").unwrap();
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, payload);
    }

    #[test]
    fn entries_are_deflate_compressed() {
        // Highly repetitive payload must shrink under deflate.
        let payload = vec![0_u8; 100_000];
        let mut builder = ArchiveBuilder::new();
        builder.add_image("login-2024-06-01.png", &payload).unwrap();

        let bytes = builder.finish().unwrap();
        assert!(bytes.len() < payload.len() / 10);

        let mut archive = read_back(bytes);
        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn empty_archive_finalizes_cleanly() {
        let builder = ArchiveBuilder::new();
        assert!(builder.is_empty());
        let bytes = builder.finish().unwrap();
        let archive = read_back(bytes);
        assert_eq!(archive.len(), 0);
    }
}
