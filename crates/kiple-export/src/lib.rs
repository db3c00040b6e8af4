//! kiple-export: Pure export serializers (sans-IO).
//!
//! Converts staged scenes into encoded image bytes, derives
//! deterministic export filenames, and packages named blobs into a
//! single deflate-compressed ZIP archive. No filesystem or network
//! access happens here -- callers receive `Vec<u8>` and decide where
//! it goes.

pub mod archive;
pub mod filename;
pub mod raster;

pub use archive::{ArchiveBuilder, ArchiveError, ENTRY_FOLDER};
pub use filename::{ExportScope, archive_filename, image_filename};
pub use raster::{
    DEFAULT_JPEG_QUALITY, DEFAULT_PIXEL_RATIO, RasterError, RasterFormat, RasterOptions, rasterize,
};
