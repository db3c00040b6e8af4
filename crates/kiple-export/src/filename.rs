//! Deterministic export filenames.
//!
//! Pure functions with no clock access: the calendar date is an
//! argument, so repeated exports on one day produce identical names
//! (easy to diff or overwrite). Names are *not* unique across reruns
//! on the same day; that collision policy is deliberate.

use chrono::NaiveDate;

use crate::raster::RasterFormat;

/// Which selection produced a batch archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// A user-curated subset of screens.
    Selected,
    /// The full screen table.
    All,
}

/// Filename for one exported screen image:
/// `{screen_id}-{YYYY-MM-DD}.{ext}`.
#[must_use]
pub fn image_filename(screen_id: &str, date: NaiveDate, format: RasterFormat) -> String {
    format!(
        "{screen_id}-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension(),
    )
}

/// Filename for a batch archive: `kiple-screens-{date}.zip` for a
/// selection, `kiple-all-screens-{date}.zip` for the full table.
#[must_use]
pub fn archive_filename(scope: ExportScope, date: NaiveDate) -> String {
    let prefix = match scope {
        ExportScope::Selected => "kiple-screens",
        ExportScope::All => "kiple-all-screens",
    };
    format!("{prefix}-{}.zip", date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn image_filename_embeds_id_date_and_extension() {
        assert_eq!(
            image_filename("splash", june_first(), RasterFormat::Png),
            "splash-2024-06-01.png",
        );
        assert_eq!(
            image_filename("home", june_first(), RasterFormat::Jpeg),
            "home-2024-06-01.jpg",
        );
    }

    #[test]
    fn image_filename_is_deterministic_within_a_day() {
        let first = image_filename("kyc-lock", june_first(), RasterFormat::Png);
        let second = image_filename("kyc-lock", june_first(), RasterFormat::Png);
        assert_eq!(first, second);
    }

    #[test]
    fn format_changes_only_the_extension() {
        let png = image_filename("login", june_first(), RasterFormat::Png);
        let jpeg = image_filename("login", june_first(), RasterFormat::Jpeg);
        assert_eq!(png.strip_suffix("png"), jpeg.strip_suffix("jpg"));
    }

    #[test]
    fn date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            image_filename("splash", date, RasterFormat::Png),
            "splash-2024-01-05.png",
        );
    }

    #[test]
    fn archive_filename_reflects_scope() {
        assert_eq!(
            archive_filename(ExportScope::Selected, june_first()),
            "kiple-screens-2024-06-01.zip",
        );
        assert_eq!(
            archive_filename(ExportScope::All, june_first()),
            "kiple-all-screens-2024-06-01.zip",
        );
    }
}
