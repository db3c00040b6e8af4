//! Screen descriptor table.
//!
//! Every exportable screen is described by a [`ScreenDescriptor`]:
//! a stable string ID, a display name, a category, and the renderer
//! that produces its visual output for a given configuration. The
//! table is a process-wide constant; lookups by ID drive both the
//! interactive preview and the export pipeline.

use crate::canvas::Canvas;
use crate::config::ScreenConfig;
use crate::screens::{auth, home, kyc, onboarding, splash};

/// Category a screen belongs to, used for grouping in selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenCategory {
    /// App launch screen.
    Splash,
    /// First-run onboarding carousel.
    Onboarding,
    /// Login and authentication.
    Auth,
    /// Identity verification flow.
    Ekyc,
    /// Wallet home.
    Home,
}

impl ScreenCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Splash,
        Self::Onboarding,
        Self::Auth,
        Self::Ekyc,
        Self::Home,
    ];

    /// Display label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Onboarding => "Onboarding",
            Self::Auth => "Auth",
            Self::Ekyc => "eKYC",
            Self::Home => "Home",
        }
    }
}

/// Renderer capability: produce the screen's visual output for a
/// configuration.
pub type RenderFn = fn(&ScreenConfig, &mut Canvas<'_>);

/// One entry in the screen table.
#[derive(Clone, Copy)]
pub struct ScreenDescriptor {
    /// Stable unique ID (filename-safe).
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Grouping category.
    pub category: ScreenCategory,
    /// The screen's renderer.
    pub render: RenderFn,
}

impl std::fmt::Debug for ScreenDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// The full screen table, in presentation order.
pub const SCREENS: &[ScreenDescriptor] = &[
    // Splash
    ScreenDescriptor {
        id: "splash",
        name: "Splash Screen",
        category: ScreenCategory::Splash,
        render: splash::render,
    },
    // Onboarding
    ScreenDescriptor {
        id: "onboarding-1",
        name: "Onboarding 1",
        category: ScreenCategory::Onboarding,
        render: onboarding::slide_1,
    },
    ScreenDescriptor {
        id: "onboarding-2",
        name: "Onboarding 2",
        category: ScreenCategory::Onboarding,
        render: onboarding::slide_2,
    },
    ScreenDescriptor {
        id: "onboarding-3",
        name: "Onboarding 3",
        category: ScreenCategory::Onboarding,
        render: onboarding::slide_3,
    },
    ScreenDescriptor {
        id: "onboarding-4",
        name: "Onboarding 4",
        category: ScreenCategory::Onboarding,
        render: onboarding::slide_4,
    },
    ScreenDescriptor {
        id: "onboarding-5",
        name: "Onboarding 5",
        category: ScreenCategory::Onboarding,
        render: onboarding::slide_5,
    },
    // Auth
    ScreenDescriptor {
        id: "login",
        name: "Login",
        category: ScreenCategory::Auth,
        render: auth::login_default,
    },
    ScreenDescriptor {
        id: "login-phone-focus",
        name: "Login (Phone)",
        category: ScreenCategory::Auth,
        render: auth::login_phone_focus,
    },
    ScreenDescriptor {
        id: "login-password-focus",
        name: "Login (Password)",
        category: ScreenCategory::Auth,
        render: auth::login_password_focus,
    },
    ScreenDescriptor {
        id: "language-sheet",
        name: "Language Sheet",
        category: ScreenCategory::Auth,
        render: auth::language_sheet,
    },
    ScreenDescriptor {
        id: "touch-id",
        name: "Touch ID",
        category: ScreenCategory::Auth,
        render: auth::touch_id,
    },
    ScreenDescriptor {
        id: "face-id",
        name: "Face ID",
        category: ScreenCategory::Auth,
        render: auth::face_id,
    },
    ScreenDescriptor {
        id: "choose-auth",
        name: "Choose Auth",
        category: ScreenCategory::Auth,
        render: auth::choose_auth,
    },
    ScreenDescriptor {
        id: "registration-success",
        name: "Registration Success",
        category: ScreenCategory::Auth,
        render: auth::registration_success,
    },
    ScreenDescriptor {
        id: "registration-success-alt",
        name: "Registration Success (Alt)",
        category: ScreenCategory::Auth,
        render: auth::registration_success_alt,
    },
    // eKYC
    ScreenDescriptor {
        id: "kyc-lock",
        name: "KYC Lock",
        category: ScreenCategory::Ekyc,
        render: kyc::lock,
    },
    ScreenDescriptor {
        id: "kyc-id-type",
        name: "KYC ID Type",
        category: ScreenCategory::Ekyc,
        render: kyc::id_type,
    },
    ScreenDescriptor {
        id: "kyc-id-type-alt",
        name: "KYC ID Type (Alt)",
        category: ScreenCategory::Ekyc,
        render: kyc::id_type_alt,
    },
    ScreenDescriptor {
        id: "kyc-confirm-id",
        name: "KYC Confirm ID",
        category: ScreenCategory::Ekyc,
        render: kyc::confirm_id,
    },
    ScreenDescriptor {
        id: "kyc-loading",
        name: "Loading",
        category: ScreenCategory::Ekyc,
        render: kyc::loading,
    },
    ScreenDescriptor {
        id: "kyc-loading-alt",
        name: "Loading (Alt)",
        category: ScreenCategory::Ekyc,
        render: kyc::loading_alt,
    },
    ScreenDescriptor {
        id: "kyc-success",
        name: "KYC Success",
        category: ScreenCategory::Ekyc,
        render: kyc::success,
    },
    // Home
    ScreenDescriptor {
        id: "home",
        name: "Home",
        category: ScreenCategory::Home,
        render: home::standard,
    },
    ScreenDescriptor {
        id: "home-hidden",
        name: "Home (Hidden Balance)",
        category: ScreenCategory::Home,
        render: home::hidden,
    },
];

/// Look up a screen descriptor by its ID.
///
/// Returns `None` for unknown IDs; the export pipeline treats that as
/// a soft skip rather than an error.
#[must_use]
pub fn screen_by_id(id: &str) -> Option<&'static ScreenDescriptor> {
    SCREENS.iter().find(|screen| screen.id == id)
}

/// All screens in a category, in table order.
#[must_use]
pub fn screens_in_category(category: ScreenCategory) -> Vec<&'static ScreenDescriptor> {
    SCREENS
        .iter()
        .filter(|screen| screen.category == category)
        .collect()
}

/// All screen IDs in table order.
#[must_use]
pub fn all_screen_ids() -> Vec<&'static str> {
    SCREENS.iter().map(|screen| screen.id).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twenty_four_screens() {
        assert_eq!(SCREENS.len(), 24);
    }

    #[test]
    fn screen_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for screen in SCREENS {
            assert!(seen.insert(screen.id), "duplicate screen id: {}", screen.id);
        }
    }

    #[test]
    fn screen_ids_are_filename_safe() {
        for screen in SCREENS {
            assert!(
                screen
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "screen id {:?} contains characters unsafe for filenames",
                screen.id,
            );
        }
    }

    #[test]
    fn lookup_finds_known_ids() {
        let splash = screen_by_id("splash").unwrap();
        assert_eq!(splash.name, "Splash Screen");
        assert_eq!(splash.category, ScreenCategory::Splash);

        let home = screen_by_id("home-hidden").unwrap();
        assert_eq!(home.category, ScreenCategory::Home);
    }

    #[test]
    fn lookup_misses_unknown_ids() {
        assert!(screen_by_id("unknown-id").is_none());
        assert!(screen_by_id("").is_none());
        assert!(screen_by_id("SPLASH").is_none());
    }

    #[test]
    fn every_category_is_populated() {
        for category in ScreenCategory::ALL {
            assert!(
                !screens_in_category(category).is_empty(),
                "category {category:?} has no screens",
            );
        }
    }

    #[test]
    fn category_totals_cover_the_table() {
        let total: usize = ScreenCategory::ALL
            .into_iter()
            .map(|category| screens_in_category(category).len())
            .sum();
        assert_eq!(total, SCREENS.len());
    }

    #[test]
    fn all_screen_ids_preserves_table_order() {
        let ids = all_screen_ids();
        assert_eq!(ids.first(), Some(&"splash"));
        assert_eq!(ids.last(), Some(&"home-hidden"));
        assert_eq!(ids.len(), SCREENS.len());
    }
}
