//! Brand configuration consumed by every screen renderer.
//!
//! [`ScreenConfig`] is an explicit value passed by reference into
//! renderers and into the export pipeline -- there is no ambient global
//! settings object. Callers construct one (or start from
//! [`ScreenConfig::default`]), adjust fields, and hand it to whatever
//! needs to draw.

use serde::{Deserialize, Serialize};

/// An opaque sRGB color used throughout the screen templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Errors produced when parsing a CSS hex color value.
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    /// The value did not start with `#`.
    #[error("not a hex color: {0:?}")]
    MissingHash(String),

    /// The value contained a non-hexadecimal digit.
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),

    /// The value was neither `#rgb` nor `#rrggbb`.
    #[error("unexpected hex color length: {0:?}")]
    BadLength(String),
}

impl Color {
    /// Create a color from raw channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS hex color string (e.g. `"#1a1a2e"` or `" #fff "`).
    ///
    /// Accepts the short `#rgb` form and the full `#rrggbb` form;
    /// surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the string is not a valid hex color.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_string()))?;
        match hex.len() {
            3 => {
                // Short form: #rgb -> #rrggbb
                let mut channels = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let n = ch
                        .to_digit(16)
                        .ok_or_else(|| ColorParseError::InvalidDigit(trimmed.to_string()))?;
                    #[expect(clippy::cast_possible_truncation)]
                    {
                        channels[i] = (n * 17) as u8;
                    }
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16);
                let g = u8::from_str_radix(&hex[2..4], 16);
                let b = u8::from_str_radix(&hex[4..6], 16);
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
                    _ => Err(ColorParseError::InvalidDigit(trimmed.to_string())),
                }
            }
            _ => Err(ColorParseError::BadLength(trimmed.to_string())),
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Font family selection for the mockup typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Inter (default).
    #[default]
    Inter,
    /// Roboto.
    Roboto,
    /// Poppins.
    Poppins,
    /// Montserrat.
    Montserrat,
    /// Open Sans.
    Opensans,
    /// Lato.
    Lato,
    /// Nunito.
    Nunito,
}

/// Font sizes (logical pixels) for each role in the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    /// Large headings.
    pub h1: f32,
    /// Section headings.
    pub h2: f32,
    /// Subsection headings.
    pub h3: f32,
    /// Body text.
    pub body: f32,
    /// Small text.
    pub small: f32,
    /// Captions and labels.
    pub caption: f32,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self {
            h1: 32.0,
            h2: 24.0,
            h3: 18.0,
            body: 16.0,
            small: 14.0,
            caption: 12.0,
        }
    }
}

/// Font weights for each text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    /// Headings.
    pub heading: u16,
    /// Subheadings.
    pub subheading: u16,
    /// Body text.
    pub body: u16,
    /// Captions.
    pub caption: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            heading: 700,
            subheading: 600,
            body: 400,
            caption: 500,
        }
    }
}

/// Typography settings shared by all screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Font family.
    pub family: FontFamily,
    /// Per-role font sizes.
    pub scale: TypeScale,
    /// Per-role font weights.
    pub weights: FontWeights,
    /// Base line-height multiplier.
    pub line_height: f32,
    /// Letter spacing in logical pixels.
    pub letter_spacing: f32,
}

impl Typography {
    /// Default line-height multiplier.
    pub const DEFAULT_LINE_HEIGHT: f32 = 1.5;
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            scale: TypeScale::default(),
            weights: FontWeights::default(),
            line_height: Self::DEFAULT_LINE_HEIGHT,
            letter_spacing: 0.0,
        }
    }
}

/// Text role, mapping onto one [`TypeScale`] slot and one
/// [`FontWeights`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Large heading.
    H1,
    /// Section heading.
    H2,
    /// Subsection heading.
    H3,
    /// Body text.
    Body,
    /// Small text.
    Small,
    /// Caption or label.
    Caption,
}

impl Typography {
    /// Font size for a role, in logical pixels.
    #[must_use]
    pub const fn size(&self, role: TextRole) -> f32 {
        match role {
            TextRole::H1 => self.scale.h1,
            TextRole::H2 => self.scale.h2,
            TextRole::H3 => self.scale.h3,
            TextRole::Body => self.scale.body,
            TextRole::Small => self.scale.small,
            TextRole::Caption => self.scale.caption,
        }
    }

    /// Font weight for a role.
    #[must_use]
    pub const fn weight(&self, role: TextRole) -> u16 {
        match role {
            TextRole::H1 | TextRole::H2 => self.weights.heading,
            TextRole::H3 => self.weights.subheading,
            TextRole::Body => self.weights.body,
            TextRole::Small | TextRole::Caption => self.weights.caption,
        }
    }

    /// Vertical advance between consecutive lines of a role, in logical
    /// pixels.
    #[must_use]
    pub fn line_advance(&self, role: TextRole) -> f32 {
        self.size(role) * self.line_height
    }
}

/// One onboarding carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSlide {
    /// Slide heading.
    pub title: String,
    /// Slide description.
    pub description: String,
}

/// One step in the identity-verification walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdStep {
    /// Step heading.
    pub title: String,
    /// Step description.
    pub description: String,
}

/// All user-editable copy shown on the screen templates.
///
/// Field groups mirror the screens they appear on; defaults are the
/// product's stock copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextContent {
    // Login
    /// Login screen heading.
    pub login_title: String,
    /// Login screen subheading.
    pub login_subtitle: String,
    /// Login button label.
    pub login_button: String,
    /// Sign-up link label.
    pub signup_link: String,
    /// Forgot-password link label.
    pub forgot_password: String,
    /// "Don't have an account?" prompt.
    pub dont_have_account: String,

    /// Onboarding carousel slides, in display order.
    pub onboarding: [OnboardingSlide; 5],

    // Auth
    /// Touch ID prompt heading.
    pub touch_id_title: String,
    /// Touch ID prompt description.
    pub touch_id_description: String,
    /// Face ID prompt heading.
    pub face_id_title: String,
    /// Face ID prompt description.
    pub face_id_description: String,
    /// Auth method chooser heading.
    pub choose_auth_title: String,
    /// Registration success heading.
    pub registration_success_title: String,
    /// Registration success description.
    pub registration_success_description: String,
    /// Registration success button label.
    pub registration_success_button: String,

    // Home
    /// Wallet balance label.
    pub wallet_balance_label: String,
    /// Analytics link label.
    pub see_analytics: String,

    // Home modules
    /// Transfer tile label.
    pub transfer_label: String,
    /// Remittance tile label.
    pub remittance_label: String,
    /// Visa tile label.
    pub visa_label: String,
    /// Pay-bills tile label.
    pub pay_bills_label: String,
    /// Mobile-reload tile label.
    pub mobile_reload_label: String,
    /// Overflow tile label.
    pub more_label: String,

    // eKYC
    /// KYC lock screen heading.
    pub kyc_lock_title: String,
    /// KYC lock screen description.
    pub kyc_lock_description: String,
    /// KYC lock screen button label.
    pub kyc_lock_button: String,
    /// ID-type screen heading.
    pub id_type_title: String,
    /// ID-type screen description.
    pub id_type_description: String,
    /// Identity verification steps, in display order.
    pub id_steps: [IdStep; 3],
    /// ID-type screen button label.
    pub id_type_button: String,
    /// Loading screen text.
    pub loading_text: String,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            login_title: "Login".into(),
            login_subtitle: "Enter your mobile number and password to continue".into(),
            login_button: "Login".into(),
            signup_link: "Sign Up".into(),
            forgot_password: "Forget Password".into(),
            dont_have_account: "Don't have an account?".into(),

            onboarding: [
                OnboardingSlide {
                    title: "Transfer Money".into(),
                    description: "Easily send money to your loved ones, anytime.".into(),
                },
                OnboardingSlide {
                    title: "Remittance Transactions".into(),
                    description: "Send remittances with ease, right from your Mobile at your \
                                  convenience."
                        .into(),
                },
                OnboardingSlide {
                    title: "Pay Bills".into(),
                    description: "Pay your bills quickly and securely from anywhere.".into(),
                },
                OnboardingSlide {
                    title: "Mobile Reload".into(),
                    description: "Top up your mobile credit instantly with just a few taps.".into(),
                },
                OnboardingSlide {
                    title: "Visa Card".into(),
                    description: "Get your virtual Visa card for online and international \
                                  payments."
                        .into(),
                },
            ],

            touch_id_title: "Tap your finger on the sensor".into(),
            touch_id_description: "Scan to proceed".into(),
            face_id_title: "Look at the camera".into(),
            face_id_description: "Scan to proceed".into(),
            choose_auth_title: "Choose secure auth method".into(),
            registration_success_title: "Registration Successful!".into(),
            registration_success_description: "Your account has been created successfully. You \
                                               can now start using the app."
                .into(),
            registration_success_button: "Get Started".into(),

            wallet_balance_label: "Wallet Balance".into(),
            see_analytics: "See Wallet Analytics".into(),

            transfer_label: "Transfer".into(),
            remittance_label: "Remittance".into(),
            visa_label: "VISA".into(),
            pay_bills_label: "Pay Bills".into(),
            mobile_reload_label: "Mobile Reload".into(),
            more_label: "More".into(),

            kyc_lock_title: "Time to confirm it's really you".into(),
            kyc_lock_description: "Hey there! To use our app as per BNM requirements, we just \
                                   need to make sure it's really you"
                .into(),
            kyc_lock_button: "Begin the eKYC Process".into(),
            id_type_title: "Identity Verification".into(),
            id_type_description: "Hey, as a regulated institution, we just need to double-check \
                                  your identity"
                .into(),
            id_steps: [
                IdStep {
                    title: "Pick your ID Type".into(),
                    description: "Choose between NRIC or Passport".into(),
                },
                IdStep {
                    title: "Snap a Picture & Confirm".into(),
                    description: "Snap a photo of your ID or Passport.".into(),
                },
                IdStep {
                    title: "Time for a Selfie".into(),
                    description: "Please take a selfie for ID verification.".into(),
                },
            ],
            id_type_button: "Alright, let's do this".into(),
            loading_text: "Please wait...".into(),
        }
    }
}

/// Which quick-action modules are shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModuleVisibility {
    /// Money transfer.
    pub transfer: bool,
    /// Remittance.
    pub remittance: bool,
    /// Virtual Visa card.
    pub visa: bool,
    /// Bill payment.
    pub pay_bills: bool,
    /// Mobile credit reload.
    pub mobile_reload: bool,
    /// Overflow menu.
    pub more: bool,
}

impl Default for ModuleVisibility {
    fn default() -> Self {
        Self {
            transfer: true,
            remittance: true,
            visa: true,
            pay_bills: true,
            mobile_reload: true,
            more: true,
        }
    }
}

/// A home screen quick-action module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeModule {
    /// Money transfer.
    Transfer,
    /// Remittance.
    Remittance,
    /// Virtual Visa card.
    Visa,
    /// Bill payment.
    PayBills,
    /// Mobile credit reload.
    MobileReload,
    /// Overflow menu.
    More,
}

impl HomeModule {
    /// All modules in home screen grid order.
    pub const ALL: [Self; 6] = [
        Self::Transfer,
        Self::Remittance,
        Self::Visa,
        Self::PayBills,
        Self::MobileReload,
        Self::More,
    ];

    /// The user-editable tile label for this module.
    #[must_use]
    pub fn label<'a>(self, texts: &'a TextContent) -> &'a str {
        match self {
            Self::Transfer => &texts.transfer_label,
            Self::Remittance => &texts.remittance_label,
            Self::Visa => &texts.visa_label,
            Self::PayBills => &texts.pay_bills_label,
            Self::MobileReload => &texts.mobile_reload_label,
            Self::More => &texts.more_label,
        }
    }
}

impl ModuleVisibility {
    /// Modules currently enabled, in grid order.
    #[must_use]
    pub fn enabled(self) -> Vec<HomeModule> {
        HomeModule::ALL
            .into_iter()
            .filter(|module| match module {
                HomeModule::Transfer => self.transfer,
                HomeModule::Remittance => self.remittance,
                HomeModule::Visa => self.visa,
                HomeModule::PayBills => self.pay_bills,
                HomeModule::MobileReload => self.mobile_reload,
                HomeModule::More => self.more,
            })
            .collect()
    }
}

/// Overall layout treatment for the e-wallet surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Flat surfaces, minimal chrome (default).
    #[default]
    Minimal,
    /// Card-heavy surfaces with visible elevation.
    Card,
    /// Gradient-accented surfaces.
    Gradient,
}

/// The complete brand configuration for one render or export run.
///
/// Renderers read from this value only; nothing mutates it. Defaults
/// reproduce the product's stock branding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Product name shown next to the logo mark.
    pub app_name: String,

    /// Primary brand color (buttons, links, active states).
    pub primary: Color,
    /// Secondary brand color (dark surfaces, emphasis).
    pub secondary: Color,
    /// Accent color (illustration fills, highlights).
    pub accent: Color,
    /// Screen background color.
    pub background: Color,
    /// Primary text color.
    pub text_primary: Color,
    /// Secondary text color.
    pub text_secondary: Color,

    /// Typography settings.
    pub typography: Typography,

    /// ISO currency code (e.g. `MYR`).
    pub currency_code: String,
    /// Currency symbol shown before the balance (e.g. `RM`).
    pub currency_symbol: String,
    /// Formatted wallet balance amount.
    pub balance_amount: String,
    /// Whether the balance is masked on the home screen.
    pub hide_balance: bool,

    /// All editable copy.
    pub texts: TextContent,
    /// Home screen module visibility.
    pub modules: ModuleVisibility,
    /// Layout treatment.
    pub layout: LayoutStyle,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            app_name: "kiple".into(),
            primary: Color::rgb(0x2D, 0x4E, 0xF5),
            secondary: Color::rgb(0x1A, 0x1A, 0x2E),
            accent: Color::rgb(0xF5, 0xD0, 0xC5),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            text_primary: Color::rgb(0x1A, 0x1A, 0x2E),
            text_secondary: Color::rgb(0x6B, 0x72, 0x80),
            typography: Typography::default(),
            currency_code: "MYR".into(),
            currency_symbol: "RM".into(),
            balance_amount: "1,238.00".into(),
            hide_balance: false,
            texts: TextContent::default(),
            modules: ModuleVisibility::default(),
            layout: LayoutStyle::default(),
        }
    }
}

impl ScreenConfig {
    /// The balance string as displayed: `{symbol}{amount}`, or a mask
    /// when [`hide_balance`](Self::hide_balance) is set.
    #[must_use]
    pub fn display_balance(&self) -> String {
        if self.hide_balance {
            "********".to_string()
        } else {
            format!("{}{}", self.currency_symbol, self.balance_amount)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_full_form() {
        assert_eq!(Color::from_hex("#2D4EF5").unwrap(), Color::rgb(45, 78, 245));
        assert_eq!(Color::from_hex(" #6b7280 ").unwrap(), Color::rgb(107, 114, 128));
    }

    #[test]
    fn color_from_hex_short_form() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn color_from_hex_rejects_bad_input() {
        assert!(matches!(
            Color::from_hex("2D4EF5"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#zzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorParseError::BadLength(_))
        ));
    }

    #[test]
    fn color_hex_round_trip() {
        let color = Color::rgb(45, 78, 245);
        assert_eq!(color.hex(), "#2d4ef5");
        assert_eq!(Color::from_hex(&color.hex()).unwrap(), color);
    }

    #[test]
    fn color_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(26, 26, 46)).unwrap();
        assert_eq!(json, "\"#1a1a2e\"");
        let back: Color = serde_json::from_str("\"#1A1A2E\"").unwrap();
        assert_eq!(back, Color::rgb(26, 26, 46));
    }

    #[test]
    fn default_config_matches_stock_branding() {
        let config = ScreenConfig::default();
        assert_eq!(config.app_name, "kiple");
        assert_eq!(config.primary.hex(), "#2d4ef5");
        assert_eq!(config.background.hex(), "#ffffff");
        assert_eq!(config.currency_symbol, "RM");
        assert!(!config.hide_balance);
        assert_eq!(config.typography.scale.h1, 32.0);
        assert_eq!(config.typography.weights.heading, 700);
        assert_eq!(config.layout, LayoutStyle::Minimal);
    }

    #[test]
    fn display_balance_masks_when_hidden() {
        let mut config = ScreenConfig::default();
        assert_eq!(config.display_balance(), "RM1,238.00");
        config.hide_balance = true;
        assert_eq!(config.display_balance(), "********");
    }

    #[test]
    fn all_modules_enabled_by_default() {
        let visibility = ModuleVisibility::default();
        assert_eq!(visibility.enabled().len(), 6);
    }

    #[test]
    fn disabled_modules_are_filtered_in_grid_order() {
        let visibility = ModuleVisibility {
            remittance: false,
            more: false,
            ..ModuleVisibility::default()
        };
        assert_eq!(
            visibility.enabled(),
            vec![
                HomeModule::Transfer,
                HomeModule::Visa,
                HomeModule::PayBills,
                HomeModule::MobileReload,
            ],
        );
    }

    #[test]
    fn module_labels_come_from_text_content() {
        let texts = TextContent::default();
        assert_eq!(HomeModule::PayBills.label(&texts), "Pay Bills");
        assert_eq!(HomeModule::Visa.label(&texts), "VISA");
    }

    #[test]
    fn config_serde_round_trip() {
        let config = ScreenConfig {
            app_name: "acme pay".into(),
            primary: Color::rgb(10, 20, 30),
            hide_balance: true,
            ..ScreenConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ScreenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_config_json_fills_defaults() {
        let config: ScreenConfig =
            serde_json::from_str(r##"{"app_name":"acme","primary":"#ff0000"}"##).unwrap();
        assert_eq!(config.app_name, "acme");
        assert_eq!(config.primary, Color::rgb(255, 0, 0));
        assert_eq!(config.currency_code, "MYR");
        assert_eq!(config.texts.login_title, "Login");
    }

    #[test]
    fn font_family_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FontFamily::Opensans).unwrap();
        assert_eq!(json, "\"opensans\"");
        let back: FontFamily = serde_json::from_str("\"montserrat\"").unwrap();
        assert_eq!(back, FontFamily::Montserrat);
    }
}
