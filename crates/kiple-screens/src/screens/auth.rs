//! Authentication screens: login (with input-focus variants), the
//! language sheet, biometric prompts, the auth-method chooser, and
//! registration success.

use crate::VIEWPORT_HEIGHT;
use crate::canvas::Canvas;
use crate::config::{Color, ScreenConfig, TextRole};
use crate::screens::shared::{self, SCREEN_PADDING, StatusBarStyle};

const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const INPUT_BORDER: Color = Color::rgb(0xE2, 0xE8, 0xF0);

/// Which login input is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginFocus {
    None,
    Phone,
    Password,
}

/// Render the default login screen.
pub fn login_default(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    login(config, canvas, LoginFocus::None);
}

/// Render the login screen with the phone input focused.
pub fn login_phone_focus(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    login(config, canvas, LoginFocus::Phone);
}

/// Render the login screen with the password input focused.
pub fn login_password_focus(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    login(config, canvas, LoginFocus::Password);
}

fn input_field(
    config: &ScreenConfig,
    canvas: &mut Canvas<'_>,
    y: f32,
    label: &str,
    focused: bool,
    filled: bool,
) {
    let w = canvas.width() - SCREEN_PADDING * 2.0;
    let border = if focused { config.primary } else { INPUT_BORDER };
    let stroke = if focused { 2.0 } else { 1.0 };
    canvas.stroke_round_rect(SCREEN_PADDING, y, w, 52.0, 12.0, stroke, border);

    if filled {
        // Obscured value: a row of dots.
        for i in 0..6 {
            #[allow(clippy::cast_precision_loss)]
            let x = (i as f32).mul_add(12.0, SCREEN_PADDING + 16.0);
            canvas.fill_circle(x, y + 26.0, 3.0, config.text_primary);
        }
    } else {
        canvas.text_bar(
            SCREEN_PADDING + 16.0,
            y + 21.0,
            w - 32.0,
            label,
            TextRole::Body,
            &config.typography,
            config.text_secondary,
        );
    }
}

fn login(config: &ScreenConfig, canvas: &mut Canvas<'_>, focus: LoginFocus) {
    let w = canvas.width();

    canvas.fill_background(config.background);
    shared::status_bar(canvas, config, StatusBarStyle::Dark);

    // Language selector, top right.
    canvas.bar(w - 110.0, 58.0, 86.0, 10.0, config.text_secondary);

    // Logo and headings.
    shared::logo_mark(canvas, config, SCREEN_PADDING + 16.0, 130.0, 32.0);
    canvas.text_bar(
        SCREEN_PADDING,
        176.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.login_title,
        TextRole::H1,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph(
        SCREEN_PADDING,
        224.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.login_subtitle,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );

    // Inputs.
    input_field(
        config,
        canvas,
        300.0,
        "Mobile number",
        focus == LoginFocus::Phone,
        false,
    );
    input_field(
        config,
        canvas,
        368.0,
        "Password",
        focus == LoginFocus::Password,
        focus == LoginFocus::Password,
    );

    // Forgot password, right aligned.
    canvas.text_bar(
        w - SCREEN_PADDING - 110.0,
        436.0,
        110.0,
        &config.texts.forgot_password,
        TextRole::Small,
        &config.typography,
        config.primary,
    );

    // Login button.
    canvas.fill_round_rect(
        SCREEN_PADDING,
        484.0,
        w - SCREEN_PADDING * 2.0,
        52.0,
        26.0,
        config.primary,
    );
    canvas.text_bar_centered(
        w / 2.0,
        505.0,
        120.0,
        &config.texts.login_button,
        TextRole::Body,
        &config.typography,
        WHITE,
    );

    // Sign-up prompt.
    let prompt_w = canvas.text_bar(
        SCREEN_PADDING + 40.0,
        580.0,
        180.0,
        &config.texts.dont_have_account,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );
    canvas.text_bar(
        SCREEN_PADDING + 48.0 + prompt_w,
        580.0,
        80.0,
        &config.texts.signup_link,
        TextRole::Small,
        &config.typography,
        config.primary,
    );
}

/// Render the language selection bottom sheet over a dimmed backdrop.
pub fn language_sheet(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let w = canvas.width();

    canvas.fill_background(config.background);
    canvas.scrim(config.secondary, 0x8C);

    // Bottom sheet with a grab handle.
    let sheet_top = 430.0;
    canvas.fill_round_rect(0.0, sheet_top, w, VIEWPORT_HEIGHT - sheet_top, 24.0, WHITE);
    canvas.fill_rect(0.0, VIEWPORT_HEIGHT - 40.0, w, 40.0, WHITE);
    canvas.bar(w / 2.0 - 20.0, sheet_top + 10.0, 40.0, 5.0, INPUT_BORDER);

    canvas.text_bar(
        SCREEN_PADDING,
        sheet_top + 36.0,
        200.0,
        "Select Language",
        TextRole::H3,
        &config.typography,
        config.text_primary,
    );

    // Language rows with radio indicators; the first row is selected.
    for (i, language) in ["English (UK)", "Bahasa Melayu", "中文", "தமிழ்"]
        .iter()
        .enumerate()
    {
        #[allow(clippy::cast_precision_loss)]
        let y = (i as f32).mul_add(64.0, sheet_top + 84.0);
        canvas.text_bar(
            SCREEN_PADDING,
            y + 10.0,
            180.0,
            language,
            TextRole::Body,
            &config.typography,
            config.text_primary,
        );
        let radio_cx = w - SCREEN_PADDING - 10.0;
        if i == 0 {
            canvas.stroke_circle(radio_cx, y + 14.0, 9.0, 2.0, config.primary);
            canvas.fill_circle(radio_cx, y + 14.0, 5.0, config.primary);
        } else {
            canvas.stroke_circle(radio_cx, y + 14.0, 9.0, 1.5, INPUT_BORDER);
        }
    }
}

/// Biometric prompt flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BiometricKind {
    Touch,
    Face,
}

/// Render the Touch ID prompt.
pub fn touch_id(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    biometric(config, canvas, BiometricKind::Touch);
}

/// Render the Face ID prompt.
pub fn face_id(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    biometric(config, canvas, BiometricKind::Face);
}

fn biometric(config: &ScreenConfig, canvas: &mut Canvas<'_>, kind: BiometricKind) {
    let cx = canvas.width() / 2.0;
    let cy = 320.0;

    canvas.fill_background(config.background);
    canvas.stroke_circle(cx, cy, 45.0, 2.0, config.text_secondary);

    match kind {
        BiometricKind::Touch => {
            // Concentric fingerprint ridges.
            for (radius, stroke) in [(28.0_f32, 3.0_f32), (19.0, 3.0), (10.0, 3.0)] {
                canvas.stroke_circle(cx, cy, radius, stroke, config.text_primary);
            }
        }
        BiometricKind::Face => {
            // Face outline with eyes and mouth.
            canvas.stroke_round_rect(cx - 24.0, cy - 24.0, 48.0, 48.0, 14.0, 3.0, config.text_primary);
            canvas.fill_circle(cx - 10.0, cy - 6.0, 3.0, config.text_primary);
            canvas.fill_circle(cx + 10.0, cy - 6.0, 3.0, config.text_primary);
            canvas.bar(cx - 10.0, cy + 10.0, 20.0, 4.0, config.text_primary);
        }
    }

    let (title, description) = match kind {
        BiometricKind::Touch => (
            &config.texts.touch_id_title,
            &config.texts.touch_id_description,
        ),
        BiometricKind::Face => (
            &config.texts.face_id_title,
            &config.texts.face_id_description,
        ),
    };
    canvas.text_bar_centered(
        cx,
        430.0,
        300.0,
        title,
        TextRole::H3,
        &config.typography,
        config.text_primary,
    );
    canvas.text_bar_centered(
        cx,
        470.0,
        240.0,
        description,
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );
}

/// Render the auth-method chooser: three option cards.
pub fn choose_auth(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    let w = canvas.width();

    canvas.fill_background(config.background);
    shared::status_bar(canvas, config, StatusBarStyle::Dark);

    canvas.text_bar(
        SCREEN_PADDING,
        110.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.choose_auth_title,
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph(
        SCREEN_PADDING,
        156.0,
        w - SCREEN_PADDING * 2.0,
        "Select your preferred authentication method for quick and secure access.",
        TextRole::Small,
        &config.typography,
        config.text_secondary,
    );

    for (i, (label, description)) in [
        ("Touch ID", "Use your fingerprint"),
        ("Face ID", "Use facial recognition"),
        ("PIN", "Use a 6-digit PIN"),
    ]
    .iter()
    .enumerate()
    {
        #[allow(clippy::cast_precision_loss)]
        let y = (i as f32).mul_add(88.0, 250.0);
        canvas.stroke_round_rect(
            SCREEN_PADDING,
            y,
            w - SCREEN_PADDING * 2.0,
            72.0,
            16.0,
            1.0,
            INPUT_BORDER,
        );
        canvas.tint_round_rect(SCREEN_PADDING + 12.0, y + 12.0, 48.0, 48.0, 12.0, config.primary, 0x1A);
        canvas.fill_circle(SCREEN_PADDING + 36.0, y + 36.0, 10.0, config.primary);
        canvas.text_bar(
            SCREEN_PADDING + 74.0,
            y + 20.0,
            180.0,
            label,
            TextRole::Body,
            &config.typography,
            config.text_primary,
        );
        canvas.text_bar(
            SCREEN_PADDING + 74.0,
            y + 44.0,
            200.0,
            description,
            TextRole::Caption,
            &config.typography,
            config.text_secondary,
        );
    }
}

/// Render the registration success screen.
pub fn registration_success(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    success(config, canvas, false);
}

/// Render the registration success screen with the "skip for now" link.
pub fn registration_success_alt(config: &ScreenConfig, canvas: &mut Canvas<'_>) {
    success(config, canvas, true);
}

fn success(config: &ScreenConfig, canvas: &mut Canvas<'_>, with_skip: bool) {
    let w = canvas.width();
    let cx = w / 2.0;

    canvas.fill_background(config.background);

    // Success badge.
    canvas.tint_circle(cx, 290.0, 48.0, config.primary, 0x26);
    canvas.bar(cx - 18.0, 286.0, 36.0, 8.0, config.primary);

    canvas.text_bar_centered(
        cx,
        386.0,
        w - SCREEN_PADDING * 2.0,
        &config.texts.registration_success_title,
        TextRole::H2,
        &config.typography,
        config.text_primary,
    );
    canvas.paragraph_centered(
        cx,
        436.0,
        280.0,
        &config.texts.registration_success_description,
        TextRole::Body,
        &config.typography,
        config.text_secondary,
    );

    let button_y = VIEWPORT_HEIGHT - 132.0;
    canvas.fill_round_rect(
        SCREEN_PADDING,
        button_y,
        w - SCREEN_PADDING * 2.0,
        52.0,
        26.0,
        config.primary,
    );
    canvas.text_bar_centered(
        cx,
        button_y + 21.0,
        160.0,
        &config.texts.registration_success_button,
        TextRole::Body,
        &config.typography,
        WHITE,
    );

    if with_skip {
        canvas.text_bar_centered(
            cx,
            button_y + 72.0,
            120.0,
            "Skip for now",
            TextRole::Small,
            &config.typography,
            config.primary,
        );
    }
}
