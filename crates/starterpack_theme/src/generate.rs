//! Theme generator: a pure mapping from [`ThemeConfig`] to [`AppTheme`]

use crate::color::Color;
use crate::config::ThemeConfig;
use crate::theme::AppTheme;
use crate::tokens::*;

/// Saturation shared by the brand colors
const BRAND_SATURATION: f32 = 0.70;

/// Saturation of the rotated secondary and accent hues
const ROTATED_SATURATION: f32 = 0.60;

/// Hue offset of the secondary color (analogous)
const SECONDARY_ROTATION: f32 = 30.0;

/// Hue offset of the accent color (complementary)
const ACCENT_ROTATION: f32 = 180.0;

/// How far the surface color leans toward the primary
const SURFACE_TINT: f32 = 0.04;

/// How far muted text leans toward the background
const MUTED_TEXT_MIX: f32 = 0.35;

const FOCUS_RING_ALPHA: f32 = 0.4;

/// Lightness used for outline and hover colors on one kind of background
struct NeutralLightness {
    border: f32,
    hover: f32,
}

const ON_LIGHT: NeutralLightness = NeutralLightness {
    border: 0.85,
    hover: 0.95,
};

const ON_DARK: NeutralLightness = NeutralLightness {
    border: 0.30,
    hover: 0.18,
};

/// Derive the full token set from a config.
///
/// Total for any input: numeric fields are passed through
/// [`ThemeConfig::clamped`] first, so negative, huge or non-finite values still
/// produce a complete theme. No I/O, no hidden state.
pub fn generate(config: &ThemeConfig) -> AppTheme {
    let config = config.clamped();

    AppTheme {
        colors: generate_colors(&config),
        spacing: SpacingTokens::from_unit(config.spacing_unit),
        radii: RadiusTokens::from_scale(config.radius_scale),
        font_sizes: FontSizeTokens::from_base(config.base_font_size),
        shadows: ShadowTokens::from_intensity(config.shadow_color, config.shadow_intensity),
        fonts: FontTokens::default(),
    }
}

fn generate_colors(config: &ThemeConfig) -> ColorTokens {
    let hue = config.primary_hue;
    let background = config.background_color;
    let text = config.text_color;

    let primary = Color::from_hsl(hue, BRAND_SATURATION, 0.50);
    let neutral = if background.is_dark() { ON_DARK } else { ON_LIGHT };

    ColorTokens {
        primary,
        primary_hover: Color::from_hsl(hue, BRAND_SATURATION, 0.42),
        primary_active: Color::from_hsl(hue, BRAND_SATURATION, 0.36),
        secondary: Color::from_hsl(hue + SECONDARY_ROTATION, ROTATED_SATURATION, 0.50),
        accent: Color::from_hsl(hue + ACCENT_ROTATION, ROTATED_SATURATION, 0.50),
        background,
        surface: Color::lerp(&background, &primary, SURFACE_TINT),
        hover: Color::from_hsl(hue, 0.30, neutral.hover),
        text,
        text_muted: Color::lerp(&text, &background, MUTED_TEXT_MIX),
        border: Color::from_hsl(hue, 0.15, neutral.border),
        focus_ring: primary.with_alpha(FOCUS_RING_ALPHA),
        shadow: config.shadow_color,
    }
}
