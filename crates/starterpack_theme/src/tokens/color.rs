//! Color tokens for theming

use crate::color::Color;
use serde::Serialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    Accent,

    // Surface colors
    Background,
    Surface,
    Hover,

    // Text colors
    Text,
    TextMuted,

    // Outline colors
    Border,
    FocusRing,

    Shadow,
}

impl ColorToken {
    /// Every color token, in declaration order
    pub const ALL: [ColorToken; 13] = [
        ColorToken::Primary,
        ColorToken::PrimaryHover,
        ColorToken::PrimaryActive,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::Hover,
        ColorToken::Text,
        ColorToken::TextMuted,
        ColorToken::Border,
        ColorToken::FocusRing,
        ColorToken::Shadow,
    ];

    /// Kebab-case name used for CSS variables
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryHover => "primary-hover",
            ColorToken::PrimaryActive => "primary-active",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::Hover => "hover",
            ColorToken::Text => "text",
            ColorToken::TextMuted => "text-muted",
            ColorToken::Border => "border",
            ColorToken::FocusRing => "focus-ring",
            ColorToken::Shadow => "shadow",
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub accent: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub hover: Color,

    // Text colors
    pub text: Color,
    pub text_muted: Color,

    // Outline colors
    pub border: Color,
    pub focus_ring: Color,

    pub shadow: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Hover => self.hover,
            ColorToken::Text => self.text,
            ColorToken::TextMuted => self.text_muted,
            ColorToken::Border => self.border,
            ColorToken::FocusRing => self.focus_ring,
            ColorToken::Shadow => self.shadow,
        }
    }
}
