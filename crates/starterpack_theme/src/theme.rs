//! The generated theme: every token a consumer can read

use crate::config::ThemeConfig;
use crate::tokens::*;
use serde::Serialize;

/// Read-only design tokens derived from a [`ThemeConfig`].
///
/// Always produced by [`crate::generate`]; two equal configs yield equal themes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTheme {
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub font_sizes: FontSizeTokens,
    pub shadows: ShadowTokens,
    pub fonts: FontTokens,
}

impl AppTheme {
    pub fn color(&self, token: ColorToken) -> crate::Color {
        self.colors.get(token)
    }

    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> Radius {
        self.radii.get(token)
    }

    pub fn font_size(&self, token: FontSizeToken) -> f32 {
        self.font_sizes.get(token)
    }

    pub fn shadow(&self, token: ShadowToken) -> &Shadow {
        self.shadows.get(token)
    }

    /// Pretty JSON dump of every token, as shown by the theme editor
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        crate::generate(&ThemeConfig::default())
    }
}
