//! Shadow tokens for theming

use crate::color::Color;
use serde::Serialize;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 3] = [ShadowToken::Sm, ShadowToken::Md, ShadowToken::Lg];

    pub fn css_name(self) -> &'static str {
        match self {
            ShadowToken::Sm => "sm",
            ShadowToken::Md => "md",
            ShadowToken::Lg => "lg",
        }
    }
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// A shadow is visible when its color has any alpha
    pub fn is_visible(&self) -> bool {
        self.color.a > 0.0
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        if !self.is_visible() {
            return "none".to_string();
        }
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
        }
    }

    /// Shadow set with nothing visible
    pub fn none() -> Self {
        Self {
            sm: Shadow::none(),
            md: Shadow::none(),
            lg: Shadow::none(),
        }
    }

    /// Derive shadows from a base color and an intensity in `0.0..=1.0`.
    ///
    /// Opacity scales linearly with intensity; offsets and blur grow from half
    /// size at low intensity to full size at 1.0. Zero intensity is no shadow.
    pub fn from_intensity(color: Color, intensity: f32) -> Self {
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        if intensity == 0.0 {
            return Self::none();
        }

        let size = 0.5 + 0.5 * intensity;
        let tint = |factor: f32| color.with_alpha(color.a * factor * intensity);

        Self {
            sm: Shadow::new(0.0, 1.0, 2.0 * size, 0.0, tint(0.6)),
            md: Shadow::new(0.0, 4.0 * size, 8.0 * size, -1.0, tint(0.8)),
            lg: Shadow::new(0.0, 10.0 * size, 20.0 * size, -3.0, tint(1.0)),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intensity_is_invisible() {
        let shadows = ShadowTokens::from_intensity(Color::BLACK, 0.0);
        for token in ShadowToken::ALL {
            let shadow = shadows.get(token);
            assert!(!shadow.is_visible());
            assert_eq!(shadow.to_css(), "none");
        }
    }

    #[test]
    fn test_alpha_grows_with_step_and_intensity() {
        let soft = ShadowTokens::from_intensity(Color::BLACK, 0.25);
        let hard = ShadowTokens::from_intensity(Color::BLACK, 1.0);

        assert!(soft.sm.color.a < soft.md.color.a);
        assert!(soft.md.color.a < soft.lg.color.a);
        assert!(soft.lg.color.a < hard.lg.color.a);
        assert!(soft.lg.blur < hard.lg.blur);
        assert_eq!(hard.lg.color.a, 1.0);
    }

    #[test]
    fn test_out_of_range_intensity_is_clamped() {
        assert_eq!(
            ShadowTokens::from_intensity(Color::BLACK, 7.0),
            ShadowTokens::from_intensity(Color::BLACK, 1.0)
        );
        assert_eq!(
            ShadowTokens::from_intensity(Color::BLACK, -1.0),
            ShadowTokens::none()
        );
    }

    #[test]
    fn test_css_rendering() {
        let shadows = ShadowTokens::from_intensity(Color::BLACK, 1.0);
        assert_eq!(shadows.lg.to_css(), "0px 10px 20px -3px #000000");
        assert_eq!(shadows.sm.to_css(), "0px 1px 2px 0px rgba(0, 0, 0, 0.6)");
    }
}
