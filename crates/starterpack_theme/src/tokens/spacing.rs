//! Spacing tokens for theming

use serde::Serialize;

/// Spacing scale keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 5] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
    ];

    /// Multiplier applied to the spacing unit for this step
    pub const fn ratio(self) -> f32 {
        match self {
            SpacingToken::Xs => 0.5,
            SpacingToken::Sm => 1.0,
            SpacingToken::Md => 2.0,
            SpacingToken::Lg => 3.0,
            SpacingToken::Xl => 4.0,
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
        }
    }
}

/// Spacing scale in pixels
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl SpacingTokens {
    /// Build the scale from a base unit (pixels)
    pub fn from_unit(unit: f32) -> Self {
        Self {
            xs: unit * SpacingToken::Xs.ratio(),
            sm: unit * SpacingToken::Sm.ratio(),
            md: unit * SpacingToken::Md.ratio(),
            lg: unit * SpacingToken::Lg.ratio(),
            xl: unit * SpacingToken::Xl.ratio(),
        }
    }

    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
        }
    }
}
