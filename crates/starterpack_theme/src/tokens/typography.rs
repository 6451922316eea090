//! Typography tokens for theming

use serde::Serialize;

/// System UI font stack used for body and heading text
pub const SYSTEM_FONT_STACK: &str =
    "system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

/// Monospace font stack used for code
pub const MONO_FONT_STACK: &str =
    "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', monospace";

/// Font size scale keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl FontSizeToken {
    pub const ALL: [FontSizeToken; 7] = [
        FontSizeToken::Xs,
        FontSizeToken::Sm,
        FontSizeToken::Base,
        FontSizeToken::Lg,
        FontSizeToken::Xl,
        FontSizeToken::Xxl,
        FontSizeToken::Xxxl,
    ];

    /// Multiplier applied to the base font size for this step
    pub const fn ratio(self) -> f32 {
        match self {
            FontSizeToken::Xs => 0.75,
            FontSizeToken::Sm => 0.875,
            FontSizeToken::Base => 1.0,
            FontSizeToken::Lg => 1.125,
            FontSizeToken::Xl => 1.25,
            FontSizeToken::Xxl => 1.5,
            FontSizeToken::Xxxl => 2.0,
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            FontSizeToken::Xs => "xs",
            FontSizeToken::Sm => "sm",
            FontSizeToken::Base => "base",
            FontSizeToken::Lg => "lg",
            FontSizeToken::Xl => "xl",
            FontSizeToken::Xxl => "xxl",
            FontSizeToken::Xxxl => "xxxl",
        }
    }
}

/// Font sizes in pixels
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontSizeTokens {
    pub xs: f32,
    pub sm: f32,
    pub base: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl FontSizeTokens {
    /// Build the scale from the base font size (pixels)
    pub fn from_base(base: f32) -> Self {
        Self {
            xs: base * FontSizeToken::Xs.ratio(),
            sm: base * FontSizeToken::Sm.ratio(),
            base: base * FontSizeToken::Base.ratio(),
            lg: base * FontSizeToken::Lg.ratio(),
            xl: base * FontSizeToken::Xl.ratio(),
            xxl: base * FontSizeToken::Xxl.ratio(),
            xxxl: base * FontSizeToken::Xxxl.ratio(),
        }
    }

    /// Get font size by token key
    pub fn get(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Xs => self.xs,
            FontSizeToken::Sm => self.sm,
            FontSizeToken::Base => self.base,
            FontSizeToken::Lg => self.lg,
            FontSizeToken::Xl => self.xl,
            FontSizeToken::Xxl => self.xxl,
            FontSizeToken::Xxxl => self.xxxl,
        }
    }
}

/// Font family tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontTokens {
    pub body: String,
    pub heading: String,
    pub mono: String,
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            body: SYSTEM_FONT_STACK.to_string(),
            heading: SYSTEM_FONT_STACK.to_string(),
            mono: MONO_FONT_STACK.to_string(),
        }
    }
}
