//! Border radius tokens for theming

use serde::{Serialize, Serializer};

/// Radius scale inputs at or above this value render every step fully rounded
pub const PILL_THRESHOLD: f32 = 500.0;

/// CSS length used for fully rounded corners
pub const FULL_RADIUS_CSS: &str = "9999px";

/// A single corner radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Radius {
    /// Fixed radius in pixels
    Px(f32),
    /// Pill / circular, independent of element size
    Full,
}

impl Radius {
    pub fn is_full(&self) -> bool {
        matches!(self, Radius::Full)
    }

    pub fn to_css(&self) -> String {
        match self {
            Radius::Px(px) => format!("{px}px"),
            Radius::Full => FULL_RADIUS_CSS.to_string(),
        }
    }
}

impl Serialize for Radius {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Radius::Px(px) => serializer.serialize_f32(*px),
            Radius::Full => serializer.serialize_str("full"),
        }
    }
}

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Small,
    Medium,
    Large,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 5] = [
        RadiusToken::None,
        RadiusToken::Small,
        RadiusToken::Medium,
        RadiusToken::Large,
        RadiusToken::Full,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Small => "small",
            RadiusToken::Medium => "medium",
            RadiusToken::Large => "large",
            RadiusToken::Full => "full",
        }
    }
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusTokens {
    pub none: Radius,
    pub small: Radius,
    pub medium: Radius,
    pub large: Radius,
    pub full: Radius,
}

impl RadiusTokens {
    /// Derive the radius scale from the configured base radius.
    ///
    /// Negative or non-finite input is treated as square corners. Anything at
    /// or above [`PILL_THRESHOLD`] makes small/medium/large fully rounded.
    pub fn from_scale(scale: f32) -> Self {
        let scale = if scale.is_nan() { 0.0 } else { scale.max(0.0) };

        if scale >= PILL_THRESHOLD {
            return Self {
                none: Radius::Px(0.0),
                small: Radius::Full,
                medium: Radius::Full,
                large: Radius::Full,
                full: Radius::Full,
            };
        }

        Self {
            none: Radius::Px(0.0),
            small: Radius::Px(scale * 0.5),
            medium: Radius::Px(scale),
            large: Radius::Px(scale * 2.0),
            full: Radius::Full,
        }
    }

    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> Radius {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Small => self.small,
            RadiusToken::Medium => self.medium,
            RadiusToken::Large => self.large,
            RadiusToken::Full => self.full,
        }
    }
}
