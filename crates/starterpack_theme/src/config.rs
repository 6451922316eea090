//! Theme configuration: the small set of tunable inputs a theme is generated from

use crate::color::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default values and accepted ranges for [`ThemeConfig`] fields
pub mod defaults {
    pub const PRIMARY_HUE: f32 = 220.0;
    pub const SPACING_UNIT: f32 = 8.0;
    pub const RADIUS_SCALE: f32 = 8.0;
    pub const BASE_FONT_SIZE: f32 = 16.0;
    pub const SHADOW_INTENSITY: f32 = 0.15;
    pub const BACKGROUND_COLOR: u32 = 0xFFFFFF;
    pub const TEXT_COLOR: u32 = 0x1A1A1A;
    pub const SHADOW_COLOR: u32 = 0x000000;

    pub const MIN_SPACING_UNIT: f32 = 1.0;
    pub const MAX_SPACING_UNIT: f32 = 256.0;
    pub const MIN_FONT_SIZE: f32 = 6.0;
    pub const MAX_FONT_SIZE: f32 = 96.0;
}

/// Source of truth for theme generation.
///
/// Every field is required when deserializing; unknown fields are rejected so a
/// stale or hand-edited record can never be silently patched with defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    /// Primary hue in degrees (0-360)
    pub primary_hue: f32,
    /// Base spacing unit in pixels
    pub spacing_unit: f32,
    /// Base corner radius in pixels; very large values mean "pill"
    pub radius_scale: f32,
    /// Base font size in pixels
    pub base_font_size: f32,
    /// Shadow strength as a fraction (0.0-1.0)
    pub shadow_intensity: f32,
    pub background_color: Color,
    pub text_color: Color,
    pub shadow_color: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_hue: defaults::PRIMARY_HUE,
            spacing_unit: defaults::SPACING_UNIT,
            radius_scale: defaults::RADIUS_SCALE,
            base_font_size: defaults::BASE_FONT_SIZE,
            shadow_intensity: defaults::SHADOW_INTENSITY,
            background_color: Color::from_hex(defaults::BACKGROUND_COLOR),
            text_color: Color::from_hex(defaults::TEXT_COLOR),
            shadow_color: Color::from_hex(defaults::SHADOW_COLOR),
        }
    }
}

impl ThemeConfig {
    /// Apply a partial update, replacing each field that is set.
    ///
    /// NaN and infinite numbers are ignored: they have no JSON form, so
    /// accepting them would make the stored record unreadable.
    pub fn merged(&self, partial: &PartialThemeConfig) -> Self {
        let number = |value: Option<f32>, current: f32| {
            value.filter(|v| v.is_finite()).unwrap_or(current)
        };

        Self {
            primary_hue: number(partial.primary_hue, self.primary_hue),
            spacing_unit: number(partial.spacing_unit, self.spacing_unit),
            radius_scale: number(partial.radius_scale, self.radius_scale),
            base_font_size: number(partial.base_font_size, self.base_font_size),
            shadow_intensity: number(partial.shadow_intensity, self.shadow_intensity),
            background_color: partial.background_color.unwrap_or(self.background_color),
            text_color: partial.text_color.unwrap_or(self.text_color),
            shadow_color: partial.shadow_color.unwrap_or(self.shadow_color),
        }
    }

    /// Copy where every non-finite number is taken from `fallback`
    pub fn finite_or(&self, fallback: &ThemeConfig) -> Self {
        let number = |value: f32, fallback: f32| if value.is_finite() { value } else { fallback };

        Self {
            primary_hue: number(self.primary_hue, fallback.primary_hue),
            spacing_unit: number(self.spacing_unit, fallback.spacing_unit),
            radius_scale: number(self.radius_scale, fallback.radius_scale),
            base_font_size: number(self.base_font_size, fallback.base_font_size),
            shadow_intensity: number(self.shadow_intensity, fallback.shadow_intensity),
            ..self.clone()
        }
    }

    /// Copy with every numeric field forced into the range the generator accepts.
    ///
    /// Non-finite numbers fall back to the field default, hue wraps around the
    /// color wheel, and everything else is clamped.
    pub fn clamped(&self) -> Self {
        fn finite_or(value: f32, fallback: f32) -> f32 {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        }

        Self {
            primary_hue: finite_or(self.primary_hue, defaults::PRIMARY_HUE).rem_euclid(360.0),
            spacing_unit: finite_or(self.spacing_unit, defaults::SPACING_UNIT)
                .clamp(defaults::MIN_SPACING_UNIT, defaults::MAX_SPACING_UNIT),
            radius_scale: finite_or(self.radius_scale, defaults::RADIUS_SCALE).max(0.0),
            base_font_size: finite_or(self.base_font_size, defaults::BASE_FONT_SIZE)
                .clamp(defaults::MIN_FONT_SIZE, defaults::MAX_FONT_SIZE),
            shadow_intensity: finite_or(self.shadow_intensity, defaults::SHADOW_INTENSITY)
                .clamp(0.0, 1.0),
            ..self.clone()
        }
    }

    /// Fields whose value will be adjusted by [`ThemeConfig::clamped`]
    pub fn out_of_range(&self) -> Vec<ConfigField> {
        let clamped = self.clamped();
        let mut fields = Vec::new();
        let numeric = [
            (ConfigField::PrimaryHue, self.primary_hue, clamped.primary_hue),
            (ConfigField::SpacingUnit, self.spacing_unit, clamped.spacing_unit),
            (ConfigField::RadiusScale, self.radius_scale, clamped.radius_scale),
            (ConfigField::BaseFontSize, self.base_font_size, clamped.base_font_size),
            (ConfigField::ShadowIntensity, self.shadow_intensity, clamped.shadow_intensity),
        ];
        for (field, raw, adjusted) in numeric {
            // 360° wraps to 0° but is still a valid slider position
            let wrapped_full_turn = field == ConfigField::PrimaryHue && raw == 360.0;
            if raw != adjusted && !wrapped_full_turn {
                fields.push(field);
            }
        }
        fields
    }

    /// Read a single field as its display string
    pub fn field_value(&self, field: ConfigField) -> String {
        match field {
            ConfigField::PrimaryHue => self.primary_hue.to_string(),
            ConfigField::SpacingUnit => self.spacing_unit.to_string(),
            ConfigField::RadiusScale => self.radius_scale.to_string(),
            ConfigField::BaseFontSize => self.base_font_size.to_string(),
            ConfigField::ShadowIntensity => self.shadow_intensity.to_string(),
            ConfigField::BackgroundColor => self.background_color.to_css(),
            ConfigField::TextColor => self.text_color.to_css(),
            ConfigField::ShadowColor => self.shadow_color.to_css(),
        }
    }
}

/// Partial update: `None` fields are left untouched by [`ThemeConfig::merged`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_hue: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_unit: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
}

impl PartialThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn primary_hue(mut self, value: f32) -> Self {
        self.primary_hue = Some(value);
        self
    }

    pub fn spacing_unit(mut self, value: f32) -> Self {
        self.spacing_unit = Some(value);
        self
    }

    pub fn radius_scale(mut self, value: f32) -> Self {
        self.radius_scale = Some(value);
        self
    }

    pub fn base_font_size(mut self, value: f32) -> Self {
        self.base_font_size = Some(value);
        self
    }

    pub fn shadow_intensity(mut self, value: f32) -> Self {
        self.shadow_intensity = Some(value);
        self
    }

    pub fn background_color(mut self, value: Color) -> Self {
        self.background_color = Some(value);
        self
    }

    pub fn text_color(mut self, value: Color) -> Self {
        self.text_color = Some(value);
        self
    }

    pub fn shadow_color(mut self, value: Color) -> Self {
        self.shadow_color = Some(value);
        self
    }

    /// Build a single-field update from a textual value, e.g. `("primaryHue", "200")`
    pub fn from_field(field: ConfigField, raw: &str) -> Result<Self, FieldValueError> {
        let number = || {
            raw.trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FieldValueError::NotANumber {
                    field,
                    value: raw.to_string(),
                })
        };
        let color = || {
            raw.parse::<Color>()
                .map_err(|source| FieldValueError::InvalidColor { field, source })
        };

        let partial = Self::new();
        Ok(match field {
            ConfigField::PrimaryHue => partial.primary_hue(number()?),
            ConfigField::SpacingUnit => partial.spacing_unit(number()?),
            ConfigField::RadiusScale => partial.radius_scale(number()?),
            ConfigField::BaseFontSize => partial.base_font_size(number()?),
            ConfigField::ShadowIntensity => partial.shadow_intensity(number()?),
            ConfigField::BackgroundColor => partial.background_color(color()?),
            ConfigField::TextColor => partial.text_color(color()?),
            ConfigField::ShadowColor => partial.shadow_color(color()?),
        })
    }
}

/// Field names of [`ThemeConfig`], for diagnostics and textual editing
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ConfigField {
    PrimaryHue,
    SpacingUnit,
    RadiusScale,
    BaseFontSize,
    ShadowIntensity,
    BackgroundColor,
    TextColor,
    ShadowColor,
}

impl ConfigField {
    pub const ALL: [ConfigField; 8] = [
        ConfigField::PrimaryHue,
        ConfigField::SpacingUnit,
        ConfigField::RadiusScale,
        ConfigField::BaseFontSize,
        ConfigField::ShadowIntensity,
        ConfigField::BackgroundColor,
        ConfigField::TextColor,
        ConfigField::ShadowColor,
    ];

    /// Name as it appears in the stored JSON record
    pub fn name(self) -> &'static str {
        match self {
            ConfigField::PrimaryHue => "primaryHue",
            ConfigField::SpacingUnit => "spacingUnit",
            ConfigField::RadiusScale => "radiusScale",
            ConfigField::BaseFontSize => "baseFontSize",
            ConfigField::ShadowIntensity => "shadowIntensity",
            ConfigField::BackgroundColor => "backgroundColor",
            ConfigField::TextColor => "textColor",
            ConfigField::ShadowColor => "shadowColor",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigField {
    type Err = FieldValueError;

    /// Accepts the JSON name, snake_case or kebab-case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        ConfigField::ALL
            .into_iter()
            .find(|field| field.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| FieldValueError::UnknownField(s.to_string()))
    }
}

/// Error building a [`PartialThemeConfig`] from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldValueError {
    #[error("unknown config field: {0}")]
    UnknownField(String),

    #[error("{field} expects a finite number, got {value:?}")]
    NotANumber { field: ConfigField, value: String },

    #[error("{field} expects a color: {source}")]
    InvalidColor {
        field: ConfigField,
        #[source]
        source: ColorParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_replaces_only_set_fields() {
        let base = ThemeConfig::default();
        let merged = base.merged(&PartialThemeConfig::new().primary_hue(10.0).radius_scale(0.0));

        assert_eq!(merged.primary_hue, 10.0);
        assert_eq!(merged.radius_scale, 0.0);
        assert_eq!(merged.spacing_unit, base.spacing_unit);
        assert_eq!(merged.text_color, base.text_color);
    }

    #[test]
    fn test_empty_merge_is_identity() {
        let base = ThemeConfig::default();
        assert!(PartialThemeConfig::new().is_empty());
        assert_eq!(base.merged(&PartialThemeConfig::new()), base);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_value(ThemeConfig::default()).unwrap();
        assert_eq!(json["primaryHue"], 220.0);
        assert_eq!(json["backgroundColor"], "#ffffff");
        assert_eq!(json["textColor"], "#1a1a1a");
        assert_eq!(json["shadowColor"], "#000000");
    }

    #[test]
    fn test_deserialize_rejects_missing_and_unknown_fields() {
        let missing = r##"{"primaryHue": 1, "spacingUnit": 8}"##;
        assert!(serde_json::from_str::<ThemeConfig>(missing).is_err());

        let mut value = serde_json::to_value(ThemeConfig::default()).unwrap();
        value["legacyField"] = serde_json::json!(true);
        assert!(serde_json::from_value::<ThemeConfig>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_color() {
        let mut value = serde_json::to_value(ThemeConfig::default()).unwrap();
        value["textColor"] = serde_json::json!("#zzzzzz");
        assert!(serde_json::from_value::<ThemeConfig>(value).is_err());
    }

    #[test]
    fn test_partial_from_json_patch() {
        let partial: PartialThemeConfig =
            serde_json::from_str(r##"{"shadowIntensity": 0.5, "textColor": "#333"}"##).unwrap();
        assert_eq!(partial.shadow_intensity, Some(0.5));
        assert_eq!(partial.text_color.map(|c| c.to_css()), Some("#333333".to_string()));
        assert_eq!(partial.primary_hue, None);
    }

    #[test]
    fn test_clamped_handles_degenerate_numbers() {
        let config = ThemeConfig {
            primary_hue: -30.0,
            spacing_unit: -4.0,
            radius_scale: f32::NAN,
            base_font_size: 1000.0,
            shadow_intensity: f32::INFINITY,
            ..ThemeConfig::default()
        };
        let clamped = config.clamped();

        assert_eq!(clamped.primary_hue, 330.0);
        assert_eq!(clamped.spacing_unit, defaults::MIN_SPACING_UNIT);
        assert_eq!(clamped.radius_scale, defaults::RADIUS_SCALE);
        assert_eq!(clamped.base_font_size, defaults::MAX_FONT_SIZE);
        assert_eq!(clamped.shadow_intensity, defaults::SHADOW_INTENSITY);
    }

    #[test]
    fn test_out_of_range_reports_adjusted_fields() {
        assert!(ThemeConfig::default().out_of_range().is_empty());

        let full_turn = ThemeConfig {
            primary_hue: 360.0,
            ..ThemeConfig::default()
        };
        assert!(full_turn.out_of_range().is_empty());

        let config = ThemeConfig {
            spacing_unit: -1.0,
            shadow_intensity: 1.5,
            radius_scale: 9999.0,
            ..ThemeConfig::default()
        };
        assert_eq!(
            config.out_of_range(),
            vec![ConfigField::SpacingUnit, ConfigField::ShadowIntensity]
        );
    }

    #[test]
    fn test_field_names_parse_in_several_spellings() {
        assert_eq!("primaryHue".parse::<ConfigField>().unwrap(), ConfigField::PrimaryHue);
        assert_eq!("primary_hue".parse::<ConfigField>().unwrap(), ConfigField::PrimaryHue);
        assert_eq!("shadow-color".parse::<ConfigField>().unwrap(), ConfigField::ShadowColor);
        assert!(matches!(
            "hue".parse::<ConfigField>(),
            Err(FieldValueError::UnknownField(_))
        ));
    }

    #[test]
    fn test_from_field_parses_values() {
        let partial = PartialThemeConfig::from_field(ConfigField::SpacingUnit, " 12 ").unwrap();
        assert_eq!(partial, PartialThemeConfig::new().spacing_unit(12.0));

        let partial = PartialThemeConfig::from_field(ConfigField::BackgroundColor, "#000").unwrap();
        assert_eq!(partial.background_color, Some(Color::BLACK));

        assert!(matches!(
            PartialThemeConfig::from_field(ConfigField::BaseFontSize, "large"),
            Err(FieldValueError::NotANumber { .. })
        ));
        assert!(matches!(
            PartialThemeConfig::from_field(ConfigField::TextColor, "blue"),
            Err(FieldValueError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_field_value_reads_display_form() {
        let config = ThemeConfig {
            spacing_unit: 12.5,
            ..ThemeConfig::default()
        };
        assert_eq!(config.field_value(ConfigField::PrimaryHue), "220");
        assert_eq!(config.field_value(ConfigField::SpacingUnit), "12.5");
        assert_eq!(config.field_value(ConfigField::TextColor), "#1a1a1a");

        // Display form parses back to the same value
        for field in ConfigField::ALL {
            let partial = PartialThemeConfig::from_field(field, &config.field_value(field)).unwrap();
            assert_eq!(config.merged(&partial), config, "{field}");
        }
    }

    #[test]
    fn test_from_field_rejects_non_finite_numbers() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert!(
                matches!(
                    PartialThemeConfig::from_field(ConfigField::BaseFontSize, raw),
                    Err(FieldValueError::NotANumber { .. })
                ),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn test_merge_ignores_non_finite_numbers() {
        let base = ThemeConfig {
            primary_hue: 42.0,
            ..ThemeConfig::default()
        };
        let partial = PartialThemeConfig::new()
            .primary_hue(f32::NAN)
            .base_font_size(f32::INFINITY)
            .spacing_unit(12.0);

        let merged = base.merged(&partial);
        assert_eq!(merged.primary_hue, 42.0);
        assert_eq!(merged.base_font_size, defaults::BASE_FONT_SIZE);
        assert_eq!(merged.spacing_unit, 12.0);
        assert_eq!(base.merged(&PartialThemeConfig::new().primary_hue(f32::NAN)), base);
    }

    #[test]
    fn test_finite_or_replaces_only_non_finite() {
        let fallback = ThemeConfig {
            radius_scale: 3.0,
            ..ThemeConfig::default()
        };
        let config = ThemeConfig {
            primary_hue: 90.0,
            radius_scale: f32::NEG_INFINITY,
            shadow_intensity: f32::NAN,
            ..ThemeConfig::default()
        };

        let fixed = config.finite_or(&fallback);
        assert_eq!(fixed.primary_hue, 90.0);
        assert_eq!(fixed.radius_scale, 3.0);
        assert_eq!(fixed.shadow_intensity, fallback.shadow_intensity);
        assert_eq!(fixed.finite_or(&fallback), fixed);
    }
}
