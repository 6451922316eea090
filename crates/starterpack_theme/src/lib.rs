//! Starterpack Theme Engine
//!
//! A generative theming engine: a handful of tunable inputs in, a complete set
//! of design tokens out.
//!
//! # Overview
//!
//! - [`ThemeConfig`]: the source of truth (primary hue, spacing unit, radius
//!   scale, base font size, shadow intensity and three override colors)
//! - [`generate`]: a pure, total function deriving an [`AppTheme`]
//! - [`AppTheme`]: read-only tokens for colors, spacing, radii, font sizes,
//!   shadows and font families
//!
//! # Quick Start
//!
//! ```rust
//! use starterpack_theme::{generate, PartialThemeConfig, Radius, ThemeConfig};
//!
//! let config = ThemeConfig::default().merged(&PartialThemeConfig::new().radius_scale(9999.0));
//! let theme = generate(&config);
//!
//! assert_eq!(theme.radii.full, Radius::Full);
//! assert!(theme.spacing.xs < theme.spacing.xl);
//! ```
//!
//! # Derivation
//!
//! - **Colors**: HSL around the primary hue, with fixed saturation and
//!   lightness per role; background, text and shadow colors pass through
//! - **Spacing** / **font sizes**: fixed ratios over the base value
//! - **Radii**: proportional to the radius scale, fully rounded past
//!   [`PILL_THRESHOLD`]
//! - **Shadows**: opacity and blur scale with intensity; zero means none
//!
//! Inputs outside the slider ranges are clamped, never rejected.

mod color;
mod config;
mod css;
mod generate;
mod theme;
pub mod tokens;

pub use color::{Color, ColorParseError};
pub use config::{defaults, ConfigField, FieldValueError, PartialThemeConfig, ThemeConfig};
pub use generate::generate;
pub use theme::AppTheme;
pub use tokens::*;
