//! Design tokens for theming
//!
//! Tokens are the atomic values a generated theme is made of:
//! - Colors
//! - Spacing (margins, padding)
//! - Border radii
//! - Font sizes and families
//! - Shadows

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
