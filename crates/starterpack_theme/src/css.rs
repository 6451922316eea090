//! CSS custom property export
//!
//! Bridges a generated [`AppTheme`] into stylesheet land. Variable names are
//! stable: `--color-*`, `--spacing-*`, `--radius-*`, `--font-size-*`,
//! `--shadow-*` and `--font-*`.

use crate::theme::AppTheme;
use crate::tokens::*;
use std::collections::BTreeMap;
use std::fmt::Write;

impl AppTheme {
    /// CSS variable map, keyed by variable name without the `--` prefix
    pub fn to_css_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();

        for token in ColorToken::ALL {
            vars.insert(
                format!("color-{}", token.css_name()),
                self.colors.get(token).to_css(),
            );
        }
        for token in SpacingToken::ALL {
            vars.insert(
                format!("spacing-{}", token.css_name()),
                format!("{}px", self.spacing.get(token)),
            );
        }
        for token in RadiusToken::ALL {
            vars.insert(
                format!("radius-{}", token.css_name()),
                self.radii.get(token).to_css(),
            );
        }
        for token in FontSizeToken::ALL {
            vars.insert(
                format!("font-size-{}", token.css_name()),
                format!("{}px", self.font_sizes.get(token)),
            );
        }
        for token in ShadowToken::ALL {
            vars.insert(
                format!("shadow-{}", token.css_name()),
                self.shadows.get(token).to_css(),
            );
        }

        vars.insert("font-body".into(), self.fonts.body.clone());
        vars.insert("font-heading".into(), self.fonts.heading.clone());
        vars.insert("font-mono".into(), self.fonts.mono.clone());

        vars
    }

    /// Render a stylesheet rule declaring every variable under `selector`
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{selector} {{");
        for (name, value) in self.to_css_variables() {
            let _ = writeln!(out, "  --{name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}
