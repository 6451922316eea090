//! Feature switches passed to the router

use serde::{Deserialize, Serialize};

/// Explicit feature set; nothing here is read from the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Features {
    /// Expose developer-only pages such as the theme editor
    #[serde(default)]
    pub dev_pages: bool,
}

impl Features {
    /// Everything enabled
    pub fn dev() -> Self {
        Self { dev_pages: true }
    }

    pub fn with_dev_pages(mut self, enabled: bool) -> Self {
        self.dev_pages = enabled;
        self
    }
}
