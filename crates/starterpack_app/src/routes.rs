//! Page routes
//!
//! The route table is plain data. [`Router::new`] filters it against an
//! explicit [`Features`] value so dev-only pages never depend on a global.

use serde::Serialize;
use std::fmt;

use crate::features::Features;

/// Pages the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Docs,
    ThemeEditor,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Docs => "Docs",
            Page::ThemeEditor => "Theme Editor",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub label: String,
    pub page: Page,
    /// Only routed when [`Features::dev_pages`] is set
    pub dev_only: bool,
}

impl Route {
    pub fn new(path: impl Into<String>, label: impl Into<String>, page: Page) -> Self {
        Self {
            path: normalize(&path.into()).to_string(),
            label: label.into(),
            page,
            dev_only: false,
        }
    }

    pub fn dev_only(mut self) -> Self {
        self.dev_only = true;
        self
    }

    fn enabled(&self, features: &Features) -> bool {
        !self.dev_only || features.dev_pages
    }
}

/// The built-in route table
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/", "Home", Page::Home),
        Route::new("/docs", "Docs", Page::Docs),
        Route::new("/theme-editor", "Theme Editor", Page::ThemeEditor).dev_only(),
    ]
}

/// Strip trailing slashes, keeping the root as `/`
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Routes available under a given feature set
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: impl IntoIterator<Item = Route>, features: &Features) -> Self {
        let routes: Vec<Route> = routes.into_iter().filter(|r| r.enabled(features)).collect();
        tracing::debug!(
            count = routes.len(),
            dev_pages = features.dev_pages,
            "router built"
        );
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path)
    }
}
