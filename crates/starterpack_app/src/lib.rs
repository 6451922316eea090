//! Starterpack application shell
//!
//! Ties the theme store to a config file and a route table:
//!
//! - [`AppConfig`]: `starterpack.toml` with storage, feature and logging sections
//! - [`Router`]: the page table filtered by explicit [`Features`]
//! - [`App`]: start/stop lifecycle owning the [`ThemeStore`](starterpack_store::ThemeStore)

mod app;
pub mod config;
mod features;
pub mod routes;

pub use app::App;
pub use config::{AppConfig, LoggingConfig, StorageConfig, CONFIG_FILE};
pub use features::Features;
pub use routes::{default_routes, Page, Route, Router};
