//! Application lifecycle
//!
//! An [`App`] is built once at startup and torn down with [`App::stop`].
//! It owns the theme store; consumers borrow it or take a context handle.
//!
//! Edits are saved once they have been quiet for the debounce window, but
//! only while something drives the app: call [`App::save_when_quiet`] from
//! the event loop (or [`App::tick`] at [`App::next_deadline`]). `stop`
//! discards an edit that has not been saved yet.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use starterpack_store::{FileStorage, ThemeContext, ThemeStorage, ThemeStore};

use crate::config::AppConfig;
use crate::routes::{default_routes, Router};

pub struct App {
    config: AppConfig,
    store: ThemeStore,
    router: Router,
}

impl App {
    /// Start with file storage under the configured (or platform) directory
    pub fn start(config: AppConfig) -> Result<Self> {
        let dir = config
            .storage
            .resolved_dir()
            .context("No storage directory available; set [storage] dir")?;
        info!(dir = %dir.display(), "using file storage");
        Ok(Self::with_storage(config, Arc::new(FileStorage::new(dir))))
    }

    /// Start against an arbitrary storage backend
    pub fn with_storage(config: AppConfig, storage: Arc<dyn ThemeStorage>) -> Self {
        let store = ThemeStore::open(storage, config.storage.store_options());
        let router = Router::new(default_routes(), &config.features);
        info!(
            routes = router.routes().len(),
            dev_pages = config.features.dev_pages,
            "app started"
        );
        Self {
            config,
            store,
            router,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ThemeStore {
        &mut self.store
    }

    pub fn context(&self) -> ThemeContext {
        self.store.context()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// When the pending edit is due to be saved, if there is one
    pub fn next_deadline(&self) -> Option<Instant> {
        self.store.next_deadline()
    }

    /// Save the pending edit if its quiet window has elapsed
    pub fn tick(&mut self) -> bool {
        self.store.tick()
    }

    /// Wait out the quiet window of the pending edit, then save it.
    ///
    /// Returns false at once when nothing is pending, and false after the
    /// wait if the write failed.
    pub async fn save_when_quiet(&mut self) -> bool {
        let Some(deadline) = self.store.next_deadline() else {
            return false;
        };
        debug!("waiting for edits to go quiet");
        tokio::time::sleep_until(deadline.into()).await;
        self.store.tick()
    }

    /// Shut the store down, discarding any unsaved edit
    pub fn stop(self) {
        self.store.shutdown();
        info!("app stopped");
    }
}
