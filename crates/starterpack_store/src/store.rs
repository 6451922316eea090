//! The config store
//!
//! [`ThemeStore`] owns the current [`ThemeConfig`], regenerates the
//! [`AppTheme`] on every change, publishes it through a [`ThemeContext`], and
//! persists the latest config once edits have been quiet for the debounce
//! window.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use starterpack_theme::{generate, AppTheme, PartialThemeConfig, ThemeConfig};
use tracing::{debug, error, info, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::context::{ListenerId, ThemeContext};
use crate::debounce::Debouncer;
use crate::error::{Result, StoreError};
use crate::storage::ThemeStorage;

/// Key the config is stored under
pub const DEFAULT_STORAGE_KEY: &str = "starterpack-theme-config";

/// Quiet period before a change is written
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Construction options for [`ThemeStore`]
#[derive(Clone)]
pub struct StoreOptions {
    pub storage_key: String,
    pub debounce: Duration,
    pub clock: Arc<dyn Clock>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            clock: Arc::new(SystemClock),
        }
    }
}

impl fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("storage_key", &self.storage_key)
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl StoreOptions {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Read and validate the stored config under `key`.
///
/// `Ok(None)` means nothing is stored. A record that is not a complete
/// [`ThemeConfig`] is an [`StoreError::InvalidStoredConfig`].
pub fn load_config(storage: &dyn ThemeStorage, key: &str) -> Result<Option<ThemeConfig>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let config = serde_json::from_str(&raw)?;
    Ok(Some(config))
}

/// Owner of the current theme config
pub struct ThemeStore {
    storage: Arc<dyn ThemeStorage>,
    key: String,
    clock: Arc<dyn Clock>,
    config: Arc<ThemeConfig>,
    context: ThemeContext,
    pending: Debouncer<Arc<ThemeConfig>>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("key", &self.key)
            .field("config", &self.config)
            .field("pending", &self.pending.is_pending())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Load the stored config, or the default if it is absent or unusable.
    ///
    /// Never fails: storage and parse errors are logged and the default
    /// config is used instead.
    pub fn open(storage: Arc<dyn ThemeStorage>, options: StoreOptions) -> Self {
        let StoreOptions {
            storage_key: key,
            debounce,
            clock,
        } = options;

        let config = match load_config(storage.as_ref(), &key) {
            Ok(Some(config)) => {
                info!(key = %key, "loaded stored theme config");
                config
            }
            Ok(None) => {
                debug!(key = %key, "no stored theme config, using defaults");
                ThemeConfig::default()
            }
            Err(err) => {
                warn!(key = %key, error = %err, "discarding stored theme config, using defaults");
                ThemeConfig::default()
            }
        };
        report_out_of_range(&config);

        let theme = Arc::new(generate(&config));
        Self {
            storage,
            key,
            clock,
            config: Arc::new(config),
            context: ThemeContext::from_arc(theme),
            pending: Debouncer::new(debounce),
        }
    }

    /// Open with [`StoreOptions::default`]
    pub fn open_default(storage: Arc<dyn ThemeStorage>) -> Self {
        Self::open(storage, StoreOptions::default())
    }

    /// Current config snapshot
    pub fn config(&self) -> Arc<ThemeConfig> {
        Arc::clone(&self.config)
    }

    /// Current derived theme, the same snapshot [`ThemeContext::current`] returns
    pub fn theme(&self) -> Arc<AppTheme> {
        self.context.current()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Merge `partial` into the current config.
    ///
    /// Returns false and does nothing when the merge leaves the config
    /// unchanged. Otherwise the theme is regenerated, listeners are notified
    /// before this returns, and a write is scheduled.
    pub fn update(&mut self, partial: &PartialThemeConfig) -> bool {
        let next = self.config.merged(partial);
        self.apply(next)
    }

    /// Replace the whole config. Same semantics as [`ThemeStore::update`].
    ///
    /// Non-finite numbers keep their current value.
    pub fn replace(&mut self, config: ThemeConfig) -> bool {
        self.apply(config)
    }

    pub fn reset(&mut self) -> bool {
        self.apply(ThemeConfig::default())
    }

    fn apply(&mut self, next: ThemeConfig) -> bool {
        // Non-finite numbers would serialize as null and poison the record
        let next = next.finite_or(&self.config);
        if next == *self.config {
            trace!("theme config unchanged");
            return false;
        }
        report_out_of_range(&next);

        let config = Arc::new(next);
        let theme = Arc::new(generate(&config));
        self.config = Arc::clone(&config);
        self.context.publish(theme);

        let now = self.clock.now();
        if self.pending.schedule(config, now).is_some() {
            trace!("superseded pending theme config write");
        }
        debug!(debounce_ms = self.pending.quiet().as_millis() as u64, "theme config updated");
        true
    }

    /// Write the pending config if its deadline has passed.
    ///
    /// Returns true only if a write happened and succeeded. Failures are
    /// logged and the pending write is dropped; the in-memory config stays.
    pub fn tick(&mut self) -> bool {
        let Some(config) = self.pending.poll(self.clock.now()) else {
            return false;
        };
        match self.persist(&config) {
            Ok(()) => true,
            Err(err) => {
                error!(key = %self.key, error = %err, "failed to save theme config");
                false
            }
        }
    }

    /// Deadline of the pending write, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    pub fn has_pending_write(&self) -> bool {
        self.pending.is_pending()
    }

    /// Write the pending config now, ignoring the debounce window.
    ///
    /// Returns `Ok(false)` when there was nothing to write.
    pub fn flush(&mut self) -> Result<bool> {
        match self.pending.take() {
            Some(config) => self.persist(&config).map(|()| true),
            None => Ok(false),
        }
    }

    fn persist(&self, config: &ThemeConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config).map_err(StoreError::Serialize)?;
        self.storage.set(&self.key, &json)?;
        info!(key = %self.key, "saved theme config");
        Ok(())
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Arc<AppTheme>) + Send + Sync + 'static,
    {
        self.context.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.context.unsubscribe(id)
    }

    /// Consumer handle for reading the theme and listening for changes
    pub fn context(&self) -> ThemeContext {
        self.context.clone()
    }

    /// Tear down: discard any unsaved write and drop all listeners
    pub fn shutdown(mut self) {
        if self.pending.cancel() {
            warn!(key = %self.key, "discarding unsaved theme config on shutdown");
        }
        self.context.clear_listeners();
        info!("theme store shut down");
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        if self.pending.cancel() {
            debug!(key = %self.key, "theme store dropped with an unsaved write");
        }
    }
}

fn report_out_of_range(config: &ThemeConfig) {
    let fields = config.out_of_range();
    if !fields.is_empty() {
        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        warn!(fields = ?names, "theme config has out-of-range values, they will be clamped");
    }
}
