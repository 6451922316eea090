//! Starterpack Config Store
//!
//! Holds the current [`ThemeConfig`](starterpack_theme::ThemeConfig), keeps
//! the derived [`AppTheme`](starterpack_theme::AppTheme) in sync with it, and
//! persists it to durable storage after a quiet period.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use starterpack_store::{MemoryStorage, ThemeStore};
//! use starterpack_theme::PartialThemeConfig;
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let mut store = ThemeStore::open_default(storage.clone());
//!
//! let ctx = store.context();
//! store.update(&PartialThemeConfig::new().primary_hue(140.0));
//! assert!(std::sync::Arc::ptr_eq(&ctx.current(), &store.theme()));
//!
//! store.flush().unwrap();
//! assert_eq!(storage.write_count(), 1);
//! ```
//!
//! Nothing runs in the background. Event loops call [`ThemeStore::tick`]
//! at [`ThemeStore::next_deadline`] to perform debounced writes.

pub mod clock;
mod context;
mod debounce;
mod error;
pub mod storage;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use context::{ListenerId, ThemeContext};
pub use debounce::Debouncer;
pub use error::{Result, StorageError, StoreError};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage};
pub use store::{load_config, StoreOptions, ThemeStore, DEFAULT_DEBOUNCE, DEFAULT_STORAGE_KEY};
