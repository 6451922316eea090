//! Theme propagation to consumers
//!
//! A [`ThemeContext`] is the read side of the store. Consumers hold a clone,
//! read the current [`AppTheme`] snapshot, and register listeners. Only the
//! store can publish.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use starterpack_theme::AppTheme;
use tracing::{debug, warn};

/// Handle returned by [`ThemeContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

type Listener = Arc<dyn Fn(&Arc<AppTheme>) + Send + Sync>;

struct Inner {
    current: RwLock<Arc<AppTheme>>,
    listeners: RwLock<FxHashMap<ListenerId, Listener>>,
    next_id: AtomicU64,
}

/// Shared, clonable view of the current theme
#[derive(Clone)]
pub struct ThemeContext {
    inner: Arc<Inner>,
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    pub fn new(theme: AppTheme) -> Self {
        Self::from_arc(Arc::new(theme))
    }

    pub(crate) fn from_arc(theme: Arc<AppTheme>) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: RwLock::new(theme),
                listeners: RwLock::new(FxHashMap::default()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// The current theme snapshot
    pub fn current(&self) -> Arc<AppTheme> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a listener called with every newly published theme
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Arc<AppTheme>) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(listener));
        debug!(listener_id = id.0, "theme listener registered");
        id
    }

    /// Returns false if `id` was not registered
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = self
            .inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some();
        if removed {
            debug!(listener_id = id.0, "theme listener removed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Swap in `theme`, then notify listeners in subscription order.
    ///
    /// The swap completes before any listener runs, so `current()` and every
    /// listener see the same `Arc` for this cycle.
    pub(crate) fn publish(&self, theme: Arc<AppTheme>) {
        *self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&theme);

        let mut listeners: Vec<(ListenerId, Listener)> = self
            .inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();
        listeners.sort_by_key(|(id, _)| *id);

        for (id, listener) in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(&theme))).is_err() {
                warn!(listener_id = id.0, "theme listener panicked");
            }
        }
    }

    pub(crate) fn clear_listeners(&self) {
        let mut listeners = self
            .inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !listeners.is_empty() {
            debug!(count = listeners.len(), "clearing theme listeners");
            listeners.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starterpack_theme::{generate, PartialThemeConfig, ThemeConfig};
    use std::sync::Mutex;

    fn themed(hue: f32) -> Arc<AppTheme> {
        let config = ThemeConfig::default().merged(&PartialThemeConfig::new().primary_hue(hue));
        Arc::new(generate(&config))
    }

    #[test]
    fn test_publish_swaps_before_notifying() {
        let ctx = ThemeContext::new(AppTheme::default());
        let seen: Arc<Mutex<Vec<bool>>> = Arc::default();

        let reader = ctx.clone();
        let log = Arc::clone(&seen);
        ctx.subscribe(move |theme| {
            log.lock().unwrap().push(Arc::ptr_eq(theme, &reader.current()));
        });

        let next = themed(10.0);
        ctx.publish(Arc::clone(&next));

        assert!(Arc::ptr_eq(&ctx.current(), &next));
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let ctx = ThemeContext::new(AppTheme::default());
        let order: Arc<Mutex<Vec<u32>>> = Arc::default();

        for n in 0..5 {
            let order = Arc::clone(&order);
            ctx.subscribe(move |_| order.lock().unwrap().push(n));
        }
        ctx.publish(themed(90.0));

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_panicking_listener_does_not_block_others() {
        let ctx = ThemeContext::new(AppTheme::default());
        let calls = Arc::new(AtomicU64::new(0));

        ctx.subscribe(|_| panic!("listener bug"));
        let counter = Arc::clone(&calls);
        ctx.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        ctx.publish(themed(45.0));
        ctx.publish(themed(46.0));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let ctx = ThemeContext::new(AppTheme::default());
        let calls = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&calls);
        let id = ctx.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(ctx.listener_count(), 1);

        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.publish(themed(1.0));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(ctx.listener_count(), 0);
    }
}
