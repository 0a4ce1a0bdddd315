//! Global keyboard shortcut subscriptions.
//!
//! Process-wide key handlers are never installed as bare ambient listeners:
//! a subscriber gets a guard back, and dropping the guard (unmount)
//! deregisters the handler. Dispatch only ever sees live subscriptions.

use crate::palette::Key;
use std::sync::{Arc, Mutex};

struct RegistryInner<E> {
    next_id: u64,
    handlers: Vec<(u64, Key, E)>,
}

/// Registry of key-to-event subscriptions.
///
/// Clones share the same underlying registry, so a component can hold a
/// clone and subscribe/dispatch independently.
pub struct ShortcutRegistry<E> {
    inner: Arc<Mutex<RegistryInner<E>>>,
}

impl<E> Clone for ShortcutRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Clone> ShortcutRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Subscribe `event` to `key`. The subscription lives until the returned
    /// guard is dropped.
    pub fn subscribe(&self, key: Key, event: E) -> ShortcutSubscription<E> {
        let mut inner = self.inner.lock().expect("shortcut registry poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, key, event));
        ShortcutSubscription {
            id,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Events of all live subscriptions for `key`, in subscription order.
    pub fn dispatch(&self, key: Key) -> Vec<E> {
        let inner = self.inner.lock().expect("shortcut registry poisoned");
        inner
            .handlers
            .iter()
            .filter(|(_, k, _)| *k == key)
            .map(|(_, _, e)| e.clone())
            .collect()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("shortcut registry poisoned").handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone> Default for ShortcutRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for one shortcut subscription; dropping it deregisters.
pub struct ShortcutSubscription<E> {
    id: u64,
    inner: Arc<Mutex<RegistryInner<E>>>,
}

impl<E> Drop for ShortcutSubscription<E> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.handlers.retain(|(id, _, _)| *id != self.id);
        }
    }
}
