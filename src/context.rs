//! Injected capabilities shared by the enhancement initializers.
//!
//! DESIGN
//! ======
//! The only durable state this layer touches is one localStorage entry, and
//! the only environment signal it reads is the OS dark-scheme media query.
//! Both sit behind small traits so native tests can substitute in-memory
//! fakes instead of a live browser. DOM queries stay in [`crate::dom`],
//! which compiles out off-browser; the pure layers take plain values.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Durable per-origin key-value storage. Writes are best-effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// OS-level color scheme signal, sampled at call time.
pub trait SchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Scheme signal pinned to a fixed answer, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub bool);

impl SchemeSignal for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// localStorage-backed store. Absent or denied storage degrades to no-ops.
#[cfg(feature = "browser")]
pub struct BrowserStore;

#[cfg(feature = "browser")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Live `prefers-color-scheme` media query.
#[cfg(feature = "browser")]
pub struct BrowserScheme;

#[cfg(feature = "browser")]
impl SchemeSignal for BrowserScheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(crate::registry::DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
}

/// Capabilities handed to each enhancement initializer.
#[derive(Clone)]
pub struct PageContext {
    pub store: Rc<dyn KeyValueStore>,
    pub scheme: Rc<dyn SchemeSignal>,
}

impl PageContext {
    /// Context backed by the live browser environment.
    #[cfg(feature = "browser")]
    #[must_use]
    pub fn browser() -> Self {
        Self { store: Rc::new(BrowserStore), scheme: Rc::new(BrowserScheme) }
    }

    /// Context backed by in-memory fakes.
    #[must_use]
    pub fn in_memory(prefers_dark: bool) -> Self {
        Self {
            store: Rc::new(MemoryStore::new()),
            scheme: Rc::new(FixedScheme(prefers_dark)),
        }
    }
}
