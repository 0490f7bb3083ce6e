#![forbid(unsafe_code)]

//! Named property storage with synchronous change notification.
//!
//! # Design
//!
//! [`PropertyStore`] is a handle over `Rc<RefCell<..>>` shared state:
//! cloning the handle shares the store, which lets action handlers and
//! listeners capture the store they read and write. Listeners are plain
//! `Rc<dyn Fn(&str, &Value)>` callbacks kept per property name, in
//! registration order.
//!
//! A write snapshots the listener list for the written name and releases
//! the interior borrow *before* invoking any callback. Listeners may
//! therefore reenter the store freely — including writing the same
//! property, which recurses synchronously on the caller's stack. No cycle
//! detection or recursion bound is applied; a listener that unconditionally
//! writes its own property will recurse until the stack runs out.
//!
//! # Invariants
//!
//! 1. A write to `name` invokes every listener registered for exactly
//!    `name` at the moment of the write, once each, in registration order.
//! 2. Notification is unconditional on write, not on change: storing a
//!    value equal to the current one still notifies.
//! 3. Listeners registered during a notification are first invoked on the
//!    next write to that name.
//! 4. Reads are total: a never-written name reads as `Null`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use ahash::AHashMap;
use mvx_value::Value;
use tracing::trace;

/// Change listener: receives the property name and the new value.
pub type ListenerFn = dyn Fn(&str, &Value);

#[derive(Default)]
struct StoreInner {
    properties: AHashMap<String, Value>,
    listeners: AHashMap<String, Vec<Rc<ListenerFn>>>,
}

/// Named mapping from property name to [`Value`] with per-name change
/// listeners.
///
/// Cloning the store clones the *handle*; all clones share one set of
/// properties and listeners.
#[derive(Clone, Default)]
pub struct PropertyStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl PropertyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the property, then notify its listeners.
    ///
    /// Listeners run synchronously on the caller's stack, in registration
    /// order, each receiving `(name, &value)`. The store mutation completes
    /// before the first listener runs, so reads from inside a listener see
    /// the new value.
    pub fn set_prop(&self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        let to_notify: Vec<Rc<ListenerFn>> = {
            let mut inner = self.inner.borrow_mut();
            inner.properties.insert(name.clone(), value.clone());
            inner.listeners.get(&name).cloned().unwrap_or_default()
        };
        trace!(property = %name, listeners = to_notify.len(), "property written");
        for listener in &to_notify {
            listener(&name, &value);
        }
    }

    /// The stored value, or `Null` if the name has never been written.
    /// Never fails.
    #[must_use]
    pub fn get_prop(&self, name: &str) -> Value {
        self.inner
            .borrow()
            .properties
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// True if the property has been written.
    #[must_use]
    pub fn has_prop(&self, name: &str) -> bool {
        self.inner.borrow().properties.contains_key(name)
    }

    /// Append a change listener for `name`.
    ///
    /// Listeners are never deduplicated or replaced; registering twice
    /// means being called twice per write.
    pub fn add_listener(&self, name: impl Into<String>, listener: impl Fn(&str, &Value) + 'static) {
        self.inner
            .borrow_mut()
            .listeners
            .entry(name.into())
            .or_default()
            .push(Rc::new(listener));
    }

    /// Remove all listeners registered for `name`.
    pub fn remove_listeners(&self, name: &str) {
        self.inner.borrow_mut().listeners.remove(name);
    }

    /// Deep copy of every stored property, key-ordered.
    ///
    /// This is the property half of a state snapshot: a single
    /// point-in-time view, safe because writes never interleave with it on
    /// one thread.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.inner
            .borrow()
            .properties
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl std::fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PropertyStore")
            .field("properties", &inner.properties.len())
            .field(
                "listeners",
                &inner.listeners.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}
