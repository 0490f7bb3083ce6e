#![forbid(unsafe_code)]

//! Name-keyed action dispatch.
//!
//! Actions are side-effecting handlers taking at most one [`Value`]
//! parameter. Callers with multiple logical arguments pack them into a
//! Sequence or Map. Handlers typically capture a
//! [`PropertyStore`](crate::PropertyStore) handle and mutate it.
//!
//! # Invariants
//!
//! 1. Registering a name that already exists replaces the previous handler
//!    (last registration wins). This is the supported hot-swap path, not an
//!    error.
//! 2. Dispatching an unregistered name fails with [`ActionNotFound`] and no
//!    handler runs; registry and store state are observably unchanged.
//! 3. Dispatch runs the handler synchronously on the caller's stack with no
//!    interior borrow held, so handlers may register or dispatch actions
//!    reentrantly.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use mvx_value::Value;
use tracing::trace;

/// Action handler: receives the optional dispatch parameter.
pub type ActionFn = dyn Fn(Option<&Value>);

/// Dispatch of an action name nothing is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNotFound {
    /// The name that was dispatched.
    pub name: String,
}

impl std::fmt::Display for ActionNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "action not found: {}", self.name)
    }
}

impl std::error::Error for ActionNotFound {}

/// Named mapping from action name to handler.
///
/// Cloning the registry clones the *handle*; all clones share one table.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    inner: Rc<RefCell<AHashMap<String, Rc<ActionFn>>>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register(&self, name: impl Into<String>, handler: impl Fn(Option<&Value>) + 'static) {
        let name = name.into();
        let replaced = self
            .inner
            .borrow_mut()
            .insert(name.clone(), Rc::new(handler))
            .is_some();
        trace!(action = %name, replaced, "action registered");
    }

    /// Invoke the handler registered under `name` with `params`.
    ///
    /// # Errors
    ///
    /// [`ActionNotFound`] if nothing is registered under `name`; no handler
    /// is invoked and no state changes.
    pub fn dispatch(&self, name: &str, params: Option<&Value>) -> Result<(), ActionNotFound> {
        let handler = self
            .inner
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ActionNotFound {
                name: name.to_owned(),
            })?;
        trace!(action = %name, has_params = params.is_some(), "action dispatched");
        handler(params);
        Ok(())
    }

    /// True if a handler is registered under `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.inner.borrow().contains_key(name)
    }

    /// All registered action names, sorted.
    #[must_use]
    pub fn action_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.inner.borrow().len())
            .finish()
    }
}
