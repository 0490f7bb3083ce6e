#![forbid(unsafe_code)]

//! The composed reactive object: identity + properties + actions.

use std::collections::BTreeMap;

use mvx_value::Value;

use crate::actions::{ActionNotFound, ActionRegistry};
use crate::property_store::PropertyStore;

/// Opaque identity of a [`ViewModel`], assigned at construction and
/// immutable for the object's lifetime. Unique within the scope of the
/// [`ViewModelRegistry`](crate::ViewModelRegistry) that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct InstanceId(String);

impl InstanceId {
    /// Create an id from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string form of the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reactive object: one [`PropertyStore`] and one [`ActionRegistry`]
/// behind a stable identity.
///
/// View-models are created through a
/// [`ViewModelRegistry`](crate::ViewModelRegistry) in production and
/// directly via [`ViewModel::new`] in tests. Dropping the view-model drops
/// its store and registry, and with them every stored value, listener, and
/// handler.
#[derive(Debug)]
pub struct ViewModel {
    id: InstanceId,
    properties: PropertyStore,
    actions: ActionRegistry,
}

impl ViewModel {
    /// Create a view-model with the given identity and empty store and
    /// registry.
    #[must_use]
    pub fn new(id: InstanceId) -> Self {
        Self {
            id,
            properties: PropertyStore::new(),
            actions: ActionRegistry::new(),
        }
    }

    /// The identity assigned at construction.
    #[must_use]
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    /// Handle to the property store. Clone it into action handlers and
    /// listeners that need to read or write properties.
    #[must_use]
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// Handle to the action registry.
    #[must_use]
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    // ── Delegating surface ──────────────────────────────────────────────

    /// See [`PropertyStore::set_prop`].
    pub fn set_prop(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.set_prop(name, value);
    }

    /// See [`PropertyStore::get_prop`].
    #[must_use]
    pub fn get_prop(&self, name: &str) -> Value {
        self.properties.get_prop(name)
    }

    /// See [`PropertyStore::has_prop`].
    #[must_use]
    pub fn has_prop(&self, name: &str) -> bool {
        self.properties.has_prop(name)
    }

    /// See [`PropertyStore::add_listener`].
    pub fn add_listener(&self, name: impl Into<String>, listener: impl Fn(&str, &Value) + 'static) {
        self.properties.add_listener(name, listener);
    }

    /// See [`PropertyStore::remove_listeners`].
    pub fn remove_listeners(&self, name: &str) {
        self.properties.remove_listeners(name);
    }

    /// See [`ActionRegistry::register`].
    pub fn register_action(
        &self,
        name: impl Into<String>,
        handler: impl Fn(Option<&Value>) + 'static,
    ) {
        self.actions.register(name, handler);
    }

    /// See [`ActionRegistry::dispatch`].
    ///
    /// # Errors
    ///
    /// [`ActionNotFound`] if nothing is registered under `name`.
    pub fn dispatch(&self, name: &str, params: Option<&Value>) -> Result<(), ActionNotFound> {
        self.actions.dispatch(name, params)
    }

    /// A point-in-time snapshot of the whole object: identity, every
    /// stored property (deep copy), and the sorted registered action
    /// names.
    #[must_use]
    pub fn state(&self) -> StateSnapshot {
        StateSnapshot {
            instance_id: self.id.clone(),
            properties: self.properties.snapshot(),
            actions: self.actions.action_names(),
        }
    }
}

/// Introspection snapshot of a [`ViewModel`], shaped for the host bridge:
/// `{ instanceId, properties, actions }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StateSnapshot {
    /// Identity of the snapshotted view-model.
    pub instance_id: InstanceId,
    /// Deep copies of every stored property, key-ordered.
    pub properties: BTreeMap<String, Value>,
    /// Registered action names, sorted.
    pub actions: Vec<String>,
}

impl StateSnapshot {
    /// Render the snapshot as a [`Value`] map mirroring the wire shape:
    /// `instanceId` → String, `properties` → Map, `actions` → Sequence.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut root = BTreeMap::new();
        root.insert(
            "instanceId".to_owned(),
            Value::from(self.instance_id.as_str()),
        );
        root.insert("properties".to_owned(), Value::Map(self.properties.clone()));
        root.insert(
            "actions".to_owned(),
            Value::Sequence(self.actions.iter().map(|name| Value::from(name.as_str())).collect()),
        );
        Value::Map(root)
    }
}
