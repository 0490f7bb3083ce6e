#![forbid(unsafe_code)]

//! Type-tag-keyed factory registry for view-models.
//!
//! The registry is an explicit, caller-owned object: the embedding
//! application constructs one (usually at process start), external
//! collaborators register their factories against it, and anything that
//! needs to create view-models receives a reference. There is no global
//! singleton, and independent registries never share factories or id
//! counters — tests can run several side by side.
//!
//! # Invariants
//!
//! 1. Re-registering a type tag replaces the previous factory (last
//!    registration wins).
//! 2. Instance ids are `"<tag>_<n>"` with `n` counting from 1, unique and
//!    monotonically increasing per registry.
//! 3. A failed create consumes no id and constructs no partial object.
//! 4. Created view-models are owned by the caller; the registry keeps no
//!    reference.

use std::rc::Rc;

use ahash::AHashMap;
use tracing::debug;

use crate::view_model::{InstanceId, ViewModel};

/// Factory callback: builds a view-model with the identity assigned by the
/// registry. Beyond the identity, factories take no arguments.
pub type FactoryFn = dyn Fn(InstanceId) -> ViewModel;

/// Create was called with a type tag no factory is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNotRegistered {
    /// The tag that was looked up.
    pub type_tag: String,
}

impl std::fmt::Display for TypeNotRegistered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view-model type not registered: {}", self.type_tag)
    }
}

impl std::error::Error for TypeNotRegistered {}

/// Mapping from type tag to view-model factory.
#[derive(Default)]
pub struct ViewModelRegistry {
    factories: AHashMap<String, Rc<FactoryFn>>,
    next_id: u64,
}

impl ViewModelRegistry {
    /// Create an empty registry. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: AHashMap::new(),
            next_id: 1,
        }
    }

    /// Register `factory` under `type_tag`, replacing any previous factory
    /// for that tag.
    pub fn register_factory(
        &mut self,
        type_tag: impl Into<String>,
        factory: impl Fn(InstanceId) -> ViewModel + 'static,
    ) {
        let type_tag = type_tag.into();
        let replaced = self
            .factories
            .insert(type_tag.clone(), Rc::new(factory))
            .is_some();
        debug!(type_tag = %type_tag, replaced, "view-model factory registered");
    }

    /// Construct a new view-model of the given type.
    ///
    /// Ownership of the returned view-model transfers to the caller; the
    /// registry keeps no reference and plays no part in its destruction.
    ///
    /// # Errors
    ///
    /// [`TypeNotRegistered`] if no factory is registered under `type_tag`;
    /// no object is constructed and no instance id is consumed.
    pub fn create(&mut self, type_tag: &str) -> Result<ViewModel, TypeNotRegistered> {
        let factory = self
            .factories
            .get(type_tag)
            .cloned()
            .ok_or_else(|| TypeNotRegistered {
                type_tag: type_tag.to_owned(),
            })?;
        let id = InstanceId::new(format!("{type_tag}_{}", self.next_id));
        self.next_id += 1;
        let view_model = factory(id);
        debug!(instance_id = %view_model.id(), type_tag = %type_tag, "view-model created");
        Ok(view_model)
    }

    /// True if a factory is registered under `type_tag`.
    #[must_use]
    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.factories.contains_key(type_tag)
    }

    /// All registered type tags, sorted.
    #[must_use]
    pub fn registered_types(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.factories.keys().cloned().collect();
        tags.sort_unstable();
        tags
    }
}

impl std::fmt::Debug for ViewModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModelRegistry")
            .field("factories", &self.factories.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
