#![forbid(unsafe_code)]

//! MVX public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for embedders:
//! the dynamic [`Value`] type and the view-model runtime built on it.

pub use mvx_runtime as runtime;
pub use mvx_value as value;

pub use mvx_runtime::{
    ActionNotFound, ActionRegistry, InstanceId, PropertyStore, StateSnapshot, TypeNotRegistered,
    ViewModel, ViewModelRegistry,
};
pub use mvx_value::{Kind, TypeMismatch, Value};

pub mod prelude {
    pub use mvx_runtime::{InstanceId, PropertyStore, StateSnapshot, ViewModel, ViewModelRegistry};
    pub use mvx_value::{Kind, Value};
}
