#![forbid(unsafe_code)]

//! The counter view-model: the canonical worked example for the runtime.
//!
//! Properties: `count` (Int), `message` (String), `isEven` (Bool, derived
//! from `count` on every change). Actions: `increment`, `decrement`,
//! `reset`, `setMessage`, `addNumber`.

use mvx::prelude::*;

/// Register the `"counter"` factory on `registry`.
pub fn register(registry: &mut ViewModelRegistry) {
    registry.register_factory("counter", build);
}

fn build(id: InstanceId) -> ViewModel {
    let vm = ViewModel::new(id);
    vm.set_prop("count", 0i64);
    vm.set_prop("message", "Hello MVVM!");
    vm.set_prop("isEven", true);

    let props = vm.properties().clone();
    vm.register_action("increment", move |_| {
        apply_count(&props, |count| count + 1);
    });

    let props = vm.properties().clone();
    vm.register_action("decrement", move |_| {
        apply_count(&props, |count| count - 1);
    });

    let props = vm.properties().clone();
    vm.register_action("reset", move |_| {
        apply_count(&props, |_| 0);
    });

    let props = vm.properties().clone();
    vm.register_action("setMessage", move |params| {
        let Some(message) = params.and_then(|p| p.as_str().ok()) else {
            tracing::warn!("setMessage dispatched without a string parameter");
            return;
        };
        props.set_prop("message", message);
    });

    let props = vm.properties().clone();
    vm.register_action("addNumber", move |params| {
        let Some(delta) = params.and_then(|p| p.as_int().ok()) else {
            tracing::warn!("addNumber dispatched without an integer parameter");
            return;
        };
        apply_count(&props, |count| count + delta);
    });

    vm
}

/// Update `count` through `f` and refresh the derived `isEven` property.
/// A never-written count reads as 0.
fn apply_count(props: &PropertyStore, f: impl FnOnce(i64) -> i64) {
    let count = f(props.get_prop("count").as_int().unwrap_or(0));
    props.set_prop("count", count);
    props.set_prop("isEven", count % 2 == 0);
}
