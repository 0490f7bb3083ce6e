//! E2E integration test: a counter view-model driven end to end through
//! the public runtime surface.
//!
//! Validates:
//! 1. Factory registration and creation, including last-registration-wins
//!    and the unknown-tag failure path.
//! 2. Action dispatch mutating properties through captured store handles,
//!    with Null-coalescing reads.
//! 3. Listener ordering and unconditional notification across the whole
//!    object.
//! 4. State snapshots reflecting a single point in time.

#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use mvx_runtime::{InstanceId, ViewModel, ViewModelRegistry};
use mvx_value::Value;

/// Build a counter view-model the way an embedding application would:
/// initial properties, then actions capturing the store handle.
fn counter(id: InstanceId) -> ViewModel {
    let vm = ViewModel::new(id);
    vm.set_prop("count", 0i64);
    vm.set_prop("isEven", true);

    let props = vm.properties().clone();
    vm.register_action("increment", move |_| {
        let count = props.get_prop("count").as_int().unwrap_or(0) + 1;
        props.set_prop("count", count);
        props.set_prop("isEven", count % 2 == 0);
    });

    let props = vm.properties().clone();
    vm.register_action("addNumber", move |params| {
        let delta = params.and_then(|p| p.as_int().ok()).unwrap_or(0);
        let count = props.get_prop("count").as_int().unwrap_or(0) + delta;
        props.set_prop("count", count);
        props.set_prop("isEven", count % 2 == 0);
    });

    let props = vm.properties().clone();
    vm.register_action("reset", move |_| {
        props.set_prop("count", 0i64);
        props.set_prop("isEven", true);
    });

    vm
}

#[test]
fn increment_three_times_counts_to_three() {
    let mut registry = ViewModelRegistry::new();
    registry.register_factory("counter", counter);
    let vm = registry.create("counter").unwrap();

    for _ in 0..3 {
        vm.dispatch("increment", None).unwrap();
    }
    assert_eq!(vm.get_prop("count"), Value::Int(3));
    assert_eq!(vm.get_prop("isEven"), Value::Bool(false));
}

#[test]
fn increment_null_coalesces_an_unset_count() {
    // An action reading a never-written property treats it as 0.
    let vm = ViewModel::new(InstanceId::new("bare_1"));
    let props = vm.properties().clone();
    vm.register_action("increment", move |_| {
        let count = props.get_prop("count").as_int().unwrap_or(0) + 1;
        props.set_prop("count", count);
    });

    vm.dispatch("increment", None).unwrap();
    assert_eq!(vm.get_prop("count"), Value::Int(1));
}

#[test]
fn parameterized_dispatch_reaches_the_handler() {
    let mut registry = ViewModelRegistry::new();
    registry.register_factory("counter", counter);
    let vm = registry.create("counter").unwrap();

    let param = Value::from(41i64);
    vm.dispatch("addNumber", Some(&param)).unwrap();
    vm.dispatch("increment", None).unwrap();
    assert_eq!(vm.get_prop("count"), Value::Int(42));
    assert_eq!(vm.get_prop("isEven"), Value::Bool(true));
}

#[test]
fn unknown_action_leaves_state_unchanged() {
    let mut registry = ViewModelRegistry::new();
    registry.register_factory("counter", counter);
    let vm = registry.create("counter").unwrap();
    let before = vm.state();

    let err = vm.dispatch("doesNotExist", None).unwrap_err();
    assert_eq!(err.name, "doesNotExist");
    assert_eq!(vm.state(), before);
}

#[test]
fn unknown_tag_fails_with_no_object() {
    let mut registry = ViewModelRegistry::new();
    let err = registry.create("missing").unwrap_err();
    assert_eq!(err.type_tag, "missing");
}

#[test]
fn second_factory_registration_wins() {
    let mut registry = ViewModelRegistry::new();
    registry.register_factory("counter", counter);
    registry.register_factory("counter", |id| {
        let vm = ViewModel::new(id);
        vm.set_prop("count", 1000i64);
        vm
    });

    let vm = registry.create("counter").unwrap();
    assert_eq!(vm.get_prop("count"), Value::Int(1000));
}

#[test]
fn listeners_observe_every_count_change_in_order() {
    let mut registry = ViewModelRegistry::new();
    registry.register_factory("counter", counter);
    let vm = registry.create("counter").unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let log_in = Rc::clone(&log);
    vm.add_listener("count", move |_, value| {
        log_in.borrow_mut().push(("first", value.as_int().unwrap()));
    });
    let log_in = Rc::clone(&log);
    vm.add_listener("count", move |_, value| {
        log_in.borrow_mut().push(("second", value.as_int().unwrap()));
    });

    vm.dispatch("increment", None).unwrap();
    vm.dispatch("reset", None).unwrap();
    assert_eq!(
        *log.borrow(),
        vec![("first", 1), ("second", 1), ("first", 0), ("second", 0)]
    );
}

#[test]
fn listener_driving_a_derived_property_reenters_the_store() {
    // Derive "parity" from inside a listener instead of inside the action;
    // the reentrant write must complete before dispatch returns.
    let vm = ViewModel::new(InstanceId::new("derived_1"));
    vm.set_prop("count", 0i64);
    let props = vm.properties().clone();
    vm.add_listener("count", move |_, value| {
        let n = value.as_int().unwrap_or(0);
        props.set_prop("parity", if n % 2 == 0 { "even" } else { "odd" });
    });
    let props = vm.properties().clone();
    vm.register_action("increment", move |_| {
        let count = props.get_prop("count").as_int().unwrap_or(0) + 1;
        props.set_prop("count", count);
    });

    vm.dispatch("increment", None).unwrap();
    assert_eq!(vm.get_prop("parity"), Value::from("odd"));
    vm.dispatch("increment", None).unwrap();
    assert_eq!(vm.get_prop("parity"), Value::from("even"));
}

#[test]
fn snapshot_matches_the_wire_shape_end_to_end() {
    let mut registry = ViewModelRegistry::new();
    registry.register_factory("counter", counter);
    let vm = registry.create("counter").unwrap();
    vm.dispatch("increment", None).unwrap();

    let snap = vm.state();
    assert_eq!(snap.instance_id.as_str(), "counter_1");
    assert_eq!(
        snap.actions,
        vec![
            "addNumber".to_owned(),
            "increment".to_owned(),
            "reset".to_owned()
        ]
    );
    assert_eq!(snap.properties["count"], Value::Int(1));

    let value = snap.to_value();
    assert_eq!(value.get("instanceId").unwrap().as_str(), Ok("counter_1"));
    assert_eq!(
        value.get("properties").unwrap().get("count").unwrap().as_int(),
        Ok(1)
    );
    assert_eq!(
        value.get("actions").unwrap().sequence_len(),
        Ok(3)
    );
}
