//! Dispatch specs
//!
//! Fan-out, idempotent registration, unsubscribe, and exact-name routing.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn distinct_listeners_each_run_once() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    bus.subscribe("E", &rec.listener("L1"));
    bus.subscribe("E", &rec.listener("L2"));

    bus.emit("E", args!["v"]).unwrap();

    assert_eq!(rec.calls(), vec!["L1(v)".to_string(), "L2(v)".to_string()]);
}

#[test]
fn subscribing_twice_still_runs_once() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let listener = rec.listener("L");
    bus.subscribe("E", &listener);
    bus.subscribe("E", &listener);

    bus.emit("E", args!["v"]).unwrap();

    assert_eq!(rec.calls(), vec!["L(v)".to_string()]);
}

#[test]
fn unsubscribed_listener_never_runs() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let listener = rec.listener("L");
    bus.subscribe("E", &listener);
    bus.unsubscribe("E", &listener);

    bus.emit("E", args!["v"]).unwrap();

    assert!(rec.calls().is_empty());
}

#[test]
fn emit_with_no_listeners_succeeds() {
    let bus: EventBus = EventBus::new();
    assert!(bus.emit("E", args!["v"]).is_ok());
}

#[test]
fn listener_on_a_ignores_b() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    bus.subscribe("A", &rec.listener("L"));

    for other in ["B", "AA", "a", "", "A "] {
        bus.emit(other, args!["v"]).unwrap();
    }

    assert!(rec.calls().is_empty());
}

#[test]
fn unsubscribe_of_last_listener_drops_the_key() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let listener = rec.listener("L");
    bus.subscribe("x", &listener);
    assert!(bus.contains("x"));

    bus.unsubscribe("x", &listener);

    assert!(!bus.contains("x"));
    assert!(bus.event_names().is_empty());
}

#[test]
fn unsubscribe_of_unknown_pair_is_silent() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    assert!(!bus.unsubscribe("never", &rec.listener("L")));
}
