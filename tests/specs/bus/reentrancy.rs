//! Re-entrancy specs
//!
//! Listeners calling back into the bus observe snapshot semantics.

use crate::prelude::*;
use herald_core::Subscription;
use similar_asserts::assert_eq;
use std::sync::{Arc, Mutex};

#[test]
fn subscribe_inside_listener_applies_from_next_emit() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let l2 = rec.listener("L2");

    let weak = bus.downgrade();
    let journal = rec.clone();
    let l1 = Listener::new(move |_: &Args| {
        journal.note("L1()".to_string());
        if let Some(bus) = weak.upgrade() {
            bus.subscribe("a", &l2);
        }
    });
    bus.subscribe("a", &l1);

    bus.emit("a", args![]).unwrap();
    assert_eq!(rec.calls(), vec!["L1()".to_string()]);

    bus.emit("a", args![]).unwrap();
    assert_eq!(rec.calls(), vec!["L1()".to_string(), "L2()".to_string()]);
}

#[test]
fn unsubscribe_inside_listener_does_not_cancel_current_delivery() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let l2 = rec.listener("L2");

    let weak = bus.downgrade();
    let journal = rec.clone();
    let target = l2.clone();
    let l1 = Listener::new(move |_: &Args| {
        journal.note("L1()".to_string());
        if let Some(bus) = weak.upgrade() {
            bus.unsubscribe("a", &target);
        }
    });
    bus.subscribe("a", &l1);
    bus.subscribe("a", &l2);

    bus.emit("a", args![]).unwrap();
    assert_eq!(rec.calls(), vec!["L1()".to_string(), "L2()".to_string()]);

    bus.emit("a", args![]).unwrap();
    assert_eq!(rec.calls(), vec!["L1()".to_string()]);
}

#[test]
fn unsubscribing_self_mid_dispatch_is_allowed() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let journal = rec.clone();
    let me = Arc::clone(&slot);
    let once = Listener::new(move |_: &Args| {
        journal.note("once()".to_string());
        let sub = me.lock().unwrap().take();
        if let Some(sub) = sub {
            sub.unsubscribe();
        }
    });
    *slot.lock().unwrap() = Some(bus.subscribe("a", &once));

    bus.emit("a", args![]).unwrap();
    bus.emit("a", args![]).unwrap();

    assert_eq!(rec.calls(), vec!["once()".to_string()]);
    assert!(!bus.contains("a"));
}
