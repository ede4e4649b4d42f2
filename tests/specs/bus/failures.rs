//! Listener failure specs
//!
//! One failing listener never hides the event from the others unless the
//! bus is configured to fail fast.

use crate::prelude::*;
use similar_asserts::assert_eq;
use herald_core::FailureKind;

fn bus_with_failing_middle(policy: FailurePolicy) -> (EventBus, Recorder) {
    let bus = EventBus::with_config(BusConfig::default().with_failure_policy(policy));
    let rec = Recorder::new();
    bus.subscribe("job", &rec.listener("before"));
    bus.subscribe("job", &Listener::new(|_: &Args| panic!("middle failed")));
    bus.subscribe("job", &rec.listener("after"));
    (bus, rec)
}

#[test]
fn isolate_delivers_to_everyone_then_reports() {
    let (bus, rec) = bus_with_failing_middle(FailurePolicy::Isolate);

    let err = bus.emit("job", args!["x"]).unwrap_err();

    assert_eq!(rec.calls(), vec!["before(x)".to_string(), "after(x)".to_string()]);
    assert_eq!(err.failures.len(), 1);
    assert_eq!(err.failures[0].kind, FailureKind::Panicked);
    assert_eq!(err.failures[0].message, "middle failed");
}

#[test]
fn fail_fast_skips_remaining_listeners() {
    let (bus, rec) = bus_with_failing_middle(FailurePolicy::FailFast);

    let err = bus.emit("job", args!["x"]).unwrap_err();

    assert_eq!(rec.calls(), vec!["before(x)".to_string()]);
    assert_eq!(err.failures[0].position, 1);
}

#[test]
fn default_policy_is_isolate() {
    let bus: EventBus = EventBus::new();
    assert_eq!(bus.config().failure_policy, FailurePolicy::Isolate);
}

#[test]
fn error_message_names_the_event() {
    let (bus, _) = bus_with_failing_middle(FailurePolicy::Isolate);
    let err = bus.emit("job", args![]).unwrap_err();
    assert!(err.to_string().contains("'job'"), "got: {}", err);
}
