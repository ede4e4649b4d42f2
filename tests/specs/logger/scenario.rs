//! Logger consumer specs

use crate::prelude::*;
use similar_asserts::assert_eq;
use herald_core::{EventLogger, LogLevel};

#[test]
fn error_and_success_reach_only_their_handler() {
    let bus = EventBus::new();
    let logger = EventLogger::attach(&bus);

    bus.emit("error", args!["boom"]).unwrap();
    let records = logger.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Error);
    assert_eq!(records[0].args, args!["boom"]);

    bus.emit("success", args!["ok"]).unwrap();
    let records = logger.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].level, LogLevel::Success);
    assert_eq!(records[1].args, args!["ok"]);
}

#[test]
fn logger_coexists_with_other_consumers() {
    let bus = EventBus::new();
    let rec = Recorder::new();
    let logger = EventLogger::attach(&bus);
    bus.subscribe("error", &rec.listener("alert"));

    bus.emit("error", args!["disk"]).unwrap();

    assert_eq!(logger.records().len(), 1);
    assert_eq!(rec.calls(), vec!["alert(disk)".to_string()]);
}
