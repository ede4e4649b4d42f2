//! Configuration specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn bus_built_from_config_file_uses_its_policy() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("herald.toml");
    std::fs::write(&path, "failure_policy = \"fail-fast\"\n").unwrap();

    let config = BusConfig::load(&path).unwrap();
    let bus: EventBus = EventBus::with_config(config);

    assert_eq!(bus.config().failure_policy, FailurePolicy::FailFast);
}

#[test]
fn malformed_config_is_an_error() {
    let err = BusConfig::from_toml_str("failure_policy = ").unwrap_err();
    assert!(err.to_string().contains("TOML"));
}
