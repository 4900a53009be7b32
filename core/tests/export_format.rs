//! The tooling export document.
//!
//! Field names and their order are a compatibility surface; these tests pin
//! the shape, the escaping, and the registration-order guarantee.

use extlogic_core::{
    descriptor::{Access, Kind, LogicDescriptor, ValueType},
    export,
    registry::LogicRegistry,
    runtime::LogicRuntime,
};
use serde_json::Value;

#[test]
fn empty_registry_exports_an_empty_list() {
    let reg = LogicRegistry::new();
    assert_eq!(export::to_json_compact(&reg).unwrap(), r#"{"logicTypes":[]}"#);

    let doc: Value = serde_json::from_str(&export::to_json(&reg).unwrap()).unwrap();
    assert_eq!(doc["logicTypes"].as_array().unwrap().len(), 0);
}

#[test]
fn single_descriptor_round_trips_all_fields_with_escaping() {
    let mut reg = LogicRegistry::new();
    reg.register(LogicDescriptor::new(
        1500,
        "TestProperty",
        r#"A "quoted" description with a \ backslash"#,
        ValueType::Float,
        Access::ReadWrite,
        Kind::Added,
        "TestCategory",
    ))
    .unwrap();

    let json = export::to_json(&reg).unwrap();
    let doc: Value = serde_json::from_str(&json).expect("escaped output must stay valid JSON");
    let entry = &doc["logicTypes"][0];

    assert_eq!(entry["name"], "TestProperty");
    assert_eq!(entry["displayName"], "TestProperty");
    assert_eq!(
        entry["description"],
        r#"A "quoted" description with a \ backslash"#
    );
    assert_eq!(entry["value"], 1500);
    assert_eq!(entry["hash"], i64::from(reg.get(1500).unwrap().hash));
    assert_eq!(entry["dataType"], "float");
    assert_eq!(entry["access"], "read-write");
    assert_eq!(entry["category"], "TestCategory");
    assert_eq!(
        entry.as_object().unwrap().len(),
        8,
        "exactly the eight documented fields"
    );
}

#[test]
fn field_order_is_the_documented_wire_order() {
    let mut reg = LogicRegistry::new();
    reg.register(LogicDescriptor::new(
        1500,
        "TestProperty",
        "plain",
        ValueType::Int,
        Access::Read,
        Kind::Revealed,
        "TestCategory",
    ))
    .unwrap();

    let json = export::to_json_compact(&reg).unwrap();
    let expected_order = [
        r#""name""#,
        r#""displayName""#,
        r#""description""#,
        r#""value""#,
        r#""hash""#,
        r#""dataType""#,
        r#""access""#,
        r#""category""#,
    ];
    let positions: Vec<usize> = expected_order
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("missing field {key}")))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "field order drifted: {json}"
    );
}

#[test]
fn full_catalog_exports_in_registration_order() {
    let runtime = LogicRuntime::init().unwrap();
    let doc: Value = serde_json::from_str(&runtime.export_json().unwrap()).unwrap();
    let entries = doc["logicTypes"].as_array().unwrap();

    assert_eq!(entries.len(), runtime.registry().len());
    assert_eq!(entries[0]["name"], "ContactIndex", "registration order starts the document");

    // Every entry agrees with its registry descriptor.
    for entry in entries {
        let id = entry["value"].as_u64().unwrap() as u16;
        let d = runtime.registry().get(id).unwrap();
        assert_eq!(entry["name"], d.name.as_str());
        assert_eq!(entry["hash"], i64::from(d.hash));
        assert_eq!(entry["access"], d.access.as_str());
    }
}

#[test]
fn access_vocabulary_is_the_documented_one() {
    let runtime = LogicRuntime::init().unwrap();
    let json = runtime.export_json().unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    for entry in doc["logicTypes"].as_array().unwrap() {
        let access = entry["access"].as_str().unwrap();
        assert!(
            matches!(access, "read" | "write" | "read-write"),
            "unknown access string {access}"
        );
        let data_type = entry["dataType"].as_str().unwrap();
        assert!(matches!(data_type, "int" | "float" | "bool" | "long"));
    }
}

#[test]
fn export_is_identical_across_fresh_runtimes() {
    let a = LogicRuntime::init().unwrap().export_json().unwrap();
    let b = LogicRuntime::init().unwrap().export_json().unwrap();
    assert_eq!(a, b, "re-init must produce a byte-identical document");
}
