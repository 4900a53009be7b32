//! Filter-slot indirection through the filtration adapter.
//!
//! Covers: slot-index clamping, query-time resolution of the clamped index,
//! the empty-slot sentinel, the degradation tick table, and the per-entity
//! pressure limit settings.

use extlogic_core::{
    adapter::{Dispatch, PropertyAdapter, NOT_APPLICABLE},
    catalog::ids,
    filtration_adapter::{
        max_ticks_for_tier, FiltrationAdapter, FiltrationHost, GasFilter, TICKS_BEFORE_DEGRADE,
    },
    runtime::LogicRuntime,
    types::{EntityId, LogicId},
};

struct TestMachine {
    reference_id: EntityId,
    slots: Vec<Option<GasFilter>>,
    connected: bool,
    power_used: f64,
    processed_moles: f64,
}

impl TestMachine {
    fn new(reference_id: EntityId, slots: Vec<Option<GasFilter>>) -> Self {
        Self {
            reference_id,
            slots,
            connected: true,
            power_used: 500.0,
            processed_moles: 3.5,
        }
    }
}

impl FiltrationHost for TestMachine {
    fn reference_id(&self) -> EntityId {
        self.reference_id
    }

    fn filter_slots(&self) -> Vec<Option<GasFilter>> {
        self.slots.clone()
    }

    fn is_fully_connected(&self) -> bool {
        self.connected
    }

    fn power_used(&self) -> f64 {
        self.power_used
    }

    fn processed_moles(&self) -> f64 {
        self.processed_moles
    }
}

fn filter(quantity: f64, gas_hash: i32, life_tier: i32) -> GasFilter {
    GasFilter {
        quantity,
        gas_hash,
        life_tier,
        used_ticks: 12,
    }
}

fn read(adapter: &FiltrationAdapter<'_>, machine: &TestMachine, id: LogicId) -> f64 {
    adapter
        .get_value(machine, id)
        .handled()
        .expect("registered in-band id must be handled")
}

fn write(adapter: &FiltrationAdapter<'_>, machine: &TestMachine, id: LogicId, value: f64) {
    assert!(
        !adapter.set_value(machine, id, value).is_pass_through(),
        "registered in-band write must be consumed"
    );
}

#[test]
fn out_of_band_and_gap_ids_pass_through() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let machine = TestMachine::new(1, vec![Some(filter(1.0, 10, 0))]);

    for id in [0, 273, 1399, 1417] {
        assert_eq!(adapter.get_value(&machine, id), Dispatch::PassThrough);
    }
    // 1408-1409 are reserved gaps inside the filtration band.
    for id in [1408, 1409] {
        assert_eq!(
            adapter.get_value(&machine, id),
            Dispatch::PassThrough,
            "gap id {id} must not be claimed"
        );
    }
}

#[test]
fn zero_slots_reads_the_sentinel_for_every_per_slot_property() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let machine = TestMachine::new(2, Vec::new());

    // Any slot-index write against an empty slot list clamps to 0.
    write(&adapter, &machine, ids::FILTER_SLOT_INDEX, 5.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_SLOT_INDEX), 0.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_SLOT_COUNT), 0.0);

    for id in ids::FILTER_QUANTITY..=ids::FILTER_MAX_TICKS {
        assert_eq!(
            read(&adapter, &machine, id),
            NOT_APPLICABLE,
            "per-slot id {id} must answer the sentinel with no slots"
        );
    }
}

#[test]
fn slot_index_write_clamps_to_slot_count() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let machine = TestMachine::new(3, vec![
        Some(filter(1.0, 10, 0)),
        Some(filter(0.5, 20, 1)),
        None,
    ]);

    write(&adapter, &machine, ids::FILTER_SLOT_INDEX, 9999.0);
    assert_eq!(
        read(&adapter, &machine, ids::FILTER_SLOT_INDEX),
        2.0,
        "slot index must clamp to count - 1"
    );

    write(&adapter, &machine, ids::FILTER_SLOT_INDEX, -3.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_SLOT_INDEX), 0.0);
}

#[test]
fn per_slot_reads_resolve_the_clamped_index_at_query_time() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let mut machine = TestMachine::new(4, vec![
        Some(filter(0.9, 10, 0)),
        Some(filter(0.2, 20, 2)),
    ]);

    write(&adapter, &machine, ids::FILTER_SLOT_INDEX, 1.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_TYPE_HASH), 20.0);

    // The slot list shrinks under the stored index; reads clamp instead of
    // dangling, and the stored index itself is not rewritten.
    machine.slots.truncate(1);
    assert_eq!(read(&adapter, &machine, ids::FILTER_SLOT_INDEX), 1.0);
    assert_eq!(
        read(&adapter, &machine, ids::FILTER_TYPE_HASH),
        10.0,
        "read must resolve against the clamped index"
    );
}

#[test]
fn empty_selected_slot_reads_the_sentinel() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let machine = TestMachine::new(5, vec![Some(filter(1.0, 10, 0)), None]);

    write(&adapter, &machine, ids::FILTER_SLOT_INDEX, 1.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_QUANTITY), NOT_APPLICABLE);
    assert_eq!(read(&adapter, &machine, ids::FILTER_LIFE), NOT_APPLICABLE);

    // The sibling machine-state properties still answer normally.
    assert_eq!(read(&adapter, &machine, ids::FILTER_SLOT_COUNT), 2.0);
}

#[test]
fn per_slot_properties_read_the_selected_filter() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let machine = TestMachine::new(6, vec![
        Some(filter(0.04, 77, 3)),
        Some(filter(0.8, 88, 1)),
    ]);

    assert_eq!(read(&adapter, &machine, ids::FILTER_QUANTITY), 0.04);
    assert_eq!(read(&adapter, &machine, ids::FILTER_IS_LOW), 1.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_IS_EMPTY), 0.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_TYPE_HASH), 77.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_LIFE), 3.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_USED_TICKS), 12.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_MAX_TICKS), 11520.0);

    write(&adapter, &machine, ids::FILTER_SLOT_INDEX, 1.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_IS_LOW), 0.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_MAX_TICKS), 720.0);
}

#[test]
fn degradation_table_falls_back_to_normal_for_unknown_tiers() {
    assert_eq!(max_ticks_for_tier(0), 144);
    assert_eq!(max_ticks_for_tier(1), 720);
    assert_eq!(max_ticks_for_tier(2), 2880);
    assert_eq!(max_ticks_for_tier(3), 11520);
    assert_eq!(max_ticks_for_tier(4), TICKS_BEFORE_DEGRADE[0]);
    assert_eq!(max_ticks_for_tier(-1), TICKS_BEFORE_DEGRADE[0]);
}

#[test]
fn has_empty_filter_counts_missing_and_drained_cartridges() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();

    let healthy = TestMachine::new(7, vec![Some(filter(0.9, 10, 0)), Some(filter(0.1, 20, 0))]);
    assert_eq!(read(&adapter, &healthy, ids::HAS_EMPTY_FILTER), 0.0);

    let drained = TestMachine::new(8, vec![Some(filter(0.9, 10, 0)), Some(filter(0.0, 20, 0))]);
    assert_eq!(read(&adapter, &drained, ids::HAS_EMPTY_FILTER), 1.0);

    let missing = TestMachine::new(9, vec![Some(filter(0.9, 10, 0)), None]);
    assert_eq!(read(&adapter, &missing, ids::HAS_EMPTY_FILTER), 1.0);
}

#[test]
fn machine_state_reads_come_from_the_host() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let mut machine = TestMachine::new(10, vec![Some(filter(1.0, 10, 0))]);

    assert_eq!(read(&adapter, &machine, ids::IS_FULLY_CONNECTED), 1.0);
    assert_eq!(read(&adapter, &machine, ids::FILTER_POWER_USED), 500.0);
    assert_eq!(read(&adapter, &machine, ids::FILTRATION_PROCESSED_MOLES), 3.5);

    machine.connected = false;
    assert_eq!(read(&adapter, &machine, ids::IS_FULLY_CONNECTED), 0.0);
}

#[test]
fn pressure_limits_default_to_unlimited_and_clamp_negative_writes() {
    let runtime = LogicRuntime::init().unwrap();
    let adapter = runtime.filtration_adapter();
    let machine = TestMachine::new(11, vec![Some(filter(1.0, 10, 0))]);

    assert_eq!(read(&adapter, &machine, ids::OUTPUT_PRESSURE_LIMIT), 0.0);
    assert_eq!(read(&adapter, &machine, ids::INPUT_PRESSURE_LIMIT), 0.0);

    write(&adapter, &machine, ids::OUTPUT_PRESSURE_LIMIT, 5000.0);
    assert_eq!(read(&adapter, &machine, ids::OUTPUT_PRESSURE_LIMIT), 5000.0);

    write(&adapter, &machine, ids::OUTPUT_PRESSURE_LIMIT, -250.0);
    assert_eq!(
        read(&adapter, &machine, ids::OUTPUT_PRESSURE_LIMIT),
        0.0,
        "negative limits must clamp to 0 (unlimited)"
    );

    write(&adapter, &machine, ids::INPUT_PRESSURE_LIMIT, 101.325);
    assert_eq!(read(&adapter, &machine, ids::INPUT_PRESSURE_LIMIT), 101.325);
}
