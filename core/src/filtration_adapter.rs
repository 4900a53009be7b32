//! Filtration machine adapter: slot indirection and machine state.
//!
//! The stored slot index selects one gas filter among the machine's
//! fixed-order filter slots. Per-filter reads resolve the index at query
//! time, clamped into the current slot list; the index is never cached
//! against a particular filter.

use crate::{
    adapter::{flag, Dispatch, PropertyAdapter, NOT_APPLICABLE},
    catalog::ids,
    contacts::clamped_index,
    registry::LogicRegistry,
    state::DeviceStateStore,
    types::{EntityId, LogicId},
};

/// Ticks a filter survives before one degradation step, indexed by life
/// tier (Normal, Medium, Large, SuperHeavy).
pub const TICKS_BEFORE_DEGRADE: [i32; 4] = [144, 720, 2880, 11520];

/// Max ticks before degradation for a life tier. Unknown tiers fall back to
/// the Normal entry.
pub fn max_ticks_for_tier(tier: i32) -> i32 {
    usize::try_from(tier)
        .ok()
        .and_then(|i| TICKS_BEFORE_DEGRADE.get(i))
        .copied()
        .unwrap_or(TICKS_BEFORE_DEGRADE[0])
}

/// One gas filter cartridge, snapshotted from a machine slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GasFilter {
    /// Charge remaining, 0.0 to 1.0.
    pub quantity: f64,
    /// Hash of the gas type this cartridge filters.
    pub gas_hash: i32,
    /// Life tier: 0=Normal, 1=Medium, 2=Large, 3=SuperHeavy.
    pub life_tier: i32,
    /// Ticks used since the last degradation step.
    pub used_ticks: i32,
}

impl GasFilter {
    pub fn is_low(&self) -> bool {
        self.quantity <= 0.05
    }

    pub fn is_empty(&self) -> bool {
        self.quantity <= 0.0
    }

    pub fn max_ticks(&self) -> i32 {
        max_ticks_for_tier(self.life_tier)
    }
}

/// What the adapter needs from a live filtration machine.
pub trait FiltrationHost {
    fn reference_id(&self) -> EntityId;

    /// The machine's gas filter slots in fixed order. `None` means the slot
    /// exists but holds no cartridge.
    fn filter_slots(&self) -> Vec<Option<GasFilter>>;

    fn is_fully_connected(&self) -> bool;

    /// Power consumed during filtration this tick.
    fn power_used(&self) -> f64;

    /// Moles processed during this atmospheric tick.
    fn processed_moles(&self) -> f64;
}

pub struct FiltrationAdapter<'r> {
    registry: &'r LogicRegistry,
    store: &'r DeviceStateStore,
}

impl<'r> FiltrationAdapter<'r> {
    pub fn new(registry: &'r LogicRegistry, store: &'r DeviceStateStore) -> Self {
        Self { registry, store }
    }

    /// Properties of the filter at the stored slot index, clamped into the
    /// current slot list. No slots, or an empty selected slot, answers the
    /// sentinel.
    fn slot_value(&self, host: &dyn FiltrationHost, stored_index: i32, id: LogicId) -> f64 {
        let slots = host.filter_slots();
        if slots.is_empty() {
            return NOT_APPLICABLE;
        }

        let index = clamped_index(stored_index, slots.len());
        let Some(filter) = &slots[index] else {
            return NOT_APPLICABLE;
        };

        match id {
            ids::FILTER_QUANTITY => filter.quantity,
            ids::FILTER_IS_LOW => flag(filter.is_low()),
            ids::FILTER_IS_EMPTY => flag(filter.is_empty()),
            ids::FILTER_TYPE_HASH => f64::from(filter.gas_hash),
            ids::FILTER_LIFE => f64::from(filter.life_tier),
            ids::FILTER_USED_TICKS => f64::from(filter.used_ticks),
            ids::FILTER_MAX_TICKS => f64::from(filter.max_ticks()),
            _ => 0.0,
        }
    }
}

impl PropertyAdapter for FiltrationAdapter<'_> {
    type Host = dyn FiltrationHost;

    const BAND: (LogicId, LogicId) = (ids::FILTER_SLOT_INDEX, ids::FILTER_MAX_TICKS);

    fn registry(&self) -> &LogicRegistry {
        self.registry
    }

    fn get_value(&self, host: &dyn FiltrationHost, id: LogicId) -> Dispatch<f64> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let state = self.store.filtration(host.reference_id());
        let value = match id {
            ids::FILTER_SLOT_INDEX => f64::from(state.slot_index),
            ids::FILTER_SLOT_COUNT => host.filter_slots().len() as f64,
            ids::HAS_EMPTY_FILTER => flag(
                host.filter_slots()
                    .iter()
                    .any(|slot| slot.as_ref().map_or(true, GasFilter::is_empty)),
            ),
            ids::IS_FULLY_CONNECTED => flag(host.is_fully_connected()),
            ids::FILTER_POWER_USED => host.power_used(),
            ids::FILTRATION_PROCESSED_MOLES => host.processed_moles(),
            ids::OUTPUT_PRESSURE_LIMIT => state.output_pressure_limit,
            ids::INPUT_PRESSURE_LIMIT => state.input_pressure_limit,

            ids::FILTER_QUANTITY..=ids::FILTER_MAX_TICKS => {
                self.slot_value(host, state.slot_index, id)
            }

            _ => 0.0,
        };
        Dispatch::Handled(value)
    }

    fn set_value(&self, host: &dyn FiltrationHost, id: LogicId, value: f64) -> Dispatch<()> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let entity = host.reference_id();
        match id {
            ids::FILTER_SLOT_INDEX => {
                let max = host.filter_slots().len().saturating_sub(1) as i32;
                self.store
                    .update_filtration(entity, |s| s.slot_index = (value as i32).clamp(0, max));
            }
            // 0 means unlimited; negative limits have no physical meaning.
            ids::OUTPUT_PRESSURE_LIMIT => {
                self.store
                    .update_filtration(entity, |s| s.output_pressure_limit = value.max(0.0));
            }
            ids::INPUT_PRESSURE_LIMIT => {
                self.store
                    .update_filtration(entity, |s| s.input_pressure_limit = value.max(0.0));
            }
            _ => {}
        }
        Dispatch::Handled(())
    }
}
