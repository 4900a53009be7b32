//! Battery adapter. Read-only: reveals the power deficit and submersion
//! state the host tracks but never exposes over the native protocol.

use crate::{
    adapter::{flag, Dispatch, PropertyAdapter},
    catalog::ids,
    registry::LogicRegistry,
    types::LogicId,
};

/// Read-only capability surface of a live battery.
pub trait BatteryHost {
    fn power_stored(&self) -> f64;
    fn power_maximum(&self) -> f64;
    fn is_submerged(&self) -> bool;
    fn input_submerged_ticks(&self) -> u32;
    fn output_submerged_ticks(&self) -> u32;
    fn is_empty(&self) -> bool;
    fn is_charged(&self) -> bool;
}

pub struct BatteryAdapter<'r> {
    registry: &'r LogicRegistry,
}

impl<'r> BatteryAdapter<'r> {
    pub fn new(registry: &'r LogicRegistry) -> Self {
        Self { registry }
    }
}

impl PropertyAdapter for BatteryAdapter<'_> {
    type Host = dyn BatteryHost;

    const BAND: (LogicId, LogicId) = (ids::POWER_DELTA, ids::BATTERY_IS_CHARGED);

    fn registry(&self) -> &LogicRegistry {
        self.registry
    }

    fn get_value(&self, host: &dyn BatteryHost, id: LogicId) -> Dispatch<f64> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let value = match id {
            // Negative while the battery is not full.
            ids::POWER_DELTA => host.power_stored() - host.power_maximum(),
            ids::BATTERY_IS_SUBMERGED => flag(host.is_submerged()),
            ids::INPUT_SUBMERGED_TICKS => f64::from(host.input_submerged_ticks()),
            ids::OUTPUT_SUBMERGED_TICKS => f64::from(host.output_submerged_ticks()),
            ids::BATTERY_IS_EMPTY => flag(host.is_empty()),
            ids::BATTERY_IS_CHARGED => flag(host.is_charged()),
            _ => 0.0,
        };
        Dispatch::Handled(value)
    }

    fn set_value(&self, _host: &dyn BatteryHost, id: LogicId, _value: f64) -> Dispatch<()> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }
        // Every battery property is read-only; consume the write.
        Dispatch::Handled(())
    }
}
