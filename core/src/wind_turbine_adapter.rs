//! Wind turbine adapter. Read-only wind and rotor data, with a storm-aware
//! maximum power figure.

use crate::{
    adapter::{Dispatch, PropertyAdapter},
    catalog::ids,
    registry::LogicRegistry,
    types::LogicId,
};

/// Read-only capability surface of a live wind turbine.
pub trait WindTurbineHost {
    /// Global wind strength, 0 to 1.
    fn wind_strength(&self) -> f64;
    fn max_power_normal(&self) -> f64;
    fn max_power_storm(&self) -> f64;
    /// True while a storm weather event is running.
    fn storm_active(&self) -> bool;
    /// Blade rotation speed, 0 to 1.
    fn turbine_rotation_speed(&self) -> f64;
    /// Clamped atmospheric pressure in kPa, as used in the power formula.
    fn atmospheric_pressure(&self) -> f64;
}

pub struct WindTurbineAdapter<'r> {
    registry: &'r LogicRegistry,
}

impl<'r> WindTurbineAdapter<'r> {
    pub fn new(registry: &'r LogicRegistry) -> Self {
        Self { registry }
    }
}

impl PropertyAdapter for WindTurbineAdapter<'_> {
    type Host = dyn WindTurbineHost;

    const BAND: (LogicId, LogicId) = (ids::WIND_SPEED, ids::ATMOSPHERIC_PRESSURE);

    fn registry(&self) -> &LogicRegistry {
        self.registry
    }

    fn get_value(&self, host: &dyn WindTurbineHost, id: LogicId) -> Dispatch<f64> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let value = match id {
            ids::WIND_SPEED => host.wind_strength(),
            ids::MAX_POWER => {
                if host.storm_active() {
                    host.max_power_storm()
                } else {
                    host.max_power_normal()
                }
            }
            ids::TURBINE_SPEED => host.turbine_rotation_speed(),
            ids::ATMOSPHERIC_PRESSURE => host.atmospheric_pressure(),
            _ => 0.0,
        };
        Dispatch::Handled(value)
    }

    fn set_value(&self, _host: &dyn WindTurbineHost, id: LogicId, _value: f64) -> Dispatch<()> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }
        Dispatch::Handled(())
    }
}
