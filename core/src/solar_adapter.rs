//! Solar panel adapter. Read-only visibility, damage, and movement data.
//!
//! Health and efficiency percentages are derived from the declared
//! capability surface: health = (1 - damageRatio) * 100, efficiency =
//! visibility * (1 - damageRatio) * 100, both rounded. The host keeps its
//! own integers private; these are the documented approximations.

use crate::{
    adapter::{flag, Dispatch, PropertyAdapter},
    catalog::ids,
    registry::LogicRegistry,
    types::LogicId,
};

/// Read-only capability surface of a live solar panel.
pub trait SolarHost {
    /// Sun visibility factor, 0 to 1, after obstructions.
    fn sun_visibility(&self) -> f64;
    /// Accumulated damage ratio, 0 to 1.
    fn damage_ratio(&self) -> f64;
    /// Total damage points.
    fn damage_total(&self) -> f64;
    fn is_operable(&self) -> bool;
    fn is_broken(&self) -> bool;
    /// Horizontal rotation speed in degrees per second.
    fn movement_speed_horizontal(&self) -> f64;
    /// Vertical rotation speed in degrees per second.
    fn movement_speed_vertical(&self) -> f64;
}

pub struct SolarAdapter<'r> {
    registry: &'r LogicRegistry,
}

impl<'r> SolarAdapter<'r> {
    pub fn new(registry: &'r LogicRegistry) -> Self {
        Self { registry }
    }
}

impl PropertyAdapter for SolarAdapter<'_> {
    type Host = dyn SolarHost;

    const BAND: (LogicId, LogicId) = (ids::SOLAR_VISIBILITY, ids::SOLAR_MOVEMENT_SPEED_V);

    fn registry(&self) -> &LogicRegistry {
        self.registry
    }

    fn get_value(&self, host: &dyn SolarHost, id: LogicId) -> Dispatch<f64> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let value = match id {
            ids::SOLAR_VISIBILITY => host.sun_visibility(),
            ids::SOLAR_DAMAGE_RATIO => host.damage_ratio(),
            ids::SOLAR_DAMAGE_TOTAL => host.damage_total(),
            ids::SOLAR_HEALTH => ((1.0 - host.damage_ratio()) * 100.0).round(),
            ids::SOLAR_EFFICIENCY => {
                (host.sun_visibility() * (1.0 - host.damage_ratio()) * 100.0).round()
            }
            ids::SOLAR_IS_OPERABLE => flag(host.is_operable()),
            ids::SOLAR_IS_BROKEN => flag(host.is_broken()),
            ids::SOLAR_MOVEMENT_SPEED_H => host.movement_speed_horizontal(),
            ids::SOLAR_MOVEMENT_SPEED_V => host.movement_speed_vertical(),
            _ => 0.0,
        };
        Dispatch::Handled(value)
    }

    fn set_value(&self, _host: &dyn SolarHost, id: LogicId, _value: f64) -> Dispatch<()> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }
        Dispatch::Handled(())
    }
}
