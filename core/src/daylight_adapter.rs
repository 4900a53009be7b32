//! Daylight sensor adapter. Read-only world and orbital data.

use crate::{
    adapter::{flag, Dispatch, PropertyAdapter},
    catalog::ids,
    registry::LogicRegistry,
    types::LogicId,
};

/// Read-only capability surface for world-level environment data.
pub trait EnvironmentHost {
    /// Time of day, 0 to 1 (0 = sunrise, 0.25 = noon, 0.5 = sunset).
    fn time_of_day(&self) -> f64;
    fn is_eclipse(&self) -> bool;
    /// Eclipse intensity, 0 to 1.
    fn eclipse_ratio(&self) -> f64;
    fn days_past(&self) -> i32;
    fn day_length_seconds(&self) -> f64;
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
    /// Solar ratio of the running weather event. `None` when no event is
    /// active, which reads as full sun.
    fn weather_solar_ratio(&self) -> Option<f64>;
}

pub struct DaylightAdapter<'r> {
    registry: &'r LogicRegistry,
}

impl<'r> DaylightAdapter<'r> {
    pub fn new(registry: &'r LogicRegistry) -> Self {
        Self { registry }
    }
}

impl PropertyAdapter for DaylightAdapter<'_> {
    type Host = dyn EnvironmentHost;

    const BAND: (LogicId, LogicId) = (ids::TIME_OF_DAY, ids::WEATHER_SOLAR_RATIO);

    fn registry(&self) -> &LogicRegistry {
        self.registry
    }

    fn get_value(&self, host: &dyn EnvironmentHost, id: LogicId) -> Dispatch<f64> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let value = match id {
            ids::TIME_OF_DAY => host.time_of_day(),
            ids::IS_ECLIPSE => flag(host.is_eclipse()),
            ids::ECLIPSE_RATIO => host.eclipse_ratio(),
            ids::DAYS_PAST => f64::from(host.days_past()),
            ids::DAY_LENGTH_SECONDS => host.day_length_seconds(),
            ids::LATITUDE => host.latitude(),
            ids::LONGITUDE => host.longitude(),
            ids::WEATHER_SOLAR_RATIO => host.weather_solar_ratio().unwrap_or(1.0),
            _ => 0.0,
        };
        Dispatch::Handled(value)
    }

    fn set_value(&self, _host: &dyn EnvironmentHost, id: LogicId, _value: f64) -> Dispatch<()> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }
        Dispatch::Handled(())
    }
}
