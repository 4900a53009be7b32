//! Process lifecycle wiring.
//!
//! Two lifecycle points: init builds the registry and starts with an empty
//! state store; teardown clears the state store and leaves the registry
//! intact. Init after teardown yields byte-identical registry contents.

use crate::{
    battery_adapter::BatteryAdapter,
    catalog,
    daylight_adapter::DaylightAdapter,
    dish_adapter::DishAdapter,
    error::LogicResult,
    export,
    filtration_adapter::FiltrationAdapter,
    registry::LogicRegistry,
    solar_adapter::SolarAdapter,
    state::DeviceStateStore,
    types::EntityId,
    wind_turbine_adapter::WindTurbineAdapter,
};

/// Owns the registry and the per-entity state store, and hands out the
/// per-family adapters that borrow both.
pub struct LogicRuntime {
    registry: LogicRegistry,
    store: DeviceStateStore,
}

impl LogicRuntime {
    /// Build the full catalog and an empty state store.
    pub fn init() -> LogicResult<Self> {
        let registry = catalog::build_registry()?;
        log::info!("Registered {} extended logic types", registry.len());
        Ok(Self {
            registry,
            store: DeviceStateStore::new(),
        })
    }

    pub fn registry(&self) -> &LogicRegistry {
        &self.registry
    }

    pub fn state(&self) -> &DeviceStateStore {
        &self.store
    }

    /// Clear all per-entity state. The registry is immutable data and is
    /// left untouched.
    pub fn teardown(&self) {
        let tracked = self.store.tracked();
        self.store.clear();
        log::info!("Cleared extended-property state for {tracked} tracked devices");
    }

    /// Host notification that a device was destroyed.
    pub fn device_destroyed(&self, entity: EntityId) {
        self.store.remove(entity);
    }

    pub fn dish_adapter(&self) -> DishAdapter<'_> {
        DishAdapter::new(&self.registry, &self.store)
    }

    pub fn filtration_adapter(&self) -> FiltrationAdapter<'_> {
        FiltrationAdapter::new(&self.registry, &self.store)
    }

    pub fn battery_adapter(&self) -> BatteryAdapter<'_> {
        BatteryAdapter::new(&self.registry)
    }

    pub fn wind_turbine_adapter(&self) -> WindTurbineAdapter<'_> {
        WindTurbineAdapter::new(&self.registry)
    }

    pub fn daylight_adapter(&self) -> DaylightAdapter<'_> {
        DaylightAdapter::new(&self.registry)
    }

    pub fn solar_adapter(&self) -> SolarAdapter<'_> {
        SolarAdapter::new(&self.registry)
    }

    /// The tooling export document for the current registry.
    pub fn export_json(&self) -> LogicResult<String> {
        export::to_json(&self.registry)
    }
}
