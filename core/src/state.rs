//! Per-entity state for properties that need memory.
//!
//! RULE: only this module touches the state maps. Adapters snapshot a record
//! out by value, or mutate it through a closure; the lock is held only for
//! the map operation, never across a full resolve call.
//!
//! Nothing here persists: the store starts empty at init, entries are
//! removed when the host destroys a device, and teardown clears everything.

use crate::{contacts::FilterMode, types::EntityId};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Cursor and filter settings for one scanner dish.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DishState {
    /// Selected contact index into the current filtered view (0-based).
    pub contact_index: i32,
    pub filter_mode: FilterMode,
    /// Filter parameter, e.g. the shuttle type when filtering by type.
    pub filter_value: i32,
}

/// Slot cursor and pressure settings for one filtration machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FiltrationState {
    /// Selected filter slot index (0-based).
    pub slot_index: i32,
    /// Maximum output pressure in kPa. 0 = unlimited.
    pub output_pressure_limit: f64,
    /// Minimum input pressure in kPa. 0 = no minimum.
    pub input_pressure_limit: f64,
}

/// Concurrent map from entity id to mutable per-device records, one map per
/// device family. Records are created lazily with all-default fields.
#[derive(Debug, Default)]
pub struct DeviceStateStore {
    dishes: Mutex<HashMap<EntityId, DishState>>,
    filtration: Mutex<HashMap<EntityId, FiltrationState>>,
}

impl DeviceStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the dish record for `entity`, creating it with defaults
    /// on first access.
    pub fn dish(&self, entity: EntityId) -> DishState {
        *self.dishes.lock().entry(entity).or_default()
    }

    pub fn update_dish(&self, entity: EntityId, f: impl FnOnce(&mut DishState)) {
        let mut map = self.dishes.lock();
        f(map.entry(entity).or_default());
    }

    pub fn filtration(&self, entity: EntityId) -> FiltrationState {
        *self.filtration.lock().entry(entity).or_default()
    }

    pub fn update_filtration(&self, entity: EntityId, f: impl FnOnce(&mut FiltrationState)) {
        let mut map = self.filtration.lock();
        f(map.entry(entity).or_default());
    }

    /// Drop every record for a destroyed entity. No-op if none exist.
    pub fn remove(&self, entity: EntityId) {
        self.dishes.lock().remove(&entity);
        self.filtration.lock().remove(&entity);
    }

    /// Empty the whole store. Called at process teardown and re-init.
    pub fn clear(&self) {
        self.dishes.lock().clear();
        self.filtration.lock().clear();
    }

    /// Number of entities with at least one live record.
    pub fn tracked(&self) -> usize {
        self.dishes.lock().len() + self.filtration.lock().len()
    }
}
