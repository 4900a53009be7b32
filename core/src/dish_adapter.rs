//! Scanner dish adapter: contact selection, filtering, and dish state.
//!
//! The selection cursor and filter settings live in the per-entity store;
//! the scan list itself always comes fresh from the host. Every
//! selected-contact property answers the not-applicable sentinel when the
//! current filtered view is empty.

use crate::{
    adapter::{flag, Dispatch, PropertyAdapter, NOT_APPLICABLE},
    catalog::ids,
    contacts::{self, Contact, FilterMode},
    registry::LogicRegistry,
    state::{DeviceStateStore, DishState},
    types::{EntityId, LogicId},
};

/// What the adapter needs from a live dish. Read-only; queries have no side
/// effects on the simulation.
pub trait DishHost {
    fn reference_id(&self) -> EntityId;

    /// Snapshot of the current scan list, in the host's order. Treated as
    /// stable for the duration of one property call.
    fn contacts(&self) -> Vec<Contact>;

    /// Watts actually reaching `contact` given the dish's current aim.
    fn wattage_on_contact(&self, contact: &Contact) -> f64;

    /// Reference id of the contact under interrogation, if any.
    fn interrogating_contact(&self) -> Option<EntityId>;

    /// Current sim-time in seconds, the zero point of contact lifetimes.
    fn now(&self) -> f64;
}

pub struct DishAdapter<'r> {
    registry: &'r LogicRegistry,
    store: &'r DeviceStateStore,
}

impl<'r> DishAdapter<'r> {
    pub fn new(registry: &'r LogicRegistry, store: &'r DeviceStateStore) -> Self {
        Self { registry, store }
    }

    /// Properties of the currently selected contact. No selection (empty
    /// filtered view) answers the sentinel for every one of them.
    fn selected_value(
        &self,
        host: &dyn DishHost,
        state: DishState,
        scan: &[Contact],
        id: LogicId,
    ) -> f64 {
        let Some(contact) =
            contacts::selected(scan, state.filter_mode, state.filter_value, state.contact_index)
        else {
            return NOT_APPLICABLE;
        };

        match id {
            ids::CONTACT_SHUTTLE_TYPE => f64::from(contact.shuttle_type),
            ids::CONTACT_LIFETIME => contact.end_lifetime - host.now(),
            ids::CONTACT_DEGREE_OFFSET => contact.degree_offset,
            ids::CONTACT_RESOLVED => flag(contact.time_till_resolve <= 0.0),
            ids::CONTACT_CONTACTED => flag(contact.contacted),
            ids::CONTACT_RESOLUTION_PROGRESS => contacts::resolution_progress(contact),
            ids::CONTACT_MIN_WATTS_RESOLVE => contact.min_watts_resolve,
            ids::CONTACT_MIN_WATTS_CONTACT => contact.min_watts_contact,
            ids::CONTACT_SECONDS_TO_CONTACT => contact.seconds_to_contact,
            ids::CONTACT_TRADER_HASH => f64::from(contact.trader_hash),
            ids::CONTACT_REFERENCE_ID => contact.reference_id as f64,
            _ => 0.0,
        }
    }
}

impl PropertyAdapter for DishAdapter<'_> {
    type Host = dyn DishHost;

    const BAND: (LogicId, LogicId) = (ids::CONTACT_INDEX, ids::DISH_INTERROGATING_ID);

    fn registry(&self) -> &LogicRegistry {
        self.registry
    }

    fn get_value(&self, host: &dyn DishHost, id: LogicId) -> Dispatch<f64> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let state = self.store.dish(host.reference_id());
        let scan = host.contacts();

        let value = match id {
            ids::CONTACT_INDEX => f64::from(state.contact_index),
            ids::CONTACT_COUNT => scan.len() as f64,
            ids::FILTER_MODE => f64::from(state.filter_mode as i32),
            ids::FILTER_VALUE => f64::from(state.filter_value),
            ids::FILTERED_COUNT => {
                contacts::filtered(&scan, state.filter_mode, state.filter_value).len() as f64
            }

            ids::CONTACT_SHUTTLE_TYPE..=ids::CONTACT_REFERENCE_ID => {
                self.selected_value(host, state, &scan, id)
            }

            ids::DISH_WATTAGE_ON_CONTACT => {
                match contacts::selected(
                    &scan,
                    state.filter_mode,
                    state.filter_value,
                    state.contact_index,
                ) {
                    Some(contact) => host.wattage_on_contact(contact),
                    None => NOT_APPLICABLE,
                }
            }
            ids::DISH_IS_INTERROGATING => flag(host.interrogating_contact().is_some()),
            ids::DISH_INTERROGATING_ID => {
                host.interrogating_contact().map_or(0.0, |r| r as f64)
            }

            _ => 0.0,
        };
        Dispatch::Handled(value)
    }

    fn set_value(&self, host: &dyn DishHost, id: LogicId, value: f64) -> Dispatch<()> {
        if !self.claims(id) {
            return Dispatch::PassThrough;
        }

        let entity = host.reference_id();
        match id {
            ids::CONTACT_INDEX => {
                let state = self.store.dish(entity);
                let view_len =
                    contacts::filtered(&host.contacts(), state.filter_mode, state.filter_value)
                        .len();
                let max = view_len.saturating_sub(1) as i32;
                self.store
                    .update_dish(entity, |s| s.contact_index = (value as i32).clamp(0, max));
            }

            ids::FILTER_MODE => {
                // Unknown modes are ignored, not clamped.
                if let Some(mode) = FilterMode::from_raw(value as i32) {
                    self.store.update_dish(entity, |s| {
                        s.filter_mode = mode;
                        // A new filter invalidates the old cursor's meaning.
                        s.contact_index = 0;
                    });
                }
            }

            ids::FILTER_VALUE => {
                self.store.update_dish(entity, |s| {
                    s.filter_value = value as i32;
                    s.contact_index = 0;
                });
            }

            // In-band read-only ids: consume the write. Forwarding would
            // hand the host an id it never defined.
            _ => {}
        }
        Dispatch::Handled(())
    }
}
