//! Registry of extended logic properties.
//!
//! RULE: the registry is append-only and populated exactly once at startup.
//! Nothing removes or replaces an entry after registration; every lookup for
//! the rest of the process sees the same table.

use crate::{
    descriptor::LogicDescriptor,
    error::{LogicError, LogicResult},
    types::LogicId,
};
use std::collections::HashMap;

/// Lowest identifier in the reserved band. Everything below this value
/// belongs to the host's native property space and is never answered here.
pub const EXTENDED_BASE: LogicId = 1000;

/// Immutable table of extended property descriptors, addressable by id or by
/// name, iterable in registration order.
#[derive(Debug, Default)]
pub struct LogicRegistry {
    entries: Vec<LogicDescriptor>,
    by_id: HashMap<LogicId, usize>,
    by_name: HashMap<String, usize>,
}

impl LogicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor. Duplicate ids and duplicate names are
    /// startup-fatal programming errors, never expected at runtime.
    pub fn register(&mut self, descriptor: LogicDescriptor) -> LogicResult<()> {
        if self.by_id.contains_key(&descriptor.id) {
            return Err(LogicError::DuplicateId {
                id: descriptor.id,
                name: descriptor.name.clone(),
            });
        }
        if self.by_name.contains_key(&descriptor.name) {
            return Err(LogicError::DuplicateName {
                name: descriptor.name.clone(),
            });
        }

        let index = self.entries.len();
        self.by_id.insert(descriptor.id, index);
        self.by_name.insert(descriptor.name.clone(), index);
        self.entries.push(descriptor);
        Ok(())
    }

    pub fn get(&self, id: LogicId) -> Option<&LogicDescriptor> {
        self.by_id.get(&id).map(|&i| &self.entries[i])
    }

    pub fn get_by_name(&self, name: &str) -> Option<&LogicDescriptor> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// True iff `id` lies in the reserved band AND is registered. Guards
    /// against treating arbitrary large numbers, or reserved gaps inside a
    /// band, as extended properties.
    pub fn is_extended(&self, id: LogicId) -> bool {
        id >= EXTENDED_BASE && self.by_id.contains_key(&id)
    }

    /// Descriptors in registration order. Stable across runs for the same
    /// build; the export document depends on this.
    pub fn iter(&self) -> impl Iterator<Item = &LogicDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
