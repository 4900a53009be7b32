//! Shared primitive types used across the extension framework.

/// Numeric identifier of a logic property. Extended properties live in the
/// reserved band starting at [`crate::registry::EXTENDED_BASE`].
pub type LogicId = u16;

/// A stable, unique identifier for a live device, assigned by the host.
pub type EntityId = i64;
