//! The dispatch interception protocol.
//!
//! RULE: range check first, full delegation on miss. An adapter answers a
//! property call only when the id falls inside its reserved band AND the
//! registry knows the id; everything else returns [`Dispatch::PassThrough`]
//! so the host's native handling runs unchanged. Getting this wrong either
//! hides native properties or answers ids the registry never described.

use crate::{registry::LogicRegistry, types::LogicId};

/// Documented "not currently applicable" return value: no selected contact,
/// empty filter slot, missing subsystem. Distinct from a real zero reading.
pub const NOT_APPLICABLE: f64 = -1.0;

/// Boolean properties cross the dispatch boundary as 1.0 / 0.0.
pub fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Outcome of offering a property call to an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch<T> {
    /// Answered locally; the host's own handling must not run.
    Handled(T),
    /// Not ours; control returns to the host's native logic unchanged.
    PassThrough,
}

impl<T> Dispatch<T> {
    pub fn handled(self) -> Option<T> {
        match self {
            Dispatch::Handled(v) => Some(v),
            Dispatch::PassThrough => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Dispatch::PassThrough)
    }

    /// The shim at the real host boundary: try the adapter, fall back to the
    /// native computation on a miss.
    pub fn or_native(self, native: impl FnOnce() -> T) -> T {
        match self {
            Dispatch::Handled(v) => v,
            Dispatch::PassThrough => native(),
        }
    }
}

/// The per-device-kind interception contract.
///
/// Each device family implements this once against its own narrow host
/// capability trait. `can_read`/`can_write` compose with (never override)
/// the host's own answer for ids outside the band, because they return
/// `false` there and the boundary shim ORs the results.
pub trait PropertyAdapter {
    /// The read-only capability surface this adapter needs from the host.
    type Host: ?Sized;

    /// Inclusive id band reserved for this device family.
    const BAND: (LogicId, LogicId);

    fn registry(&self) -> &LogicRegistry;

    fn in_band(id: LogicId) -> bool {
        let (lo, hi) = Self::BAND;
        (lo..=hi).contains(&id)
    }

    /// True iff this adapter will answer reads for `id`.
    fn can_read(&self, id: LogicId) -> bool {
        Self::in_band(id) && self.registry().get(id).is_some_and(|d| d.access.readable())
    }

    /// True iff this adapter will accept writes for `id`. Most extended
    /// properties are read-only; the registry's access table is the single
    /// source of truth for the writable subset.
    fn can_write(&self, id: LogicId) -> bool {
        Self::in_band(id) && self.registry().get(id).is_some_and(|d| d.access.writable())
    }

    /// Band membership plus registration. Ids in a band's reserved gaps are
    /// not claimed and must pass through.
    fn claims(&self, id: LogicId) -> bool {
        Self::in_band(id) && self.registry().is_extended(id)
    }

    /// Resolve a read. Never errors: not-applicable values come back as the
    /// [`NOT_APPLICABLE`] sentinel inside `Handled`.
    fn get_value(&self, host: &Self::Host, id: LogicId) -> Dispatch<f64>;

    /// Apply a write. Values are validated/clamped, never rejected.
    fn set_value(&self, host: &Self::Host, id: LogicId, value: f64) -> Dispatch<()>;
}
