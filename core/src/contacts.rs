//! Contact filtering and selection.
//!
//! Pure functions over a dish's current scan list. The filtered view is
//! recomputed from scratch on every query and never cached: a stored cursor
//! is only meaningful relative to the view built in the same call.

use crate::types::EntityId;

/// One scanned contact, snapshotted from the host. Field order mirrors the
/// scan record the host keeps per contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub reference_id: EntityId,
    /// Craft class of the contact (0 = none).
    pub shuttle_type: i32,
    /// True once the trader behind this contact has been engaged.
    pub contacted: bool,
    /// Absolute sim-time at which the contact leaves range.
    pub end_lifetime: f64,
    /// Alignment angle in degrees. Lower is better aligned.
    pub degree_offset: f64,
    /// Countdown until the contact is resolved; <= 0 means resolved.
    pub time_till_resolve: f64,
    /// Countdown value when interrogation started.
    pub start_time_till_resolve: f64,
    pub min_watts_resolve: f64,
    pub min_watts_contact: f64,
    pub seconds_to_contact: f64,
    pub trader_hash: i32,
}

/// Filter applied to the scan list before the selection cursor is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// No filtering, keep every contact.
    #[default]
    All = 0,
    /// Keep contacts whose shuttle type equals the stored filter value.
    ShuttleType = 1,
    /// Keep contacts whose resolve countdown has elapsed.
    Resolved = 2,
    /// Keep contacts still counting down.
    Unresolved = 3,
    /// Keep contacts whose trader has been engaged.
    Contacted = 4,
    /// Keep contacts whose trader has not been engaged.
    NotContacted = 5,
}

impl FilterMode {
    /// Decode a value written over the dispatch boundary. Unknown values
    /// yield `None`; writers ignore them rather than erroring.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(FilterMode::All),
            1 => Some(FilterMode::ShuttleType),
            2 => Some(FilterMode::Resolved),
            3 => Some(FilterMode::Unresolved),
            4 => Some(FilterMode::Contacted),
            5 => Some(FilterMode::NotContacted),
            _ => None,
        }
    }

    fn matches(self, filter_value: i32, contact: &Contact) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::ShuttleType => contact.shuttle_type == filter_value,
            FilterMode::Resolved => contact.time_till_resolve <= 0.0,
            FilterMode::Unresolved => contact.time_till_resolve > 0.0,
            FilterMode::Contacted => contact.contacted,
            FilterMode::NotContacted => !contact.contacted,
        }
    }
}

/// The ordered subsequence of `contacts` matching the filter settings.
/// Relative order from the full list is preserved.
pub fn filtered<'a>(contacts: &'a [Contact], mode: FilterMode, filter_value: i32) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| mode.matches(filter_value, c))
        .collect()
}

/// Clamp a stored cursor into `[0, len - 1]`. Only meaningful for a
/// non-empty view; callers handle `len == 0` as "no selection".
pub fn clamped_index(stored: i32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i32;
    stored.clamp(0, max) as usize
}

/// Resolve the stored cursor against the current filtered view. An empty
/// view yields no selection.
pub fn selected<'a>(
    contacts: &'a [Contact],
    mode: FilterMode,
    filter_value: i32,
    stored_index: i32,
) -> Option<&'a Contact> {
    let view = filtered(contacts, mode, filter_value);
    if view.is_empty() {
        return None;
    }
    Some(view[clamped_index(stored_index, view.len())])
}

/// Interrogation progress of a contact in `[0, 1]`. A contact that never
/// needed resolving reads as fully resolved.
pub fn resolution_progress(contact: &Contact) -> f64 {
    if contact.start_time_till_resolve <= 0.0 {
        return 1.0;
    }
    1.0 - contact.time_till_resolve / contact.start_time_till_resolve
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(reference_id: EntityId, shuttle_type: i32, contacted: bool, ttr: f64) -> Contact {
        Contact {
            reference_id,
            shuttle_type,
            contacted,
            end_lifetime: 600.0,
            degree_offset: 1.5,
            time_till_resolve: ttr,
            start_time_till_resolve: 30.0,
            min_watts_resolve: 500.0,
            min_watts_contact: 250.0,
            seconds_to_contact: 15.0,
            trader_hash: 0x5EED,
        }
    }

    fn scan_list() -> Vec<Contact> {
        vec![
            contact(11, 1, false, 0.0),
            contact(22, 3, true, 12.0),
            contact(33, 1, true, -4.0),
        ]
    }

    #[test]
    fn all_mode_keeps_the_full_list_in_order() {
        let list = scan_list();
        let view = filtered(&list, FilterMode::All, 0);
        let ids: Vec<EntityId> = view.iter().map(|c| c.reference_id).collect();
        assert_eq!(ids, [11, 22, 33]);
    }

    #[test]
    fn filtered_view_never_exceeds_the_full_list() {
        let list = scan_list();
        for raw in 0..=5 {
            let mode = FilterMode::from_raw(raw).unwrap();
            for value in [0, 1, 3] {
                assert!(filtered(&list, mode, value).len() <= list.len());
            }
        }
    }

    #[test]
    fn shuttle_type_filter_matches_parameter() {
        let list = scan_list();
        let view = filtered(&list, FilterMode::ShuttleType, 1);
        let ids: Vec<EntityId> = view.iter().map(|c| c.reference_id).collect();
        assert_eq!(ids, [11, 33]);
    }

    #[test]
    fn resolved_partitions_by_countdown_sign() {
        let list = scan_list();
        let resolved = filtered(&list, FilterMode::Resolved, 0);
        let unresolved = filtered(&list, FilterMode::Unresolved, 0);
        assert_eq!(resolved.len(), 2, "countdown <= 0 counts as resolved");
        assert_eq!(unresolved.len(), 1);
        assert_eq!(resolved.len() + unresolved.len(), list.len());
    }

    #[test]
    fn contacted_partitions_by_flag() {
        let list = scan_list();
        assert_eq!(filtered(&list, FilterMode::Contacted, 0).len(), 2);
        assert_eq!(filtered(&list, FilterMode::NotContacted, 0).len(), 1);
    }

    #[test]
    fn cursor_clamps_into_view() {
        assert_eq!(clamped_index(9999, 3), 2);
        assert_eq!(clamped_index(-5, 3), 0);
        assert_eq!(clamped_index(1, 3), 1);
    }

    #[test]
    fn empty_view_yields_no_selection() {
        assert!(selected(&[], FilterMode::All, 0, 0).is_none());
        let list = scan_list();
        // ShuttleType 9 matches nothing.
        assert!(selected(&list, FilterMode::ShuttleType, 9, 0).is_none());
    }

    #[test]
    fn unknown_filter_mode_is_rejected() {
        assert!(FilterMode::from_raw(6).is_none());
        assert!(FilterMode::from_raw(-1).is_none());
    }

    #[test]
    fn progress_is_complete_without_a_countdown() {
        let mut c = contact(1, 0, false, 10.0);
        c.start_time_till_resolve = 0.0;
        assert_eq!(resolution_progress(&c), 1.0);

        c.start_time_till_resolve = 30.0;
        c.time_till_resolve = 7.5;
        assert!((resolution_progress(&c) - 0.75).abs() < 1e-9);
    }
}
