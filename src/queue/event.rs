//! XP notification wire shape and the merged event built from it

use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Inbound XP-gain notification.
///
/// Advisory and UI-only: the authoritative XP total lives in the external
/// profile store. Missing optional fields default rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpNotification {
    /// Signed XP delta
    pub gained: i64,
    /// Why the XP was granted (action tag)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Kind of entity the grant references (e.g. "task")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
    /// Id of the referenced entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    /// XP total before the grant, when the sender knows it
    #[serde(default)]
    pub prev_xp: i64,
    /// XP total after the grant, when the sender knows it
    #[serde(default)]
    pub new_xp: i64,
}

/// One or more notifications coalesced into a single displayable event.
///
/// `gained` is authoritative for the displayed delta: it is the exact sum
/// of the merged notifications. `prev_xp`/`new_xp` are best-effort
/// snapshots (first arrival's before-total, last arrival's after-total)
/// and may disagree with `gained` when unrelated grants race on the same
/// account; level-up detection should prefer an authoritative old/new
/// total pair when one is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedXpEvent {
    /// Sum of the merged deltas
    pub gained: i64,
    /// Deduplicated source tags across all merged notifications
    pub sources: BTreeSet<String>,
    /// Arrival time of the earliest merged notification
    pub timestamp: Instant,
    pub ref_type: Option<String>,
    pub ref_id: Option<String>,
    /// Before-total from the first merged notification
    pub prev_xp: i64,
    /// After-total from the last merged notification
    pub new_xp: i64,
    /// How many raw notifications were merged into this event
    pub merged_count: u32,
}

impl QueuedXpEvent {
    /// Start a new event from a single notification
    pub fn from_notification(n: XpNotification, now: Instant) -> Self {
        let mut sources = BTreeSet::new();
        if let Some(source) = n.source {
            sources.insert(source);
        }
        Self {
            gained: n.gained,
            sources,
            timestamp: now,
            ref_type: n.ref_type,
            ref_id: n.ref_id,
            prev_xp: n.prev_xp,
            new_xp: n.new_xp,
            merged_count: 1,
        }
    }

    /// Merge a later notification into this event.
    ///
    /// Sums the delta, unions the sources, keeps the earliest timestamp and
    /// first `prev_xp`, takes the latest `new_xp`. Commutative over
    /// `gained` and `sources`.
    pub fn absorb(&mut self, n: XpNotification) {
        self.gained += n.gained;
        if let Some(source) = n.source {
            self.sources.insert(source);
        }
        if self.ref_type.is_none() {
            self.ref_type = n.ref_type;
        }
        if self.ref_id.is_none() {
            self.ref_id = n.ref_id;
        }
        self.new_xp = n.new_xp;
        self.merged_count += 1;
    }
}
