//! Existing calendar entries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An already-scheduled event: when it happens and who is there.
///
/// The attendee set may be empty. `title` is carried for callers and never
/// consulted when computing availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub title: String,
    pub when: TimeRange,
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
