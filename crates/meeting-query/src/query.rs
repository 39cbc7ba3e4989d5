//! Find free meeting windows for a request.
//!
//! Events whose attendees intersect the request become a deduplicated, sorted list
//! of busy ranges. A single left-to-right sweep emits the gaps between them, and
//! each gap is kept only if it is at least as long as the requested duration.
//!
//! When optional attendees leave no feasible window, the whole pipeline runs again
//! with mandatory attendees only.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Which attendee set produced a [`MeetingPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Mandatory and optional attendees were both respected.
    Everyone,
    /// Optional attendees made the meeting impossible and were dropped.
    MandatoryOnly,
}

/// Free windows together with the attendee set they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPlan {
    /// Sorted by start, non-overlapping.
    pub windows: Vec<TimeRange>,
    pub attendance: Attendance,
}

/// Busy ranges of every event attended by at least one of `attendees`.
///
/// Identical ranges are collapsed. The result is sorted ascending by start.
pub fn busy_ranges(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    let relevant: BTreeSet<TimeRange> = events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .map(|event| event.when)
        .collect();

    relevant.into_iter().collect()
}

/// Gaps between `busy` ranges across the whole day that last at least
/// `min_duration` minutes.
///
/// `busy` must be sorted ascending by start. The sweep tracks a `current` busy
/// range and only moves past it when the next range is not nested inside it, so
/// a short event inside a long one never reopens a gap.
pub fn free_windows(busy: &[TimeRange], min_duration: u32) -> Vec<TimeRange> {
    debug_assert!(
        busy.windows(2).all(|pair| pair[0].start() <= pair[1].start()),
        "busy ranges must be sorted by start"
    );

    let mut windows = Vec::new();

    let Some((first, rest)) = busy.split_first() else {
        keep_if_long_enough(TimeRange::WHOLE_DAY, min_duration, &mut windows);
        return windows;
    };

    if first.start() != TimeRange::START_OF_DAY {
        let leading = TimeRange::from_start_end(TimeRange::START_OF_DAY, first.start(), false);
        keep_if_long_enough(leading, min_duration, &mut windows);
    }

    let mut current = first;
    for next in rest {
        if !current.overlaps(next) {
            let gap = TimeRange::from_start_end(current.end(), next.start(), false);
            keep_if_long_enough(gap, min_duration, &mut windows);
        }
        if !current.contains(next) {
            current = next;
        }
    }

    // The closing window is the one range built inclusively, up to 23:59.
    if current.end() != TimeRange::END_OF_DAY {
        let trailing =
            TimeRange::from_start_end(current.end(), TimeRange::LAST_MINUTE_OF_DAY, true);
        keep_if_long_enough(trailing, min_duration, &mut windows);
    }

    windows
}

fn keep_if_long_enough(candidate: TimeRange, min_duration: u32, windows: &mut Vec<TimeRange>) {
    if candidate.duration() >= min_duration {
        trace!(%candidate, "window accepted");
        windows.push(candidate);
    } else {
        trace!(%candidate, min_duration, "window too short");
    }
}

fn windows_for(
    events: &[Event],
    request: &MeetingRequest,
    include_optional: bool,
) -> Vec<TimeRange> {
    let attendees = request.attendees_under_test(include_optional);
    let busy = busy_ranges(events, &attendees);
    debug!(
        include_optional,
        attendees = attendees.len(),
        busy = busy.len(),
        "computing free windows"
    );
    free_windows(&busy, request.duration)
}

/// Compute free windows and report whether optional attendees were honored.
///
/// The first pass blocks on events of mandatory and optional attendees alike. If
/// it finds nothing and the request names both kinds of attendee, a second pass
/// ignores the optional ones.
pub fn plan_meeting(events: &[Event], request: &MeetingRequest) -> MeetingPlan {
    let windows = windows_for(events, request, true);

    if windows.is_empty() && !request.mandatory.is_empty() && !request.optional.is_empty() {
        debug!("no window fits optional attendees; retrying with mandatory attendees only");
        return MeetingPlan {
            windows: windows_for(events, request, false),
            attendance: Attendance::MandatoryOnly,
        };
    }

    MeetingPlan {
        windows,
        attendance: Attendance::Everyone,
    }
}

/// Every window within the day that can hold the requested meeting.
///
/// Returns windows sorted ascending by start; empty if none exists even after
/// dropping optional attendees.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    plan_meeting(events, request).windows
}

/// The earliest window that can hold the requested meeting.
pub fn find_first_meeting_time(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_meeting_times(events, request).into_iter().next()
}
