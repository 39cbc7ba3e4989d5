//! # meeting-query
//!
//! Finds every window within a single day long enough to hold a proposed meeting.
//!
//! The day is a bounded minute axis `[0, 1440)`. Existing [`Event`]s mark their
//! attendees busy; a [`MeetingRequest`] names who must attend, who may attend, and
//! how long the meeting runs. [`find_meeting_times`] returns the free windows,
//! falling back to mandatory attendees only when optional attendees would leave
//! no feasible slot.
//!
//! ## Modules
//!
//! - [`time_range`] — Minute intervals within a day, with overlap and containment
//! - [`event`] — Existing calendar entries and their attendees
//! - [`request`] — Meeting requests and the JSON query document
//! - [`query`] — Relevance filter, gap sweep, and optional-attendee fallback
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod query;
pub mod request;
pub mod time_range;

pub use error::{MeetingError, Result};
pub use event::Event;
pub use query::{
    busy_ranges, find_first_meeting_time, find_meeting_times, free_windows, plan_meeting,
    Attendance, MeetingPlan,
};
pub use request::{MeetingRequest, QueryDocument};
pub use time_range::{TimeRange, WindowView};
