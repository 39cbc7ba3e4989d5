//! Meeting requests and the JSON query document shared by the CLI and WASM bindings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};
use crate::event::Event;

/// What to schedule: who must come, who may come, and for how long.
///
/// The two attendee sets need not be disjoint; someone listed in both is treated
/// as mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(rename = "attendees", default)]
    pub mandatory: BTreeSet<String>,
    #[serde(rename = "optional_attendees", default)]
    pub optional: BTreeSet<String>,
    /// Required length in minutes.
    pub duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(mandatory: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
            duration,
        }
    }

    /// Builder-style variant of [`MeetingRequest::add_optional_attendee`].
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional.insert(attendee.into());
    }

    /// The attendees whose events block a window on a given pass.
    pub fn attendees_under_test(&self, include_optional: bool) -> BTreeSet<String> {
        let mut people = self.mandatory.clone();
        if include_optional {
            people.extend(self.optional.iter().cloned());
        }
        people
    }

    /// Reject requests that can never be meaningful.
    ///
    /// Durations longer than a day are accepted: they simply yield no windows.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidDuration`] for a zero-minute meeting.
    pub fn validate(&self) -> Result<()> {
        if self.duration == 0 {
            return Err(MeetingError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}

/// A complete query: the day's events plus one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl QueryDocument {
    /// Parse and validate a query document.
    ///
    /// # Errors
    /// Returns [`MeetingError::Json`] for malformed JSON or out-of-day ranges, and
    /// [`MeetingError::InvalidDuration`] for a zero-minute request.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: QueryDocument = serde_json::from_str(json)?;
        doc.request.validate()?;
        Ok(doc)
    }
}

