//! WASM bindings for meeting-query.
//!
//! Exposes free meeting window computation to JavaScript via `wasm-bindgen`. All
//! complex types are passed as JSON strings. Each export is a thin wrapper over a
//! plain-Rust `*_json` function so the conversions can be tested natively.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-query-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meeting_query_wasm.wasm
//! ```

use meeting_query::{Attendance, Event, MeetingRequest, QueryDocument, WindowView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MeetingPlanDto {
    attendance: Attendance,
    windows: Vec<WindowView>,
}

// ---------------------------------------------------------------------------
// JSON-in, JSON-out core
// ---------------------------------------------------------------------------

/// Free windows for `events_json` (array of events) and `request_json` (one
/// request), as a JSON array of `{start, end, duration}` objects.
///
/// # Errors
/// Returns an error for malformed JSON, out-of-day event ranges, or a
/// zero-minute request.
pub fn find_meeting_times_json(
    events_json: &str,
    request_json: &str,
) -> meeting_query::Result<String> {
    let events: Vec<Event> = serde_json::from_str(events_json)?;
    let request: MeetingRequest = serde_json::from_str(request_json)?;
    request.validate()?;

    let windows: Vec<WindowView> = meeting_query::find_meeting_times(&events, &request)
        .iter()
        .map(WindowView::from)
        .collect();

    Ok(serde_json::to_string(&windows)?)
}

/// Evaluate a full query document (`{events, request}`) and report which
/// attendee set the windows honor.
///
/// # Errors
/// Same conditions as [`find_meeting_times_json`].
pub fn plan_meeting_json(document_json: &str) -> meeting_query::Result<String> {
    let doc = QueryDocument::from_json(document_json)?;
    let plan = meeting_query::plan_meeting(&doc.events, &doc.request);

    let dto = MeetingPlanDto {
        attendance: plan.attendance,
        windows: plan.windows.iter().map(WindowView::from).collect(),
    };

    Ok(serde_json::to_string(&dto)?)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every window in the day that can hold the requested meeting.
///
/// `events_json` must be a JSON array of `{title?, when: {start, duration},
/// attendees}` objects; `request_json` a `{attendees, optional_attendees?,
/// duration}` object. Returns a JSON array of `{start, end, duration}` objects.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    find_meeting_times_json(events_json, request_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Evaluate a `{events, request}` document. Returns a JSON object with
/// `attendance` (`"everyone"` or `"mandatory_only"`) and `windows`.
#[wasm_bindgen(js_name = "planMeeting")]
pub fn plan_meeting(document_json: &str) -> Result<String, JsValue> {
    plan_meeting_json(document_json).map_err(|e| JsValue::from_str(&e.to_string()))
}
