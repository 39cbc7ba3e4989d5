//! Tests for `TimeRange` construction, predicates, ordering, and formatting.

use meeting_query::{MeetingError, TimeRange, WindowView};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn derived_end_is_start_plus_duration() {
    let r = TimeRange::from_start_duration(510, 45);
    assert_eq!(r.start(), 510);
    assert_eq!(r.duration(), 45);
    assert_eq!(r.end(), 555);
}

#[test]
fn whole_day_spans_the_minute_axis() {
    assert_eq!(TimeRange::WHOLE_DAY.start(), TimeRange::START_OF_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.end(), TimeRange::END_OF_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
}

#[test]
fn inclusive_end_of_day_closes_at_1440() {
    let closing = TimeRange::from_start_end(600, TimeRange::LAST_MINUTE_OF_DAY, true);
    assert_eq!(closing.end(), TimeRange::END_OF_DAY);
    assert_eq!(closing.duration(), 840);
}

#[test]
fn exclusive_factory_matches_start_duration() {
    assert_eq!(range(60, 90), TimeRange::from_start_duration(60, 30));
}

#[test]
fn minutes_of_converts_clock_time() {
    assert_eq!(TimeRange::minutes_of(0, 0), 0);
    assert_eq!(TimeRange::minutes_of(8, 30), 510);
    assert_eq!(TimeRange::minutes_of(23, 59), TimeRange::LAST_MINUTE_OF_DAY);
}

#[test]
fn checked_constructor_rejects_empty_and_overlong_ranges() {
    assert!(matches!(
        TimeRange::new(60, 0),
        Err(MeetingError::InvalidRange {
            start: 60,
            duration: 0
        })
    ));
    assert!(TimeRange::new(1400, 41).is_err());
    assert!(TimeRange::new(u32::MAX, 2).is_err());
    assert_eq!(TimeRange::new(1400, 40).unwrap().end(), 1440);
}

// ── Predicates ──────────────────────────────────────────────────────────────

#[test]
fn adjacent_ranges_do_not_overlap() {
    assert!(!range(60, 90).overlaps(&range(90, 120)));
    assert!(!range(90, 120).overlaps(&range(60, 90)));
}

#[test]
fn partially_covering_ranges_overlap_both_ways() {
    assert!(range(60, 100).overlaps(&range(90, 120)));
    assert!(range(90, 120).overlaps(&range(60, 100)));
}

#[test]
fn nested_range_overlaps_and_is_contained() {
    let outer = range(60, 120);
    let inner = range(90, 100);
    assert!(outer.overlaps(&inner));
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
}

#[test]
fn containment_is_inclusive_at_both_boundaries() {
    let r = range(60, 120);
    assert!(r.contains(&r));
    assert!(r.contains(&range(60, 90)));
    assert!(r.contains(&range(90, 120)));
    assert!(!r.contains(&range(90, 121)));
    assert!(!r.contains(&range(59, 90)));
}

#[test]
fn contains_minute_is_half_open() {
    let r = range(60, 90);
    assert!(r.contains_minute(60));
    assert!(r.contains_minute(89));
    assert!(!r.contains_minute(90));
    assert!(!r.contains_minute(59));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn ord_sorts_by_start_then_duration() {
    let mut ranges = vec![range(90, 100), range(0, 30), range(90, 95), range(30, 60)];
    ranges.sort();
    assert_eq!(
        ranges,
        vec![range(0, 30), range(30, 60), range(90, 95), range(90, 100)]
    );
}

#[test]
fn comparators_ignore_the_other_boundary() {
    use std::cmp::Ordering;

    assert_eq!(
        TimeRange::order_by_start(&range(60, 70), &range(60, 200)),
        Ordering::Equal
    );
    assert_eq!(
        TimeRange::order_by_end(&range(0, 100), &range(90, 100)),
        Ordering::Equal
    );
    assert_eq!(
        TimeRange::order_by_end(&range(0, 90), &range(80, 100)),
        Ordering::Less
    );
}

// ── Formatting and serde ────────────────────────────────────────────────────

#[test]
fn display_renders_clock_times() {
    assert_eq!(range(510, 570).to_string(), "08:30-09:30");
    assert_eq!(TimeRange::WHOLE_DAY.to_string(), "00:00-24:00");
}

#[test]
fn serializes_as_start_and_duration() {
    let json = serde_json::to_string(&range(60, 90)).unwrap();
    assert_eq!(json, r#"{"start":60,"duration":30}"#);
}

#[test]
fn deserialize_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":60,"duration":30}"#).unwrap();
    assert_eq!(ok, range(60, 90));

    assert!(serde_json::from_str::<TimeRange>(r#"{"start":1430,"duration":30}"#).is_err());
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":60,"duration":0}"#).is_err());
}

#[test]
fn window_view_spells_out_end() {
    let view = WindowView::from(&range(90, 1440));
    assert_eq!(
        view,
        WindowView {
            start: 90,
            end: 1440,
            duration: 1350
        }
    );
}
