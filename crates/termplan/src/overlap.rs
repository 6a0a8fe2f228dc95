//! Meeting overlap detection.
//!
//! The leaf of the conflict engine: decides whether two weekly meeting
//! patterns collide, lifted to sections (any-meeting-vs-any-meeting) and to
//! batches of sections (the fast-path gate used before committing new
//! sections into an existing schedule).

use chrono::{NaiveTime, Timelike};

use crate::error::TimeParseError;
use crate::types::{Meeting, Section};

/// Converts an "HH:MM" string to minutes since midnight, leniently.
///
/// A malformed or non-numeric component degrades to 0, so a missing or
/// garbage time behaves like midnight. Callers that need loud failures
/// should pre-validate with [`parse_time_strict`].
pub(crate) fn parse_time_lenient(time: &str) -> u32 {
    let mut parts = time.split(':');
    let hours: u32 = parts
        .next()
        .and_then(|h| h.trim().parse().ok())
        .unwrap_or(0);
    let minutes: u32 = parts
        .next()
        .and_then(|m| m.trim().parse().ok())
        .unwrap_or(0);
    hours * 60 + minutes
}

/// Converts an "HH:MM" string to minutes since midnight, strictly.
///
/// # Returns
/// * `Ok(minutes)` - Minutes since midnight, 0..=1439
/// * `Err(TimeParseError)` - If the shape is not two numeric fields, or the
///   fields name a time outside 00:00..=23:59
pub fn parse_time_strict(time: &str) -> Result<u32, TimeParseError> {
    let mut fields = time.split(':');
    let shape_ok = matches!(
        (fields.next(), fields.next(), fields.next()),
        (Some(h), Some(m), None)
            if !h.is_empty()
                && !m.is_empty()
                && h.chars().all(|c| c.is_ascii_digit())
                && m.chars().all(|c| c.is_ascii_digit())
    );
    if !shape_ok {
        return Err(TimeParseError::Malformed {
            input: time.to_string(),
        });
    }

    let parsed = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| {
        TimeParseError::OutOfRange {
            input: time.to_string(),
        }
    })?;
    Ok(parsed.hour() * 60 + parsed.minute())
}

/// Returns true iff the two [start, end) intervals overlap strictly.
/// Back-to-back meetings (end == start) are not conflicts.
pub(crate) fn intervals_overlap(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a < end_b && start_b < end_a
}

/// Decides whether two weekly meeting patterns conflict.
///
/// A meeting missing a start or end time never conflicts (deliberate policy
/// for asynchronous/TBD offerings). Otherwise the meetings conflict iff they
/// share at least one day and their [start, end) intervals overlap strictly.
pub fn meetings_conflict(a: &Meeting, b: &Meeting) -> bool {
    if !a.has_times() || !b.has_times() {
        return false;
    }
    if !a.days.iter().any(|day| b.days.contains(day)) {
        return false;
    }

    let start_a = a.start_time.as_deref().map(parse_time_lenient).unwrap_or(0);
    let end_a = a.end_time.as_deref().map(parse_time_lenient).unwrap_or(0);
    let start_b = b.start_time.as_deref().map(parse_time_lenient).unwrap_or(0);
    let end_b = b.end_time.as_deref().map(parse_time_lenient).unwrap_or(0);

    intervals_overlap(start_a, end_a, start_b, end_b)
}

/// Returns true iff any meeting of `a` conflicts with any meeting of `b`.
pub fn sections_conflict(a: &Section, b: &Section) -> bool {
    a.meetings
        .iter()
        .any(|ma| b.meetings.iter().any(|mb| meetings_conflict(ma, mb)))
}

/// Returns true iff any section in `existing` conflicts with any section in
/// `incoming`.
///
/// This is the cheap boolean gate used before committing a batch of newly
/// chosen sections into an existing schedule; it is strictly less informative
/// than full partitioning (see [`crate::conflicts::compute_schedule_conflicts`]).
pub fn has_conflict(existing: &[Section], incoming: &[Section]) -> bool {
    existing
        .iter()
        .any(|e| incoming.iter().any(|n| sections_conflict(e, n)))
}
