//! Conflict group partitioning.
//!
//! Expands a full schedule's sections into atomic single-day events, links
//! events that collide, and extracts connected components as user-facing
//! conflict groups. A section meeting Mo/We/Fr becomes three events; groups
//! that collapse to the same set of sections are reported once.

use std::collections::{HashMap, HashSet};

use petgraph::unionfind::UnionFind;
use tracing::debug;

use crate::overlap::{intervals_overlap, parse_time_lenient};
use crate::types::{signature_of, ConflictGroup, Schedule, ScheduleConflicts, Section, Weekday};

/// One atomic (meeting, day) occurrence, back-referencing its owning section
/// by index into the input slice.
#[derive(Debug, Clone, Copy)]
struct MeetingEvent {
    section_idx: usize,
    day: Weekday,
    start_min: u32,
    end_min: u32,
}

/// Flat-maps every section's meetings into one event per (meeting, day).
/// Meetings missing a start or end time are dropped entirely, so they can
/// never contribute to a conflict.
fn expand_events(sections: &[Section]) -> Vec<MeetingEvent> {
    let mut events = Vec::new();
    for (section_idx, section) in sections.iter().enumerate() {
        for meeting in &section.meetings {
            if !meeting.has_times() {
                continue;
            }
            let start_min = meeting
                .start_time
                .as_deref()
                .map(parse_time_lenient)
                .unwrap_or(0);
            let end_min = meeting
                .end_time
                .as_deref()
                .map(parse_time_lenient)
                .unwrap_or(0);
            for &day in &meeting.days {
                events.push(MeetingEvent {
                    section_idx,
                    day,
                    start_min,
                    end_min,
                });
            }
        }
    }
    events
}

/// Partitions a schedule's sections into groups of mutually (pairwise or
/// transitively) conflicting sections.
///
/// Three phases: expand sections into single-day events; union events that
/// share a day and overlap strictly; collapse each connected component to its
/// unique set of sections. Components referencing fewer than two distinct
/// sections are discarded (a section colliding only with its own meetings is
/// not a conflict), and components with identical member sets are reported
/// once, keyed by the sorted class-number signature.
///
/// Group order follows input traversal order and is stable across calls on
/// identical input.
pub fn compute_schedule_conflicts(sections: &[Section]) -> ScheduleConflicts {
    let events = expand_events(sections);

    let mut uf: UnionFind<usize> = UnionFind::new(events.len());
    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            if events[i].day == events[j].day
                && intervals_overlap(
                    events[i].start_min,
                    events[i].end_min,
                    events[j].start_min,
                    events[j].end_min,
                )
            {
                uf.union(i, j);
            }
        }
    }

    // Components in first-seen event order, so output ordering tracks input
    // traversal order.
    let mut roots_in_order: Vec<usize> = Vec::new();
    let mut members: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..events.len() {
        let root = uf.find_mut(i);
        members
            .entry(root)
            .or_insert_with(|| {
                roots_in_order.push(root);
                Vec::new()
            })
            .push(i);
    }

    let mut conflict_groups: Vec<ConflictGroup> = Vec::new();
    let mut seen_signatures: HashSet<String> = HashSet::new();

    for root in roots_in_order {
        // Collapse the component's events to unique sections, preserving
        // first-appearance order.
        let mut unique_class_numbers: Vec<u32> = Vec::new();
        for &event_idx in &members[&root] {
            let class_number = sections[events[event_idx].section_idx].class_number;
            if !unique_class_numbers.contains(&class_number) {
                unique_class_numbers.push(class_number);
            }
        }

        if unique_class_numbers.len() < 2 {
            continue;
        }
        if !seen_signatures.insert(signature_of(unique_class_numbers.clone())) {
            continue;
        }

        let group_sections: Vec<Section> = unique_class_numbers
            .iter()
            .filter_map(|cn| {
                sections
                    .iter()
                    .find(|s| s.class_number == *cn)
                    .cloned()
            })
            .collect();
        conflict_groups.push(ConflictGroup {
            sections: group_sections,
        });
    }

    debug!(
        sections = sections.len(),
        events = events.len(),
        groups = conflict_groups.len(),
        "computed schedule conflicts"
    );

    let with_conflicts = !conflict_groups.is_empty();
    ScheduleConflicts {
        conflict_groups,
        with_conflicts,
    }
}

/// Fills in a schedule's conflict data, short-circuiting if `conflict_groups`
/// is already populated.
///
/// The memoization is by presence only; callers that cannot prove the
/// underlying section data is unchanged should clear the cached groups and
/// recompute, which is cheap at realistic schedule sizes.
pub fn enrich_with_conflicts(mut schedule: Schedule) -> Schedule {
    if !schedule.conflict_groups.is_empty() {
        return schedule;
    }
    let conflicts = compute_schedule_conflicts(&schedule.sections);
    schedule.conflict_groups = conflicts.conflict_groups;
    schedule.with_conflicts = conflicts.with_conflicts;
    schedule
}
