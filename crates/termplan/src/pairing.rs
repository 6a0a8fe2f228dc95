//! Section pairing resolution.
//!
//! Given all offered sections of one course, enumerates the valid
//! "selectable units": standalone sections, or linked lecture+lab pairs that
//! must be chosen together. The caller is responsible for pre-grouping the
//! input by `course_id`.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{Section, SelectionUnit};

/// Returns true iff the two sections reference each other (in either
/// direction) as required companions.
fn linked(a: &Section, b: &Section) -> bool {
    a.class_pair == Some(b.class_number) || b.class_pair == Some(a.class_number)
}

/// Enumerates the valid selection units for one course's sections.
///
/// Every unordered pair (i, j) whose sections reference each other via
/// `class_pair` becomes a [`SelectionUnit::Pair`]. With `open_only` set, a
/// pair where only one side is open degrades to that side alone, so a closed
/// lab does not hide an open lecture; a fully closed pair is dropped.
///
/// Unpaired sections (`class_pair == None`) that no other section references
/// emit as [`SelectionUnit::Single`], filtered by openness when `open_only`
/// is set. A section that is referenced by someone else's `class_pair` but
/// carries no pairing itself is assumed to belong to a pair already handled
/// above and is withheld from standalone emission.
///
/// Dangling or asymmetric pair references degrade to "unpaired" rather than
/// erroring; this function never panics on well-typed input.
pub fn valid_selections_for_course(sections: &[Section], open_only: bool) -> Vec<SelectionUnit> {
    let mut units = Vec::new();
    let mut paired: HashSet<u32> = HashSet::new();

    // Each unordered pair is considered exactly once, regardless of which
    // side carries the reference.
    for i in 0..sections.len() {
        for j in (i + 1)..sections.len() {
            let (a, b) = (&sections[i], &sections[j]);
            if !linked(a, b) {
                continue;
            }
            paired.insert(a.class_number);
            paired.insert(b.class_number);

            if !open_only {
                units.push(SelectionUnit::Pair(a.clone(), b.clone()));
                continue;
            }

            match (a.is_open(), b.is_open()) {
                (true, true) => units.push(SelectionUnit::Pair(a.clone(), b.clone())),
                (true, false) => units.push(SelectionUnit::Single(a.clone())),
                (false, true) => units.push(SelectionUnit::Single(b.clone())),
                (false, false) => {}
            }
        }
    }

    // Class numbers referenced as someone's companion; their owners were
    // handled by the pairing loop even when the back-reference is missing.
    let referenced: HashSet<u32> = sections.iter().filter_map(|s| s.class_pair).collect();

    for section in sections {
        if paired.contains(&section.class_number) {
            continue;
        }
        // Withheld: an unpaired section that someone else references belongs
        // to a pair the loop already handled. A section whose own class_pair
        // dangles (no partner in the input) degrades to unpaired.
        if section.class_pair.is_none() && referenced.contains(&section.class_number) {
            continue;
        }
        if open_only && !section.is_open() {
            continue;
        }
        units.push(SelectionUnit::Single(section.clone()));
    }

    debug!(
        course = sections.first().map(|s| s.course_id.as_str()).unwrap_or(""),
        sections = sections.len(),
        units = units.len(),
        open_only,
        "resolved selection units"
    );

    units
}
