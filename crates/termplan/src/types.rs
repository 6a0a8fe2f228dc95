/// Types for course section and schedule data
use serde::{Deserialize, Serialize};

/// Weekday token as used by the section-search data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Mo")]
    Monday,
    #[serde(rename = "Tu")]
    Tuesday,
    #[serde(rename = "We")]
    Wednesday,
    #[serde(rename = "Th")]
    Thursday,
    #[serde(rename = "Fr")]
    Friday,
    #[serde(rename = "Sa")]
    Saturday,
    #[serde(rename = "Su")]
    Sunday,
}

/// One weekly recurrence pattern belonging to a section.
///
/// A meeting with either time missing is an asynchronous/TBD offering and
/// never conflicts with anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Days this meeting recurs on; duplicates carry no meaning
    #[serde(default)]
    pub days: Vec<Weekday>,

    /// Wall-clock start, "HH:MM" 24-hour
    pub start_time: Option<String>,

    /// Wall-clock end, "HH:MM" 24-hour
    pub end_time: Option<String>,
}

impl Meeting {
    /// Returns true if this meeting has both a start and an end time.
    pub fn has_times(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

/// Enrollment status of a section as reported by the registrar feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "C")]
    Closed,
    #[serde(rename = "W")]
    Waitlist,
}

impl EnrollmentStatus {
    /// Only "O" counts as open; waitlisted sections are not selectable
    /// under an open-only policy.
    pub fn is_open(&self) -> bool {
        matches!(self, EnrollmentStatus::Open)
    }
}

/// One offered instance of a course component (lecture, lab, seminar, ...).
///
/// Sections are created by the external search/selection subsystem and are
/// read-only here; `class_number` is the canonical identity within a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub class_number: u32,

    pub course_id: String,

    pub course_name: String,

    /// Component type, e.g. "LEC", "LAB", "SEM"
    pub component: String,

    pub enrollment_status: EnrollmentStatus,

    /// `class_number` of a required companion component, if any.
    /// Symmetric by convention, but asymmetric/dangling data is tolerated.
    #[serde(default)]
    pub class_pair: Option<u32>,

    #[serde(default)]
    pub meetings: Vec<Meeting>,

    #[serde(default)]
    pub professors: Vec<String>,

    /// Display color assigned by the calendar UI
    #[serde(default)]
    pub color: Option<String>,
}

impl Section {
    /// Returns true if this section is open for enrollment.
    pub fn is_open(&self) -> bool {
        self.enrollment_status.is_open()
    }
}

/// One or two sections that must be chosen together: a standalone section,
/// or a linked lecture+lab pair. Produced per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SelectionUnit {
    Single(Section),
    Pair(Section, Section),
}

impl SelectionUnit {
    /// The member sections in emission order.
    pub fn sections(&self) -> Vec<&Section> {
        match self {
            SelectionUnit::Single(s) => vec![s],
            SelectionUnit::Pair(a, b) => vec![a, b],
        }
    }

    /// Class numbers of the member sections, in emission order.
    pub fn class_numbers(&self) -> Vec<u32> {
        self.sections().iter().map(|s| s.class_number).collect()
    }
}

/// Two or more sections that pairwise or transitively share a time/day
/// overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictGroup {
    pub sections: Vec<Section>,
}

impl ConflictGroup {
    /// Class numbers of the member sections.
    pub fn class_numbers(&self) -> Vec<u32> {
        self.sections.iter().map(|s| s.class_number).collect()
    }

    /// Canonical signature: sorted, deduplicated class numbers joined with
    /// "-". Two groups with identical member sets share a signature.
    pub fn signature(&self) -> String {
        signature_of(self.class_numbers())
    }
}

/// Builds the canonical group signature from a set of class numbers.
pub(crate) fn signature_of(mut class_numbers: Vec<u32>) -> String {
    class_numbers.sort_unstable();
    class_numbers.dedup();
    class_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Result of partitioning a full schedule into conflict groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflicts {
    pub conflict_groups: Vec<ConflictGroup>,
    pub with_conflicts: bool,
}

/// A student's assembled schedule for one term, with optionally cached
/// conflict results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub sections: Vec<Section>,

    #[serde(default, skip_deserializing)]
    pub conflict_groups: Vec<ConflictGroup>,

    #[serde(default)]
    pub with_conflicts: bool,
}

impl Schedule {
    /// Creates a schedule with no cached conflict data.
    pub fn new(sections: Vec<Section>) -> Self {
        Schedule {
            sections,
            conflict_groups: Vec::new(),
            with_conflicts: false,
        }
    }
}
