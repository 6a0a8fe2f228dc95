//! Course-schedule conflict engine for the term planner.
//!
//! Three cooperating, stateless components operating over plain in-memory
//! section/meeting records supplied by the section-search data layer:
//!
//! - [`overlap`] — decides whether two weekly meeting patterns (and, lifted,
//!   two sections or two batches of sections) collide in time.
//! - [`pairing`] — enumerates the valid selectable units for one course:
//!   standalone sections or linked lecture+lab pairs, with an
//!   "open sections only" policy.
//! - [`conflicts`] — partitions an assembled schedule into connected groups
//!   of mutually conflicting sections for conflict resolution UIs.
//!
//! Every call is pure and deterministic: no I/O, no shared state, no panics
//! on well-typed input. Malformed data degrades to conservative results
//! (missing meeting times never conflict; dangling pair references are
//! treated as unpaired). Upstream layers that want loud validation instead
//! can use [`overlap::parse_time_strict`].

pub mod conflicts;
pub mod error;
pub mod overlap;
pub mod pairing;
pub mod types;

pub use conflicts::{compute_schedule_conflicts, enrich_with_conflicts};
pub use error::TimeParseError;
pub use overlap::{has_conflict, meetings_conflict, parse_time_strict, sections_conflict};
pub use pairing::valid_selections_for_course;
pub use types::{
    ConflictGroup, EnrollmentStatus, Meeting, Schedule, ScheduleConflicts, Section, SelectionUnit,
    Weekday,
};
