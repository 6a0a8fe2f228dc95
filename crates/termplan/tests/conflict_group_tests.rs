use termplan::{
    compute_schedule_conflicts, enrich_with_conflicts, sections_conflict, ConflictGroup,
    EnrollmentStatus, Meeting, Schedule, Section, Weekday,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn meeting(days: &[Weekday], start: &str, end: &str) -> Meeting {
    Meeting {
        days: days.to_vec(),
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
    }
}

fn section(class_number: u32, course_id: &str, meetings: Vec<Meeting>) -> Section {
    Section {
        class_number,
        course_id: course_id.to_string(),
        course_name: course_id.to_string(),
        component: "LEC".to_string(),
        enrollment_status: EnrollmentStatus::Open,
        class_pair: None,
        meetings,
        professors: vec!["Staff".to_string()],
        color: None,
    }
}

fn group_members(groups: &[ConflictGroup]) -> Vec<Vec<u32>> {
    groups.iter().map(|g| g.class_numbers()).collect()
}

#[test]
fn overlapping_sections_form_one_group() {
    init_tracing();
    let a = section(
        100,
        "CSC101",
        vec![meeting(
            &[Weekday::Monday, Weekday::Wednesday],
            "10:00",
            "10:50",
        )],
    );
    let b = section(
        101,
        "CSC101",
        vec![meeting(&[Weekday::Monday], "10:30", "11:20")],
    );

    assert!(sections_conflict(&a, &b));

    let result = compute_schedule_conflicts(&[a, b]);
    assert!(result.with_conflicts);
    assert_eq!(group_members(&result.conflict_groups), vec![vec![100, 101]]);
}

#[test]
fn multi_day_overlap_reports_the_group_once() {
    // Three raw same-day collisions (Mo, We, Fr) collapse to a single group
    // because the member set is identical each time.
    let days = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];
    let a = section(100, "CSC101", vec![meeting(&days, "10:00", "11:00")]);
    let b = section(101, "MATH200", vec![meeting(&days, "10:30", "11:30")]);

    let result = compute_schedule_conflicts(&[a, b]);
    assert_eq!(group_members(&result.conflict_groups), vec![vec![100, 101]]);
    assert_eq!(result.conflict_groups[0].signature(), "100-101");
}

#[test]
fn self_overlap_is_not_a_conflict() {
    // One section whose own meetings collide produces no group: a group
    // needs at least two distinct sections.
    let a = section(
        100,
        "CSC101",
        vec![
            meeting(&[Weekday::Monday], "10:00", "11:00"),
            meeting(&[Weekday::Monday], "10:30", "11:30"),
        ],
    );

    let result = compute_schedule_conflicts(&[a]);
    assert!(!result.with_conflicts);
    assert!(result.conflict_groups.is_empty());
}

#[test]
fn transitive_overlap_merges_into_one_group() {
    // A overlaps B and B overlaps C, but A and C are clear of each other;
    // all three still land in one group.
    let a = section(
        100,
        "CSC101",
        vec![meeting(&[Weekday::Monday], "09:00", "10:00")],
    );
    let b = section(
        101,
        "MATH200",
        vec![meeting(&[Weekday::Monday], "09:30", "10:30")],
    );
    let c = section(
        102,
        "PHYS150",
        vec![meeting(&[Weekday::Monday], "10:15", "11:00")],
    );

    let result = compute_schedule_conflicts(&[a, b, c]);
    assert_eq!(
        group_members(&result.conflict_groups),
        vec![vec![100, 101, 102]]
    );
}

#[test]
fn disjoint_schedule_has_no_conflicts() {
    let a = section(
        100,
        "CSC101",
        vec![meeting(&[Weekday::Monday], "09:00", "10:00")],
    );
    let b = section(
        101,
        "MATH200",
        vec![meeting(&[Weekday::Monday], "10:00", "11:00")],
    );
    let c = section(
        102,
        "PHYS150",
        vec![meeting(&[Weekday::Tuesday], "09:00", "10:00")],
    );

    let result = compute_schedule_conflicts(&[a, b, c]);
    assert!(!result.with_conflicts);
    assert!(result.conflict_groups.is_empty());
}

#[test]
fn timeless_meetings_never_become_events() {
    let tbd = Section {
        meetings: vec![Meeting {
            days: vec![Weekday::Monday],
            start_time: None,
            end_time: Some("23:59".to_string()),
        }],
        ..section(100, "CSC101", vec![])
    };
    let b = section(
        101,
        "MATH200",
        vec![meeting(&[Weekday::Monday], "00:00", "23:59")],
    );

    let result = compute_schedule_conflicts(&[tbd, b]);
    assert!(!result.with_conflicts);
}

#[test]
fn separate_collisions_stay_separate_groups() {
    let a = section(
        100,
        "CSC101",
        vec![meeting(&[Weekday::Monday], "09:00", "10:00")],
    );
    let b = section(
        101,
        "MATH200",
        vec![meeting(&[Weekday::Monday], "09:30", "10:30")],
    );
    let c = section(
        102,
        "PHYS150",
        vec![meeting(&[Weekday::Thursday], "13:00", "14:00")],
    );
    let d = section(
        103,
        "CHEM110",
        vec![meeting(&[Weekday::Thursday], "13:30", "14:30")],
    );

    let result = compute_schedule_conflicts(&[a, b, c, d]);
    assert_eq!(
        group_members(&result.conflict_groups),
        vec![vec![100, 101], vec![102, 103]]
    );
}

#[test]
fn output_ordering_is_stable_across_calls() {
    let sections = vec![
        section(
            103,
            "CHEM110",
            vec![meeting(&[Weekday::Thursday], "13:00", "14:00")],
        ),
        section(
            100,
            "CSC101",
            vec![meeting(&[Weekday::Monday], "09:00", "10:00")],
        ),
        section(
            102,
            "PHYS150",
            vec![meeting(&[Weekday::Thursday], "13:30", "14:30")],
        ),
        section(
            101,
            "MATH200",
            vec![meeting(&[Weekday::Monday], "09:30", "10:30")],
        ),
    ];

    let first = compute_schedule_conflicts(&sections);
    let second = compute_schedule_conflicts(&sections);
    assert_eq!(first, second);

    // Group order tracks input traversal order: the Thursday collision is
    // discovered first because section 103 comes first.
    assert_eq!(
        group_members(&first.conflict_groups),
        vec![vec![103, 102], vec![100, 101]]
    );
}

#[test]
fn enrich_fills_and_then_short_circuits() {
    init_tracing();
    let schedule = Schedule::new(vec![
        section(
            100,
            "CSC101",
            vec![meeting(&[Weekday::Monday], "09:00", "10:00")],
        ),
        section(
            101,
            "MATH200",
            vec![meeting(&[Weekday::Monday], "09:30", "10:30")],
        ),
    ]);

    let enriched = enrich_with_conflicts(schedule);
    assert!(enriched.with_conflicts);
    assert_eq!(group_members(&enriched.conflict_groups), vec![vec![100, 101]]);

    // Memoization is by presence: a second pass returns the value unchanged.
    let again = enrich_with_conflicts(enriched.clone());
    assert_eq!(again, enriched);
}

#[test]
fn section_wire_shape_round_trips() {
    let raw = r#"{
        "classNumber": 1234,
        "courseId": "CSC101",
        "courseName": "Fundamentals of Computer Science",
        "component": "LEC",
        "enrollmentStatus": "O",
        "classPair": 1235,
        "meetings": [
            { "days": ["Mo", "We"], "startTime": "10:00", "endTime": "10:50" }
        ],
        "professors": ["R. Hubbard"]
    }"#;

    let parsed: Section = serde_json::from_str(raw).expect("section should deserialize");
    assert_eq!(parsed.class_number, 1234);
    assert_eq!(parsed.class_pair, Some(1235));
    assert_eq!(
        parsed.meetings[0].days,
        vec![Weekday::Monday, Weekday::Wednesday]
    );
    assert!(parsed.color.is_none());

    let result = compute_schedule_conflicts(&[parsed]);
    let json = serde_json::to_value(&result).expect("result should serialize");
    assert_eq!(json["withConflicts"], serde_json::Value::Bool(false));
    assert!(json["conflictGroups"].as_array().unwrap().is_empty());
}
