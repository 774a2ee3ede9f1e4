//! Property-based tests for the roster store.
//!
//! Uses proptest to verify invariants across random operation sequences:
//! - The department index partitions the collection exactly
//! - High earners are strictly above the threshold and sorted descending
//! - Removal succeeds once per id
//! - CSV save/load preserves every field of every record
//! - A corrupted CSV line costs only that line

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use chrono::{Days, NaiveDate};
use roster::{Employee, EmployeeId, Format, LoadService, Roster, SaveService};
use std::collections::BTreeMap;
use std::io::Cursor;

#[derive(Debug, Clone)]
enum Op {
    Add { department: u8, salary: u32 },
    Remove(u32),
    Move { id: u32, department: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..4, 0u32..200_000)
            .prop_map(|(department, salary)| Op::Add { department, salary }),
        1 => (1u32..30).prop_map(Op::Remove),
        1 => (1u32..30, 0u8..4).prop_map(|(id, department)| Op::Move { id, department }),
    ]
}

fn department_name(n: u8) -> String {
    format!("Dept{n}")
}

fn apply(ops: &[Op]) -> Roster {
    let mut roster = Roster::new();
    for op in ops {
        match op {
            Op::Add { department, salary } => {
                let employee = Employee::new(
                    roster.ids(),
                    format!("Emp{}", roster.len()),
                    department_name(*department),
                    f64::from(*salary),
                    "",
                );
                roster.add(employee);
            },
            Op::Remove(id) => {
                roster.remove_by_id(EmployeeId::new(*id));
            },
            Op::Move { id, department } => {
                let _ = roster.modify(EmployeeId::new(*id), |e| {
                    e.set_department(department_name(*department));
                });
            },
        }
    }
    roster
}

proptest! {
    /// Property: every employee appears in exactly its own department's listing.
    #[test]
    fn prop_index_partitions_collection(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let roster = apply(&ops);

        let mut expected: BTreeMap<String, Vec<EmployeeId>> = BTreeMap::new();
        for employee in roster.employees() {
            expected.entry(employee.department().to_string()).or_default().push(employee.id());
        }

        let listed: Vec<&str> = roster.departments().collect();
        let expected_names: Vec<&str> = expected.keys().map(String::as_str).collect();
        prop_assert_eq!(listed, expected_names);

        for (department, ids) in &expected {
            let actual: Vec<EmployeeId> =
                roster.by_department(department).iter().map(|e| e.id()).collect();
            prop_assert_eq!(&actual, ids);
        }
    }

    /// Property: high earners are above the threshold, descending, and complete.
    #[test]
    fn prop_high_earners_sorted_and_filtered(
        ops in prop::collection::vec(op_strategy(), 0..60),
        threshold in 0u32..200_000,
    ) {
        let roster = apply(&ops);
        let threshold = f64::from(threshold);
        let earners = roster.high_earners(threshold);

        prop_assert!(earners.iter().all(|e| e.salary() > threshold));
        prop_assert!(earners.windows(2).all(|w| w[0].salary() >= w[1].salary()));
        let expected = roster.employees().iter().filter(|e| e.salary() > threshold).count();
        prop_assert_eq!(earners.len(), expected);
    }

    /// Property: an id can be removed exactly once.
    #[test]
    fn prop_remove_succeeds_once(
        ops in prop::collection::vec(op_strategy(), 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut roster = apply(&ops);
        prop_assume!(!roster.is_empty());

        let id = roster.employees()[pick.index(roster.len())].id();
        let before = roster.len();

        prop_assert!(roster.remove_by_id(id));
        prop_assert!(!roster.remove_by_id(id));
        prop_assert_eq!(roster.len(), before - 1);
        prop_assert!(roster.find_by_id(id).is_err());
    }
}

/// Free text bounded by letters, with delimiters and quotes inside.
fn field_text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,\"|']{0,10}[A-Za-z]"
}

fn email_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z][a-z.,\"|@]{0,10}[a-z]",
    ]
}

/// Name, department, salary in cents, email, days after 1990-01-01.
type RecordParts = (String, String, u32, String, u64);

fn record_strategy() -> impl Strategy<Value = RecordParts> {
    (field_text(), field_text(), 0u32..20_000_000, email_text(), 0u64..15_000)
}

fn build(records: &[RecordParts]) -> Roster {
    let epoch = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut roster = Roster::new();
    for (i, (name, department, cents, email, days)) in records.iter().enumerate() {
        let employee = Employee::reconstruct(
            roster.ids(),
            EmployeeId::new(u32::try_from(i).unwrap() + 1),
            name.as_str(),
            department.as_str(),
            f64::from(*cents) / 100.0,
            epoch.checked_add_days(Days::new(*days)).unwrap(),
            email.as_str(),
        );
        roster.add(employee);
    }
    roster
}

fn export_csv(roster: &Roster) -> String {
    let mut buffer = Vec::new();
    SaveService::new(roster)
        .save_writer(&mut buffer, Format::Csv)
        .unwrap();
    String::from_utf8(buffer).unwrap()
}

fn import_csv(text: &str) -> (Roster, roster::LoadReport) {
    let mut roster = Roster::new();
    let report = LoadService::new(&mut roster)
        .load_reader(Cursor::new(text.to_string()), Format::Csv)
        .unwrap();
    (roster, report)
}

proptest! {
    /// Property: CSV export then import preserves all six fields.
    #[test]
    fn prop_csv_roundtrip(records in prop::collection::vec(record_strategy(), 0..20)) {
        let roster = build(&records);
        let (reloaded, report) = import_csv(&export_csv(&roster));

        prop_assert!(!report.has_errors());
        prop_assert_eq!(report.skipped, 0);
        prop_assert_eq!(reloaded.len(), roster.len());
        for (a, b) in roster.employees().iter().zip(reloaded.employees()) {
            prop_assert_eq!(a.id(), b.id());
            prop_assert_eq!(a.name(), b.name());
            prop_assert_eq!(a.department(), b.department());
            prop_assert!((a.salary() - b.salary()).abs() < 0.005);
            prop_assert_eq!(a.hire_date(), b.hire_date());
            prop_assert_eq!(a.email(), b.email());
        }
    }

    /// Property: one corrupted line is lost or reported, every other row loads.
    #[test]
    fn prop_csv_corrupted_line_is_isolated(
        records in prop::collection::vec(record_strategy(), 1..20),
        at in any::<prop::sample::Index>(),
    ) {
        let roster = build(&records);
        let exported = export_csv(&roster);

        let mut lines: Vec<&str> = exported.lines().collect();
        let position = 1 + at.index(lines.len());
        lines.insert(position, "999,\"broken,Eng,1,2020-01-01,x@x.com");
        let (reloaded, report) = import_csv(&lines.join("\n"));

        prop_assert_eq!(reloaded.len(), roster.len());
        prop_assert_eq!(report.skipped + report.errors.len(), 1);
        let expected: Vec<EmployeeId> = roster.employees().iter().map(Employee::id).collect();
        let actual: Vec<EmployeeId> = reloaded.employees().iter().map(Employee::id).collect();
        prop_assert_eq!(actual, expected);
    }
}
