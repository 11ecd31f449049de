//! Tests for RegistrationLedger seat, waitlist and undo bookkeeping

use rstest::rstest;

use coursereg::domain::{RegistrationLedger, ReportEvent, ReportKind, MAX_COURSES, MAX_SEATS};
use coursereg::util::testing;

fn waitlist(ledger: &RegistrationLedger) -> Vec<String> {
    ledger.waitlist().map(str::to_string).collect()
}

/// Registers `first` directly, then queues the rest.
fn ledger_with(first: &str, queued: &[&str]) -> RegistrationLedger {
    let mut ledger = RegistrationLedger::new();
    ledger.register_course(first, "CS101");
    for student in queued {
        ledger.register_course(student, "CS101");
    }
    ledger
}

#[test]
fn given_open_seat_when_registering_then_registered_directly() {
    testing::init_test_setup();
    // Arrange
    let mut ledger = RegistrationLedger::new();
    assert_eq!(ledger.seats_available(), MAX_SEATS);

    // Act
    let event = ledger.register_course("Alice", "CS101");

    // Assert
    assert_eq!(event.kind(), ReportKind::RegisteredDirectly);
    assert_eq!(ledger.seats_available(), 0);
    assert_eq!(ledger.courses_registered(), 1);
}

#[test]
fn given_any_history_when_registering_then_counters_stay_in_range() {
    let mut ledger = RegistrationLedger::new();
    for i in 0..(MAX_COURSES * 3) {
        ledger.register_course(&format!("S{i}"), "CS101");
        if i % 3 == 0 {
            ledger.drop_course("any", "CS101");
        }
        if i % 4 == 0 {
            ledger.undo("CS101");
        }
        assert!(ledger.seats_available() <= MAX_SEATS);
        assert!(ledger.courses_registered() <= MAX_COURSES);
        assert_eq!(
            ledger.seats_available() + ledger.courses_registered(),
            MAX_SEATS,
            "a seat grant always moves both counters"
        );
    }
}

#[test]
fn given_seat_occupied_when_registering_then_waitlisted_and_drop_promotes() {
    // Arrange
    let mut ledger = ledger_with("Alice", &[]);

    // Act
    let waitlisted = ledger.register_course("Bob", "CS101");

    // Assert
    assert_eq!(waitlisted.kind(), ReportKind::Waitlisted);
    assert_eq!(waitlist(&ledger), vec!["Bob"]);

    // Act
    let dropped = ledger.drop_course("Anyone", "CS999");

    // Assert
    assert_eq!(
        dropped,
        ReportEvent::DroppedAndPromoted {
            student: "Anyone".into(),
            course: "CS999".into(),
            promoted: "Bob".into()
        }
    );
    assert_eq!(ledger.seats_available(), 0);
    assert!(waitlist(&ledger).is_empty());
}

#[test]
fn given_seat_free_when_dropping_then_not_registered_without_change() {
    let mut ledger = RegistrationLedger::new();
    let before = ledger.status();

    let event = ledger.drop_course("Alice", "CS101");

    assert_eq!(event.kind(), ReportKind::NotRegistered);
    assert_eq!(ledger.status(), before);
}

#[test]
fn given_occupant_alice_when_bob_drops_then_drop_succeeds_anyway() {
    let mut ledger = ledger_with("Alice", &[]);

    let event = ledger.drop_course("Bob", "CS101");

    assert_eq!(
        event,
        ReportEvent::DroppedSuccessfully {
            student: "Bob".into(),
            course: "CS101".into()
        }
    );
    assert_eq!(ledger.seats_available(), 1);
}

#[test]
fn given_empty_ledger_when_undoing_then_nothing_to_undo() {
    let mut ledger = RegistrationLedger::new();
    let before = ledger.status();

    let event = ledger.undo("CS101");

    assert_eq!(
        event,
        ReportEvent::UndoNothingToUndo {
            course: "CS101".into()
        }
    );
    assert_eq!(ledger.status(), before);
}

#[test]
fn given_direct_registration_when_undoing_then_seat_restored_and_student_waitlisted() {
    let mut ledger = ledger_with("Alice", &[]);

    let event = ledger.undo("CS101");

    assert_eq!(event.kind(), ReportKind::UndoRevertedRegistration);
    assert_eq!(ledger.seats_available(), 1);
    assert_eq!(ledger.courses_registered(), 0);
    assert_eq!(waitlist(&ledger), vec!["Alice"]);
}

#[test]
fn given_waitlist_abc_when_undoing_b_entry_then_a_and_c_keep_order() {
    // Arrange: C is promoted and the promotion undone, which re-queues C at
    // the tail and leaves B's waitlist entry on top of the log
    let mut ledger = ledger_with("Z", &["C", "A", "B"]);
    ledger.drop_course("Z", "CS101");
    ledger.undo("CS101");
    assert_eq!(waitlist(&ledger), vec!["A", "B", "C"]);

    // Act
    let event = ledger.undo("CS101");

    // Assert
    assert_eq!(
        event,
        ReportEvent::UndoRevertedWaitlist {
            student: "B".into(),
            course: "CS101".into()
        }
    );
    assert_eq!(waitlist(&ledger), vec!["A", "C"]);
}

#[test]
fn given_duplicate_waitlist_entries_when_undoing_then_first_occurrence_removed() {
    let mut ledger = ledger_with("Z", &["B", "A", "B"]);
    assert_eq!(waitlist(&ledger), vec!["B", "A", "B"]);

    ledger.undo("CS101");

    assert_eq!(waitlist(&ledger), vec!["A", "B"]);
}

#[rstest]
#[case::empty(&[])]
#[case::queued(&["Bob", "Carol"])]
fn given_waitlist_when_displaying_twice_then_identical(#[case] queued: &[&str]) {
    let ledger = ledger_with("Alice", queued);

    let first = ledger.display_waitlist("CS101");
    let second = ledger.display_waitlist("CS101");

    assert_eq!(first, second);
    assert_eq!(first.students, queued);
    assert_eq!(first.is_empty(), queued.is_empty());
}

#[test]
fn given_mixed_history_when_undoing_everything_then_log_drains_in_reverse() {
    let mut ledger = ledger_with("Alice", &["Bob"]);
    ledger.drop_course("Alice", "CS101");

    let kinds: Vec<ReportKind> = (0..4).map(|_| ledger.undo("CS101").kind()).collect();

    assert_eq!(
        kinds,
        vec![
            ReportKind::UndoRevertedRegistration,
            ReportKind::UndoRevertedWaitlist,
            ReportKind::UndoRevertedRegistration,
            ReportKind::UndoNothingToUndo,
        ]
    );
    assert_eq!(ledger.undo_depth(), 0);
    assert_eq!(waitlist(&ledger), vec!["Alice"]);
    assert_eq!(ledger.seats_available(), MAX_SEATS);
    assert_eq!(ledger.courses_registered(), 0);
}

#[test]
fn given_undo_after_drop_when_registering_twice_then_only_one_seat_granted() {
    // Arrange: the undo reverts a seat grant whose seat the drop already freed
    testing::init_test_setup();
    let mut ledger = ledger_with("A", &[]);
    ledger.drop_course("A", "CS101");
    ledger.undo("CS101");
    assert_eq!(ledger.seats_available(), MAX_SEATS);
    assert_eq!(ledger.courses_registered(), 0);

    // Act
    let b = ledger.register_course("B", "CS101");
    let c = ledger.register_course("C", "CS101");

    // Assert
    assert_eq!(b.kind(), ReportKind::RegisteredDirectly);
    assert_eq!(c.kind(), ReportKind::Waitlisted);
    assert_eq!(ledger.seats_available(), 0);
    assert_eq!(ledger.courses_registered(), 1);
    assert_eq!(waitlist(&ledger), vec!["A", "C"]);
}
