//! Text rendering of session responses
//!
//! Pure string building; callers decide where and how (colored or plain) to print.

use itertools::Itertools;

use crate::application::Response;
use crate::domain::{ReportEvent, WaitlistView, MAX_COURSES, MAX_SEATS};

/// Lines describing a ledger outcome.
pub fn event_lines(event: &ReportEvent) -> Vec<String> {
    match event {
        ReportEvent::RegisteredDirectly { student, course } => {
            vec![format!("Student {student} registered for {course} successfully!")]
        }
        ReportEvent::Waitlisted { student, course } => vec![format!(
            "No seats available for {course}. Student {student} added to the waitlist."
        )],
        ReportEvent::CourseLimitReached { student, limit } => vec![format!(
            "Student {student} cannot register for more than {limit} courses."
        )],
        ReportEvent::DroppedSuccessfully { student, course } => {
            vec![format!("Student {student} dropped {course} successfully!")]
        }
        ReportEvent::DroppedAndPromoted {
            student,
            course,
            promoted,
        } => vec![
            format!("Student {student} dropped {course} successfully!"),
            format!("Student {promoted} has been enrolled from the waitlist for {course}."),
        ],
        ReportEvent::NotRegistered { student, course } => {
            vec![format!("Student {student} was not registered for {course}!")]
        }
        ReportEvent::UndoNothingToUndo { course } => {
            vec![format!("No actions to undo for {course}!")]
        }
        ReportEvent::UndoRevertedRegistration { student, course } => vec![
            format!("Undo: Student {student} removed from {course}."),
            format!("Student {student} added back to the waitlist for {course}."),
        ],
        ReportEvent::UndoRevertedWaitlist { student, course } => vec![format!(
            "Undo: Student {student} removed from the waitlist for {course}."
        )],
    }
}

pub fn waitlist_line(view: &WaitlistView) -> String {
    if view.is_empty() {
        format!("No students in the waitlist for {}.", view.course)
    } else {
        format!(
            "Waitlist for {}: {}",
            view.course,
            view.students.iter().join(" ")
        )
    }
}

/// Lines for any session response.
pub fn response_lines(response: &Response) -> Vec<String> {
    match response {
        Response::Courses(codes) if codes.is_empty() => vec!["No courses in the catalog.".into()],
        Response::Courses(codes) => codes.iter().map(|c| format!("- {c}")).collect(),
        Response::CourseAdded {
            code,
            inserted: true,
        } => vec![format!("Course {code} added to the catalog.")],
        Response::CourseAdded {
            code,
            inserted: false,
        } => vec![format!("Course {code} is already in the catalog.")],
        Response::Report(event) => event_lines(event),
        Response::Waitlist(view) => vec![waitlist_line(view)],
        Response::Status(status) => vec![
            format!("Seats available: {}/{}", status.seats_available, MAX_SEATS),
            format!(
                "Courses registered: {}/{}",
                status.courses_registered, MAX_COURSES
            ),
            format!("Waitlist length: {}", status.waitlist_len),
            format!("Undo depth: {}", status.undo_depth),
        ],
        Response::Exit => vec!["Exiting... Goodbye!".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_promotion_when_rendering_then_two_lines() {
        let lines = event_lines(&ReportEvent::DroppedAndPromoted {
            student: "Alice".into(),
            course: "CS101".into(),
            promoted: "Bob".into(),
        });
        assert_eq!(
            lines,
            vec![
                "Student Alice dropped CS101 successfully!",
                "Student Bob has been enrolled from the waitlist for CS101.",
            ]
        );
    }

    #[test]
    fn given_waitlist_when_rendering_then_space_separated() {
        let view = WaitlistView {
            course: "CS101".into(),
            students: vec!["A".into(), "B".into()],
        };
        assert_eq!(waitlist_line(&view), "Waitlist for CS101: A B");
    }

    #[test]
    fn given_empty_waitlist_when_rendering_then_empty_message() {
        let view = WaitlistView {
            course: "CS101".into(),
            students: vec![],
        };
        assert_eq!(waitlist_line(&view), "No students in the waitlist for CS101.");
    }
}
