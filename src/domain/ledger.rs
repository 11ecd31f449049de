//! Seat accounting with a FIFO waitlist and a LIFO undo log.
//!
//! There is one global seat pool: the course argument only labels reports and
//! is never used to partition state. Drops do not check who holds the seat.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::domain::events::{LedgerStatus, ReportEvent, UndoEntry, WaitlistView};

/// Capacity of the single seat pool.
pub const MAX_SEATS: usize = 1;

/// Registrations one ledger will process before refusing further ones.
pub const MAX_COURSES: usize = 6;

#[derive(Debug)]
pub struct RegistrationLedger {
    seats_available: usize,
    courses_registered: usize,
    waitlist: VecDeque<String>,
    undo_log: Vec<UndoEntry>,
}

impl Default for RegistrationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationLedger {
    pub fn new() -> Self {
        Self {
            seats_available: MAX_SEATS,
            courses_registered: 0,
            waitlist: VecDeque::new(),
            undo_log: Vec::new(),
        }
    }

    /// Grants the seat if free, otherwise queues `student` on the waitlist.
    #[instrument(level = "debug", skip(self))]
    pub fn register_course(&mut self, student: &str, course: &str) -> ReportEvent {
        if self.courses_registered >= MAX_COURSES {
            debug!("register: limit of {} reached", MAX_COURSES);
            return ReportEvent::CourseLimitReached {
                student: student.to_string(),
                limit: MAX_COURSES,
            };
        }

        if self.seats_available > 0 {
            self.grant_seat(student);
            ReportEvent::RegisteredDirectly {
                student: student.to_string(),
                course: course.to_string(),
            }
        } else {
            self.waitlist.push_back(student.to_string());
            self.undo_log
                .push(UndoEntry::WaitlistEntry(student.to_string()));
            debug!("register: waitlisted, queue length {}", self.waitlist.len());
            ReportEvent::Waitlisted {
                student: student.to_string(),
                course: course.to_string(),
            }
        }
    }

    /// Frees the occupied seat and promotes the waitlist head into it.
    ///
    /// Succeeds whenever the seat is occupied, whoever `student` is.
    #[instrument(level = "debug", skip(self))]
    pub fn drop_course(&mut self, student: &str, course: &str) -> ReportEvent {
        if self.seats_available >= MAX_SEATS {
            debug!("drop: seat already free");
            return ReportEvent::NotRegistered {
                student: student.to_string(),
                course: course.to_string(),
            };
        }

        self.release_seat();

        match self.waitlist.pop_front() {
            Some(next) => {
                self.grant_seat(&next);
                debug!("drop: promoted {} from waitlist", next);
                ReportEvent::DroppedAndPromoted {
                    student: student.to_string(),
                    course: course.to_string(),
                    promoted: next,
                }
            }
            None => ReportEvent::DroppedSuccessfully {
                student: student.to_string(),
                course: course.to_string(),
            },
        }
    }

    /// Reverts the most recent registration action.
    ///
    /// A reverted seat grant sends the student to the waitlist tail; the freed
    /// seat is not offered to the current waitlist head.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self, course: &str) -> ReportEvent {
        let Some(entry) = self.undo_log.pop() else {
            debug!("undo: log empty");
            return ReportEvent::UndoNothingToUndo {
                course: course.to_string(),
            };
        };
        debug!("undo: reverting {:?} for {}", entry, entry.student());

        match entry {
            UndoEntry::DirectRegistration(student) => {
                self.release_seat();
                self.waitlist.push_back(student.clone());
                ReportEvent::UndoRevertedRegistration {
                    student,
                    course: course.to_string(),
                }
            }
            UndoEntry::WaitlistEntry(student) => {
                match self.waitlist.iter().position(|s| *s == student) {
                    Some(pos) => {
                        self.waitlist.remove(pos);
                    }
                    None => debug!("undo: {} no longer waitlisted", student),
                }
                ReportEvent::UndoRevertedWaitlist {
                    student,
                    course: course.to_string(),
                }
            }
        }
    }

    pub fn display_waitlist(&self, course: &str) -> WaitlistView {
        WaitlistView {
            course: course.to_string(),
            students: self.waitlist.iter().cloned().collect(),
        }
    }

    pub fn seats_available(&self) -> usize {
        self.seats_available
    }

    pub fn courses_registered(&self) -> usize {
        self.courses_registered
    }

    /// Waitlisted students, head first.
    pub fn waitlist(&self) -> impl Iterator<Item = &str> {
        self.waitlist.iter().map(String::as_str)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    pub fn status(&self) -> LedgerStatus {
        LedgerStatus {
            seats_available: self.seats_available,
            courses_registered: self.courses_registered,
            waitlist_len: self.waitlist.len(),
            undo_depth: self.undo_log.len(),
        }
    }

    fn grant_seat(&mut self, student: &str) {
        self.seats_available -= 1;
        self.courses_registered += 1;
        self.undo_log
            .push(UndoEntry::DirectRegistration(student.to_string()));
    }

    /// Counters stay within `[0, MAX_SEATS]` and `[0, MAX_COURSES]` even when
    /// an undo reverts a seat that a later drop already freed.
    fn release_seat(&mut self) {
        self.seats_available = (self.seats_available + 1).min(MAX_SEATS);
        self.courses_registered = self.courses_registered.saturating_sub(1);
    }
}
