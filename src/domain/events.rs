//! Structured outcomes of ledger operations.
//!
//! The ledger never prints; every operation hands back one of these and the
//! driver decides how to present it.

/// Reversible action recorded on the undo log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEntry {
    /// Student was granted the seat (directly or by promotion from the waitlist)
    DirectRegistration(String),
    /// Student was appended to the waitlist
    WaitlistEntry(String),
}

impl UndoEntry {
    pub fn student(&self) -> &str {
        match self {
            UndoEntry::DirectRegistration(s) | UndoEntry::WaitlistEntry(s) => s,
        }
    }
}

/// Discriminant of [`ReportEvent`] without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    RegisteredDirectly,
    Waitlisted,
    CourseLimitReached,
    DroppedSuccessfully,
    DroppedAndPromoted,
    NotRegistered,
    UndoNothingToUndo,
    UndoRevertedRegistration,
    UndoRevertedWaitlist,
}

/// Outcome of a single ledger operation, naming the students and course involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    RegisteredDirectly {
        student: String,
        course: String,
    },
    Waitlisted {
        student: String,
        course: String,
    },
    CourseLimitReached {
        student: String,
        limit: usize,
    },
    DroppedSuccessfully {
        student: String,
        course: String,
    },
    /// Seat freed by `student` and immediately taken by `promoted`
    DroppedAndPromoted {
        student: String,
        course: String,
        promoted: String,
    },
    NotRegistered {
        student: String,
        course: String,
    },
    UndoNothingToUndo {
        course: String,
    },
    /// Seat released; `student` was moved to the waitlist tail
    UndoRevertedRegistration {
        student: String,
        course: String,
    },
    /// Reported even when `student` was no longer on the waitlist
    UndoRevertedWaitlist {
        student: String,
        course: String,
    },
}

impl ReportEvent {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportEvent::RegisteredDirectly { .. } => ReportKind::RegisteredDirectly,
            ReportEvent::Waitlisted { .. } => ReportKind::Waitlisted,
            ReportEvent::CourseLimitReached { .. } => ReportKind::CourseLimitReached,
            ReportEvent::DroppedSuccessfully { .. } => ReportKind::DroppedSuccessfully,
            ReportEvent::DroppedAndPromoted { .. } => ReportKind::DroppedAndPromoted,
            ReportEvent::NotRegistered { .. } => ReportKind::NotRegistered,
            ReportEvent::UndoNothingToUndo { .. } => ReportKind::UndoNothingToUndo,
            ReportEvent::UndoRevertedRegistration { .. } => ReportKind::UndoRevertedRegistration,
            ReportEvent::UndoRevertedWaitlist { .. } => ReportKind::UndoRevertedWaitlist,
        }
    }

    /// Whether the requested action took effect.
    ///
    /// `CourseLimitReached`, `NotRegistered` and `UndoNothingToUndo` leave the
    /// ledger untouched.
    pub fn is_applied(&self) -> bool {
        !matches!(
            self.kind(),
            ReportKind::CourseLimitReached | ReportKind::NotRegistered | ReportKind::UndoNothingToUndo
        )
    }
}

/// Snapshot of the waitlist, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistView {
    pub course: String,
    pub students: Vec<String>,
}

impl WaitlistView {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Aggregate ledger counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStatus {
    pub seats_available: usize,
    pub courses_registered: usize,
    pub waitlist_len: usize,
    pub undo_depth: usize,
}
