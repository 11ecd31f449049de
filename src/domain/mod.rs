//! Domain layer: course catalog and registration ledger
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Operations never fail; outcomes are reported as [`ReportEvent`] values.

pub mod catalog;
pub mod events;
pub mod ledger;

pub use catalog::{CourseCatalog, CourseNode, InOrderIter};
pub use events::{LedgerStatus, ReportEvent, ReportKind, UndoEntry, WaitlistView};
pub use ledger::{RegistrationLedger, MAX_COURSES, MAX_SEATS};
