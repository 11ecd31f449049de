//! Course registration teaching demo.
//!
//! Two independent components make up the core:
//!
//! - [`domain::CourseCatalog`]: binary search tree of course codes, listed alphabetically.
//! - [`domain::RegistrationLedger`]: one global seat, a FIFO waitlist and a LIFO undo log.
//!
//! Core operations never fail and never print; they return
//! [`domain::ReportEvent`] values that the CLI renders.
//!
//! ```
//! use coursereg::domain::{RegistrationLedger, ReportKind};
//!
//! let mut ledger = RegistrationLedger::new();
//! assert_eq!(ledger.register_course("Alice", "CS101").kind(), ReportKind::RegisteredDirectly);
//! assert_eq!(ledger.register_course("Bob", "CS101").kind(), ReportKind::Waitlisted);
//! assert_eq!(ledger.drop_course("Alice", "CS101").kind(), ReportKind::DroppedAndPromoted);
//! assert_eq!(ledger.waitlist().count(), 0);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
