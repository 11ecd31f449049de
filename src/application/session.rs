//! Registration session: owns the catalog and the ledger and dispatches commands.
//!
//! The two components never talk to each other; the session is the only
//! place holding both.

use std::io::BufRead;

use tracing::{debug, info, instrument, warn};

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult, Command};
use crate::config::Settings;
use crate::domain::{CourseCatalog, LedgerStatus, RegistrationLedger, ReportEvent, WaitlistView};

/// Result of executing one [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Catalog contents in ascending order
    Courses(Vec<String>),
    CourseAdded { code: String, inserted: bool },
    Report(ReportEvent),
    Waitlist(WaitlistView),
    Status(LedgerStatus),
    Exit,
}

#[derive(Debug, Default)]
pub struct RegistrationSession {
    catalog: CourseCatalog,
    ledger: RegistrationLedger,
}

impl RegistrationSession {
    /// Creates a session with the catalog seeded from `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self::with_courses(settings.catalog.courses.iter().cloned())
    }

    pub fn with_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let catalog: CourseCatalog = courses.into_iter().collect();
        info!("session: catalog seeded with {} course(s)", catalog.len());
        Self {
            catalog,
            ledger: RegistrationLedger::new(),
        }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &RegistrationLedger {
        &self.ledger
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: Command) -> Response {
        if let Command::Register { course, .. } | Command::Drop { course, .. } = &command {
            if !self.catalog.contains(course) {
                // the ledger has a single global seat, the code is only a label
                warn!("course {} is not in the catalog", course);
            }
        }
        match command {
            Command::ListCourses => Response::Courses(self.catalog.list_all()),
            Command::AddCourse { code } => {
                let inserted = self.catalog.insert(code.clone());
                Response::CourseAdded { code, inserted }
            }
            Command::Register { student, course } => {
                Response::Report(self.ledger.register_course(&student, &course))
            }
            Command::Drop { student, course } => {
                Response::Report(self.ledger.drop_course(&student, &course))
            }
            Command::Undo { course } => Response::Report(self.ledger.undo(&course)),
            Command::Waitlist { course } => {
                Response::Waitlist(self.ledger.display_waitlist(&course))
            }
            Command::Status => Response::Status(self.ledger.status()),
            Command::Exit => Response::Exit,
        }
    }

    /// Executes every command line read from `reader`.
    ///
    /// Stops after an `exit` command. A line that does not parse aborts the run
    /// with its 1-based line number; commands before it have already been applied.
    pub fn run_script<R: BufRead>(
        &mut self,
        reader: R,
    ) -> ApplicationResult<Vec<(Command, Response)>> {
        let mut results = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.with_context("read script line")?;
            let command = Command::parse_line(&line).map_err(|e| ApplicationError::Script {
                line: idx + 1,
                source: Box::new(e),
            })?;
            let Some(command) = command else {
                continue;
            };
            debug!("script line {}: {}", idx + 1, command);
            let response = self.execute(command.clone());
            let done = response == Response::Exit;
            results.push((command, response));
            if done {
                break;
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportKind;

    #[test]
    fn given_default_settings_when_creating_session_then_seeds_catalog() {
        let session = RegistrationSession::new(&Settings::default());
        assert_eq!(
            session.catalog().list_all(),
            vec!["CS101", "CS102", "CS201", "CS202"]
        );
    }

    #[test]
    fn given_existing_code_when_adding_then_not_inserted() {
        let mut session = RegistrationSession::with_courses(["CS101"]);
        let response = session.execute(Command::AddCourse {
            code: "CS101".into(),
        });
        assert_eq!(
            response,
            Response::CourseAdded {
                code: "CS101".into(),
                inserted: false
            }
        );
    }

    #[test]
    fn given_register_command_when_executing_then_reports_event() {
        let mut session = RegistrationSession::default();
        let response = session.execute(Command::Register {
            student: "Alice".into(),
            course: "CS101".into(),
        });
        match response {
            Response::Report(event) => assert_eq!(event.kind(), ReportKind::RegisteredDirectly),
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
