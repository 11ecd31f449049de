//! Line-oriented command grammar shared by scripts and the `run` subcommand.
//!
//! ```text
//! courses
//! add <code>
//! register <student> <course>
//! drop <student> <course>
//! undo <course>
//! waitlist <course>
//! status
//! exit | quit
//! ```
//!
//! Identifiers are single whitespace-free words. Keywords are case-insensitive,
//! identifiers are kept verbatim.

use std::fmt;
use std::str::FromStr;

use crate::application::{ApplicationError, ApplicationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListCourses,
    AddCourse { code: String },
    Register { student: String, course: String },
    Drop { student: String, course: String },
    Undo { course: String },
    Waitlist { course: String },
    Status,
    Exit,
}

impl Command {
    /// Parses a script line; blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> ApplicationResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((keyword, args)) = words.split_first() else {
            return Err(ApplicationError::invalid_command(s, "empty command"));
        };

        let arity = |n: usize, usage: &str| -> ApplicationResult<()> {
            if args.len() == n {
                Ok(())
            } else {
                Err(ApplicationError::invalid_command(
                    s,
                    format!("expected {} argument(s), usage: {}", n, usage),
                ))
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "courses" => {
                arity(0, "courses")?;
                Ok(Command::ListCourses)
            }
            "add" => {
                arity(1, "add <code>")?;
                Ok(Command::AddCourse {
                    code: args[0].to_string(),
                })
            }
            "register" => {
                arity(2, "register <student> <course>")?;
                Ok(Command::Register {
                    student: args[0].to_string(),
                    course: args[1].to_string(),
                })
            }
            "drop" => {
                arity(2, "drop <student> <course>")?;
                Ok(Command::Drop {
                    student: args[0].to_string(),
                    course: args[1].to_string(),
                })
            }
            "undo" => {
                arity(1, "undo <course>")?;
                Ok(Command::Undo {
                    course: args[0].to_string(),
                })
            }
            "waitlist" => {
                arity(1, "waitlist <course>")?;
                Ok(Command::Waitlist {
                    course: args[0].to_string(),
                })
            }
            "status" => {
                arity(0, "status")?;
                Ok(Command::Status)
            }
            "exit" | "quit" => {
                arity(0, "exit")?;
                Ok(Command::Exit)
            }
            other => Err(ApplicationError::invalid_command(
                s,
                format!("unknown command '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ListCourses => write!(f, "courses"),
            Command::AddCourse { code } => write!(f, "add {}", code),
            Command::Register { student, course } => write!(f, "register {} {}", student, course),
            Command::Drop { student, course } => write!(f, "drop {} {}", student, course),
            Command::Undo { course } => write!(f, "undo {}", course),
            Command::Waitlist { course } => write!(f, "waitlist {}", course),
            Command::Status => write!(f, "status"),
            Command::Exit => write!(f, "exit"),
        }
    }
}
