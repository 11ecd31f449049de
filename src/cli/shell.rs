//! Interactive numbered menu over any reader/writer pair.
//!
//! Input is consumed as whitespace-separated tokens, so a single line may
//! answer several prompts (`2 Alice CS101`). End of input ends the session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::{Command, RegistrationSession, Response};
use crate::cli::error::{CliError, CliResult};
use crate::cli::render;
use crate::config::ShellConfig;

const MENU: &[&str] = &[
    "1. Display Course Tree",
    "2. Register for a Course",
    "3. Drop a Course",
    "4. Undo Last Action",
    "5. Display Waitlist",
    "6. Exit",
];

/// Whitespace tokenizer that refills from the underlying reader line by line.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> CliResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| CliError::io("read menu input", e))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

pub struct MenuShell<'a, R, W> {
    session: &'a mut RegistrationSession,
    config: &'a ShellConfig,
    input: Tokens<R>,
    out: W,
}

impl<'a, R: BufRead, W: Write> MenuShell<'a, R, W> {
    pub fn new(
        session: &'a mut RegistrationSession,
        config: &'a ShellConfig,
        input: R,
        out: W,
    ) -> Self {
        Self {
            session,
            config,
            input: Tokens::new(input),
            out,
        }
    }

    /// Runs the menu until the user picks Exit or input runs out.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> CliResult<()> {
        self.write_line("Welcome to the Course Registration System!")?;
        loop {
            if self.config.show_menu {
                self.write_line("")?;
                self.write_line("Menu:")?;
                for entry in MENU {
                    self.write_line(entry)?;
                }
            }
            let prompt = self.config.prompt.clone();
            let Some(choice) = self.ask(&prompt)? else {
                debug!("menu: end of input");
                return Ok(());
            };
            debug!("menu: choice {:?}", choice);

            let command = match choice.parse::<u8>() {
                Ok(1) => Some(Command::ListCourses),
                Ok(2) => self
                    .ask_student_and_course()?
                    .map(|(student, course)| Command::Register { student, course }),
                Ok(3) => self
                    .ask_student_and_course()?
                    .map(|(student, course)| Command::Drop { student, course }),
                Ok(4) => self.ask("Enter course code:")?.map(|course| Command::Undo { course }),
                Ok(5) => self
                    .ask("Enter course code:")?
                    .map(|course| Command::Waitlist { course }),
                Ok(6) => Some(Command::Exit),
                _ => {
                    self.write_line("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            let Some(command) = command else {
                debug!("menu: end of input while prompting");
                return Ok(());
            };
            let response = self.session.execute(command);
            for line in render::response_lines(&response) {
                self.write_line(&line)?;
            }
            if response == Response::Exit {
                return Ok(());
            }
        }
    }

    fn ask_student_and_course(&mut self) -> CliResult<Option<(String, String)>> {
        let Some(student) = self.ask("Enter your name:")? else {
            return Ok(None);
        };
        Ok(self
            .ask("Enter course code:")?
            .map(|course| (student, course)))
    }

    fn ask(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.out, "{} ", prompt).map_err(|e| CliError::io("write prompt", e))?;
        self.out
            .flush()
            .map_err(|e| CliError::io("flush prompt", e))?;
        self.input.next_token()
    }

    fn write_line(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.out, "{}", line).map_err(|e| CliError::io("write menu output", e))
    }
}
