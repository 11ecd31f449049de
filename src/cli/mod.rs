//! CLI layer: argument parsing, command dispatch and presentation

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod render;
pub mod shell;

pub use args::{Cli, Commands, ConfigCommands};
pub use error::{CliError, CliResult};
pub use shell::MenuShell;
