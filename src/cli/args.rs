//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Course registration demo: alphabetical course catalog, single-seat ledger with waitlist and undo
#[derive(Parser, Debug)]
#[command(name = "coursereg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(short, long, global = true, env = "COURSEREG_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu
    Shell,

    /// List catalog courses alphabetically
    Courses {
        /// Show the tree shape instead of the sorted list
        #[arg(long)]
        tree: bool,
    },

    /// Execute a command script (one command per line)
    Run {
        /// Script file
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
    /// Print a commented config template
    Template,
}
