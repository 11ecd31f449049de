//! Subcommand dispatch

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::RegistrationSession;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::shell::MenuShell;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        None | Some(Commands::Shell) => cmd_shell(&settings),
        Some(Commands::Courses { tree }) => cmd_courses(&settings, *tree),
        Some(Commands::Run { script }) => cmd_run(&settings, script),
        Some(Commands::Config { command }) => cmd_config(&settings, command),
        Some(Commands::Completion { .. }) => Ok(()),
    }
}

#[instrument(skip(settings))]
fn cmd_shell(settings: &Settings) -> CliResult<()> {
    let mut session = RegistrationSession::new(settings);
    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuShell::new(&mut session, &settings.shell, stdin.lock(), stdout.lock()).run()
}

#[instrument(skip(settings))]
fn cmd_courses(settings: &Settings, tree: bool) -> CliResult<()> {
    let session = RegistrationSession::new(settings);
    let catalog = session.catalog();
    if tree {
        output::info(&catalog.to_tree());
        output::detail(&format!("depth: {}", catalog.depth()));
    } else {
        output::header(&format!("Courses ({}):", catalog.len()));
        for code in catalog {
            output::info(&format!("- {code}"));
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_run(settings: &Settings, script: &Path) -> CliResult<()> {
    let file = File::open(script)
        .map_err(|e| CliError::io(format!("open script {}", script.display()), e))?;
    let mut session = RegistrationSession::new(settings);
    let results = session.run_script(BufReader::new(file))?;
    debug!("script executed {} command(s)", results.len());
    for (command, response) in &results {
        output::header(&format!("> {command}"));
        output::response(response);
    }
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "no home directory, global config location unknown".into(),
                ))
            }
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
