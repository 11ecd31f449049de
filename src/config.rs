//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/coursereg/coursereg.toml`
//! 3. Explicit config file given with `--config`
//! 4. Environment variables: `COURSEREG__<SECTION>__<KEY>`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Course codes seeded into the catalog when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub courses: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            courses: vec![
                "CS101".into(),
                "CS102".into(),
                "CS201".into(),
                "CS202".into(),
            ],
        }
    }
}

/// Interactive menu settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before reading a menu choice
    pub prompt: String,
    /// Print the numbered menu before every prompt
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter your choice:".into(),
            show_menu: true,
        }
    }
}

/// Unified configuration for coursereg.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub shell: ShellConfig,
}

/// Get the XDG config directory for coursereg.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "coursereg").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("coursereg.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist when given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/coursereg/coursereg.toml` (optional)
    /// 3. `config_file`
    /// 4. Environment variables: `COURSEREG__*` (lists are comma separated)
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file, true)
    }

    /// Load from explicit layers.
    ///
    /// `global` is skipped when missing, `explicit` is required to exist.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        with_env: bool,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("catalog.courses", defaults.catalog.courses.clone())
            .map_err(config_err)?
            .set_default("shell.prompt", defaults.shell.prompt.clone())
            .map_err(config_err)?
            .set_default("shell.show_menu", defaults.shell.show_menu)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        if with_env {
            builder = builder.add_source(
                Environment::with_prefix("COURSEREG")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("catalog.courses")
                    .try_parsing(true),
            );
        }

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.normalize();
        Ok(settings)
    }

    /// Trim course codes and drop empty entries left by list parsing.
    fn normalize(&mut self) {
        self.catalog.courses = self
            .catalog
            .courses
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# coursereg configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/coursereg/coursereg.toml
#   Explicit: coursereg --config <file>
#   Env:      COURSEREG__<SECTION>__<KEY>, e.g. COURSEREG__CATALOG__COURSES=CS101,CS102

[catalog]
# Course codes inserted into the catalog at startup (listed alphabetically)
# courses = ["CS101", "CS102", "CS201", "CS202"]

[shell]
# Prompt for the interactive menu
# prompt = "Enter your choice:"

# Print the numbered menu before every prompt
# show_menu = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
