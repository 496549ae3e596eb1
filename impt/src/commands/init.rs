//! Init command implementation.
//!
//! This module writes a default `impt.toml` into a directory so display
//! options can be tuned per project.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::commands::common::error_messages;
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{ImptError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command, returning the path of the written config file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self.get_target_path()?;
        debug!(command = Self::name(), path = %target_path.display(), "starting");

        self.validate_directory(&target_path)?;
        let config_path = self.create_config_file(&target_path)?;

        info!(path = %config_path.display(), "configuration written");
        Ok(config_path)
    }

    /// Get the target path for initialization.
    fn get_target_path(&self) -> Result<PathBuf> {
        match &self.args.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Make sure the target is a directory, creating it if missing.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(ImptError::FileOperation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    /// Create the configuration file.
    fn create_config_file(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.args.force {
            return Err(ImptError::FileOperation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    InitCommand::new(args).execute().map(|_| ())
}
