//! Check command implementation.
//!
//! Renders every lexical error as a coded diagnostic with a source snippet
//! on stderr. Fails when any file has errors, so it can gate scripts.

use std::path::PathBuf;

use impc_util::Handler;
use tracing::{debug, info};

use crate::commands::common::{analyze_file, AnalyzedFile};
use crate::commands::traits::Command;
use crate::error::{ImptError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check, in order.
    pub files: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command, returning the total number of errors found.
    pub fn run(&self) -> Result<usize> {
        debug!(command = Self::name(), files = self.args.files.len(), "starting");
        let mut total = 0;

        for path in &self.args.files {
            let analyzed = analyze_file(path)?;
            let handler = Self::collect_diagnostics(&analyzed);

            if handler.has_errors() {
                eprintln!("{}\n", handler.render_all(Some(&analyzed.source)));
            }

            let errors = handler.error_count();
            info!(file = %path.display(), errors, "check finished");
            total += errors;
        }

        Ok(total)
    }

    /// Converts a file's lexical errors into diagnostics.
    fn collect_diagnostics(analyzed: &AnalyzedFile) -> Handler {
        let handler = Handler::new();
        for error in &analyzed.output.errors {
            handler.emit_diagnostic(error.to_diagnostic());
        }
        handler
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
///
/// # Errors
/// Returns `ImptError::LexicalErrors` when any file has lexical errors.
pub fn run_check(args: CheckArgs) -> Result<()> {
    match CheckCommand::new(args).execute()? {
        0 => Ok(()),
        count => Err(ImptError::LexicalErrors(count)),
    }
}
