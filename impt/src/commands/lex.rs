//! Lex command implementation.
//!
//! Runs the lexer over each input file and shows the results table (Line,
//! Lexeme, Token-type, Attribute) followed by the error panel. Lexical
//! errors are displayed, not fatal: the command succeeds as long as every
//! file could be read.

use std::path::PathBuf;

use impc_lex::report::{error_rows, token_rows, ErrorRow, RowFilter, TableRow};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::commands::common::{analyze_file, render_error_panel, render_table, AnalyzedFile, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the lex command, after merging flags with configuration.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Files to analyze, in order.
    pub files: Vec<PathBuf>,
    /// How to print results.
    pub format: OutputFormat,
    /// Include comment tokens in the table.
    pub show_comments: bool,
    /// Print the error panel.
    pub show_errors: bool,
}

impl Default for LexArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format: OutputFormat::Table,
            show_comments: true,
            show_errors: true,
        }
    }
}

/// JSON document for one analyzed file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    tokens: Vec<TableRow>,
    errors: Vec<ErrorRow>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        debug!(command = Self::name(), files = self.args.files.len(), "starting");

        for path in &self.args.files {
            let analyzed = analyze_file(path)?;
            let file = path.display().to_string();
            let tokens = analyzed.output.tokens.len();
            let errors = analyzed.output.errors.len();

            println!("{}", self.render(&analyzed)?);

            info!(%file, tokens, errors, "Code analyzed successfully!");
            if errors > 0 {
                warn!(%file, errors, "lexical errors found");
            }
        }
        Ok(())
    }

    /// Renders one file's results in the selected format.
    fn render(&self, analyzed: &AnalyzedFile) -> Result<String> {
        let filter = RowFilter {
            include_comments: self.args.show_comments,
        };
        let tokens = token_rows(&analyzed.output.tokens, &filter);
        let errors = if self.args.show_errors {
            error_rows(&analyzed.output.errors)
        } else {
            Vec::new()
        };

        match self.args.format {
            OutputFormat::Json => {
                let report = FileReport {
                    file: analyzed.path.display().to_string(),
                    tokens,
                    errors,
                };
                Ok(serde_json::to_string(&report)?)
            },
            OutputFormat::Table => {
                let mut out = String::new();
                if self.args.files.len() > 1 {
                    out.push_str(&format!("==> {} <==\n", analyzed.path.display()));
                }
                out.push_str(&render_table(&tokens));
                if self.args.show_errors && !errors.is_empty() {
                    out.push_str("\n\n");
                    out.push_str(&render_error_panel(&errors));
                }
                Ok(out)
            },
        }
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    LexCommand::new(args).execute()
}
