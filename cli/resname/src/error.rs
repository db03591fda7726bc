//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use resname_format::FormatError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid assignment '{0}': expected VAR=UUID")]
    InvalidAssignment(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("{0}")]
    Format(#[from] FormatError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    let format_err = err
        .downcast_ref::<FormatError>()
        .or_else(|| match err.downcast_ref::<CliError>() {
            Some(CliError::Format(e)) => Some(e),
            _ => None,
        });

    if let Some(format_err) = format_err {
        return Some(match format_err {
            FormatError::FormatInvalid { .. } => {
                "Hint: Segments must be lowercase literals (users) or variables ({user}), with no repeated variable names."
            }
            FormatError::NameInvalid { .. } => {
                "Hint: Names need one segment per format segment, with UUIDs in lowercase 8-4-4-4-12 form."
            }
            FormatError::MissingVariable { .. } => {
                "Hint: Pass every variable as VAR=UUID. Run `resname check <FORMAT>` to list them."
            }
        });
    }

    match err.downcast_ref::<CliError>() {
        Some(CliError::InvalidAssignment(_)) => {
            Some("Hint: Assignments look like store=78da9161-aef1-49ed-bc92-0f136c95308f.")
        }
        Some(CliError::ConfigNotFound(_)) => {
            Some("Hint: Check --config or the RESNAME_CONFIG environment variable.")
        }
        _ => None,
    }
}
