//! CLI commands.

mod format;
mod name;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// resname - Validate resource name formats and convert names.
#[derive(Debug, Parser)]
#[command(name = "resname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Path to the config file with named formats.
    #[arg(long, global = true, env = "RESNAME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a format and list its variables.
    Check(format::CheckCommand),

    /// Extend a format with more segments.
    Append(format::AppendCommand),

    /// List named formats from the config file.
    Formats,

    /// Parse a name against a format and print the bound UUIDs.
    Parse(name::ParseCommand),

    /// Render a name from a format and VAR=UUID bindings.
    Render(name::RenderCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        let ctx = CommandContext {
            config,
            output: self.output,
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Append(cmd) => cmd.run(&ctx),
            Commands::Formats => format::list(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Render(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub output: OutputFormat,
}
