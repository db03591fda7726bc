//! Format commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::output::{print_field, print_json, print_success, OutputFormat};

use super::CommandContext;

/// Validate a format.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Format string or configured format name.
    format: String,
}

/// Append segments to a format.
#[derive(Debug, Args)]
pub struct AppendCommand {
    /// Base format string or configured format name.
    format: String,

    /// Text appended to the base format, e.g. `/products/{product}`.
    suffix: String,
}

#[derive(Debug, Serialize)]
struct FormatView {
    format: String,
    segments: usize,
    variables: Vec<String>,
}

impl FormatView {
    fn new(format: &resname_format::Format) -> Self {
        Self {
            format: format.to_string(),
            segments: format.len(),
            variables: format.variables().map(str::to_string).collect(),
        }
    }
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let format = ctx.config.resolve(&self.format)?;
        info!(format = %format, "format is valid");
        print_format(&FormatView::new(&format), ctx.output);
        Ok(())
    }
}

impl AppendCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let base = ctx.config.resolve(&self.format)?;
        let format = base.append(&self.suffix)?;
        info!(base = %base, format = %format, "format extended");
        print_format(&FormatView::new(&format), ctx.output);
        Ok(())
    }
}

fn print_format(view: &FormatView, output: OutputFormat) {
    match output {
        OutputFormat::Json => print_json(view),
        OutputFormat::Text => {
            print_success(&format!("valid format {}", view.format));
            print_field("segments", &view.segments.to_string());
            if view.variables.is_empty() {
                print_field("variables", "-");
            } else {
                print_field("variables", &view.variables.join(", "));
            }
        }
    }
}

/// List configured formats.
pub fn list(ctx: &CommandContext) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => print_json(&ctx.config.formats),
        OutputFormat::Text => {
            if ctx.config.formats.is_empty() {
                println!("No formats configured.");
            }
            for (name, format) in &ctx.config.formats {
                print_field(name, &format.to_string());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use resname_format::parse_format;

    use super::*;
    use crate::config::Config;
    use crate::error::CliError;

    fn context() -> CommandContext {
        let mut config = Config::default();
        config
            .formats
            .insert("store".to_string(), parse_format("stores/{store}").unwrap());
        CommandContext {
            config,
            output: OutputFormat::Json,
        }
    }

    #[test]
    fn test_check_named_format() {
        let cmd = CheckCommand {
            format: "store".to_string(),
        };
        assert!(cmd.run(&context()).is_ok());
    }

    #[test]
    fn test_check_invalid_format() {
        let cmd = CheckCommand {
            format: "stores/{store}/{store}".to_string(),
        };
        let err = cmd.run(&context()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Format(e)) if e.is_format_invalid()
        ));
    }

    #[test]
    fn test_append_to_named_format() {
        let cmd = AppendCommand {
            format: "store".to_string(),
            suffix: "/products/{product}".to_string(),
        };
        assert!(cmd.run(&context()).is_ok());
    }

    #[test]
    fn test_append_colliding_variable() {
        let cmd = AppendCommand {
            format: "store".to_string(),
            suffix: "/branches/{store}".to_string(),
        };
        let err = cmd.run(&context()).unwrap_err();
        assert!(err
            .downcast_ref::<resname_format::FormatError>()
            .is_some_and(|e| e.is_format_invalid()));
    }

    #[test]
    fn test_list_formats() {
        assert!(list(&context()).is_ok());
    }
}
