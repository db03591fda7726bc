//! Name commands.

use anyhow::Result;
use clap::Args;
use resname_format::{Uuid, Uuids};
use tracing::info;

use crate::error::CliError;
use crate::output::{print_field, print_json, OutputFormat};

use super::CommandContext;

/// Parse a name.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Format string or configured format name.
    format: String,

    /// Name to parse, e.g. `users/78da9161-aef1-49ed-bc92-0f136c95308f`.
    name: String,
}

/// Render a name.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Format string or configured format name.
    format: String,

    /// Variable bindings as VAR=UUID.
    #[arg(value_parser = parse_assignment)]
    bindings: Vec<(String, Uuid)>,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let format = ctx.config.resolve(&self.format)?;
        let uuids = format.parse(&self.name)?;
        info!(format = %format, variables = uuids.len(), "name parsed");

        match ctx.output {
            OutputFormat::Json => print_json(&uuids),
            OutputFormat::Text => {
                for (name, uuid) in &uuids {
                    print_field(name, &uuid.to_string());
                }
            }
        }
        Ok(())
    }
}

impl RenderCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let format = ctx.config.resolve(&self.format)?;
        let uuids: Uuids = self.bindings.into_iter().collect();
        let name = format.render(&uuids)?;
        info!(format = %format, name = %name, "name rendered");

        match ctx.output {
            OutputFormat::Json => print_json(&serde_json::json!({ "name": name })),
            OutputFormat::Text => println!("{}", name),
        }
        Ok(())
    }
}

/// Parse a `VAR=UUID` binding.
fn parse_assignment(s: &str) -> Result<(String, Uuid), CliError> {
    let invalid = || CliError::InvalidAssignment(s.to_string());

    let (var, value) = s.split_once('=').ok_or_else(invalid)?;
    if var.is_empty() {
        return Err(invalid());
    }
    let uuid = Uuid::parse_str(value).map_err(|_| invalid())?;

    Ok((var.to_string(), uuid))
}

#[cfg(test)]
mod tests {
    use resname_format::{parse_format, FormatError};

    use super::*;
    use crate::config::Config;

    const UUID: &str = "78da9161-aef1-49ed-bc92-0f136c95308f";

    fn context() -> CommandContext {
        let mut config = Config::default();
        config
            .formats
            .insert("user".to_string(), parse_format("users/{user}").unwrap());
        CommandContext {
            config,
            output: OutputFormat::Text,
        }
    }

    #[test]
    fn test_parse_named_format() {
        let cmd = ParseCommand {
            format: "user".to_string(),
            name: format!("users/{}", UUID),
        };
        assert!(cmd.run(&context()).is_ok());
    }

    #[test]
    fn test_parse_malformed_name() {
        let cmd = ParseCommand {
            format: "user".to_string(),
            name: "users/not-a-uuid".to_string(),
        };
        let err = cmd.run(&context()).unwrap_err();
        assert!(err
            .downcast_ref::<FormatError>()
            .is_some_and(|e| e.is_name_invalid()));
    }

    #[test]
    fn test_render_literal_format() {
        let cmd = RenderCommand {
            format: "stores/{store}/settings".to_string(),
            bindings: vec![("store".to_string(), Uuid::parse_str(UUID).unwrap())],
        };
        assert!(cmd.run(&context()).is_ok());
    }

    #[test]
    fn test_render_missing_variable() {
        let cmd = RenderCommand {
            format: "user".to_string(),
            bindings: vec![],
        };
        let err = cmd.run(&context()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FormatError>(),
            Some(&FormatError::MissingVariable {
                variable: "user".to_string()
            })
        );
    }

    #[test]
    fn test_parse_assignment() {
        let (var, uuid) = parse_assignment("store=78da9161-aef1-49ed-bc92-0f136c95308f").unwrap();
        assert_eq!(var, "store");
        assert_eq!(uuid.to_string(), "78da9161-aef1-49ed-bc92-0f136c95308f");
    }

    #[test]
    fn test_parse_assignment_rejects_malformed() {
        for bad in ["store", "=78da9161-aef1-49ed-bc92-0f136c95308f", "store=nope"] {
            assert!(
                matches!(parse_assignment(bad), Err(CliError::InvalidAssignment(_))),
                "accepted {:?}",
                bad
            );
        }
    }
}
