//! Error types for format parsing and name conversion.

use thiserror::Error;

/// Errors that can occur when parsing formats or converting names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The format string violates the segment grammar.
    #[error("invalid format '{format}': {reason}")]
    FormatInvalid { format: String, reason: String },

    /// The name does not conform to the format it was checked against.
    #[error("invalid name '{name}' for format '{format}': {reason}")]
    NameInvalid {
        name: String,
        format: String,
        reason: String,
    },

    /// Rendering was attempted without a value for a required variable.
    #[error("missing value for variable '{variable}'")]
    MissingVariable { variable: String },
}

impl FormatError {
    pub(crate) fn format_invalid(format: &str, reason: impl Into<String>) -> Self {
        FormatError::FormatInvalid {
            format: format.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn name_invalid(
        name: &str,
        format: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        FormatError::NameInvalid {
            name: name.to_string(),
            format: format.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if the format string itself was rejected.
    pub fn is_format_invalid(&self) -> bool {
        matches!(self, FormatError::FormatInvalid { .. })
    }

    /// Returns true if a name was rejected against a format.
    pub fn is_name_invalid(&self) -> bool {
        matches!(self, FormatError::NameInvalid { .. })
    }

    /// Returns true if rendering lacked a required variable.
    pub fn is_missing_variable(&self) -> bool {
        matches!(self, FormatError::MissingVariable { .. })
    }
}
