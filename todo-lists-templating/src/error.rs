//! Error types for template operations

use thiserror::Error;
use todo_lists_common::{ErrorSeverity, Severity};

/// Result type for templating operations
pub type Result<T> = std::result::Result<T, TemplatingError>;

/// Errors raised while building the engine or rendering a view
#[derive(Debug, Error)]
pub enum TemplatingError {
    /// Template source failed to parse
    #[error("Template parse error in '{name}': {message}")]
    Parse { name: String, message: String },

    /// Rendering failed, e.g. a variable the template needs is missing
    #[error("Template render error in '{name}': {message}")]
    Render { name: String, message: String },

    /// No template registered under this name
    #[error("Template '{0}' not found")]
    NotFound(String),

    /// Context value could not be converted to a liquid object
    #[error("Template context error: {0}")]
    Context(String),
}

impl Severity for TemplatingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Built-in templates are compiled at startup; a parse failure means
            // the binary itself is broken
            TemplatingError::Parse { .. } => ErrorSeverity::Critical,
            TemplatingError::Render { .. }
            | TemplatingError::NotFound(_)
            | TemplatingError::Context(_) => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templating_error_severity() {
        let parse = TemplatingError::Parse {
            name: "lists".to_string(),
            message: "unexpected end".to_string(),
        };
        assert_eq!(parse.severity(), ErrorSeverity::Critical);
        assert_eq!(
            TemplatingError::NotFound("x".to_string()).severity(),
            ErrorSeverity::Error
        );
    }
}
