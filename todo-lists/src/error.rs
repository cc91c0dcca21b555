//! Error types for todo list operations

use thiserror::Error;
use todo_lists_common::{ErrorSeverity, Severity};

/// Upper bound, in characters, for list and todo titles
pub const MAX_TITLE_LENGTH: usize = 100;

/// Reasons a submitted title is rejected
///
/// The display strings are shown to the user verbatim as error notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Another list in the session already has exactly this title
    #[error("The title must be unique.")]
    DuplicateTitle,

    /// List title is empty or longer than the limit once trimmed
    #[error("The title must be between 1 and 100 characters.")]
    TitleLength,

    /// Todo title is empty or longer than the limit once trimmed
    #[error("Todo title must be between 1 and 100 characters.")]
    TodoTitleLength,
}

impl Severity for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        // Bad input is always recoverable by resubmitting the form
        ErrorSeverity::Warning
    }
}
