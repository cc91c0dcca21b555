//! Error severity shared by every Todo Lists crate
//!
//! Each crate defines its own `thiserror` enum and classifies its variants with
//! [`Severity`], so the web layer can pick a log level and the CLI an exit path
//! without knowing the concrete error type.

/// Severity levels for error classification
///
/// - **Warning**: the request could not be honoured as sent, but nothing is
///   broken. Bad user input, unknown ids.
/// - **Error**: an operation failed but the server keeps serving other requests.
/// - **Critical**: the server cannot keep working, e.g. the session directory
///   is unwritable.
///
/// # Examples
///
/// ```rust
/// use todo_lists_common::ErrorSeverity;
///
/// let unknown_list = ErrorSeverity::Warning;
/// let broken_store = ErrorSeverity::Critical;
/// assert!(broken_store > unknown_list);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but system can continue
    Error,

    /// System cannot continue, requires immediate attention
    Critical,
}

impl ErrorSeverity {
    /// Lowercase label used in log fields
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
            ErrorSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for error types that have severity levels
///
/// # Example
///
/// ```rust
/// use todo_lists_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum StoreError {
///     Corrupted,
///     Missing,
/// }
///
/// impl Severity for StoreError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             StoreError::Corrupted => ErrorSeverity::Critical,
///             StoreError::Missing => ErrorSeverity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(StoreError::Corrupted.severity(), ErrorSeverity::Critical);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "warning");
        assert_eq!(ErrorSeverity::Error.to_string(), "error");
        assert_eq!(ErrorSeverity::Critical.to_string(), "critical");
    }
}
