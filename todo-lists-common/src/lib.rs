//! # Todo Lists Common
//!
//! Foundational pieces shared across the Todo Lists workspace:
//!
//! - [`error`] - error severity classification implemented by every crate's error enum
//! - [`logging`] - helpers for formatting values inside `tracing` output

pub mod error;
pub mod logging;

pub use error::{ErrorSeverity, Severity};
pub use logging::Pretty;
