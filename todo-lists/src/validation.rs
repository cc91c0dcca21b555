//! Title validation for lists and todos
//!
//! Callers trim the submitted value before validating; the length checks trim
//! again so untrimmed input is still judged by its visible content.

use crate::error::{ValidationError, MAX_TITLE_LENGTH};
use crate::types::TodoList;

fn has_valid_length(title: &str) -> bool {
    let length = title.trim().chars().count();
    (1..=MAX_TITLE_LENGTH).contains(&length)
}

/// Validate a list title against the lists already in the session
///
/// The uniqueness check is an exact, case-sensitive comparison and runs before
/// the length check.
pub fn validate_list_title(title: &str, lists: &[TodoList]) -> Option<ValidationError> {
    if lists.iter().any(|list| list.title == title) {
        Some(ValidationError::DuplicateTitle)
    } else if !has_valid_length(title) {
        Some(ValidationError::TitleLength)
    } else {
        None
    }
}

/// Validate a todo title
pub fn validate_todo_title(title: &str) -> Option<ValidationError> {
    if has_valid_length(title) {
        None
    } else {
        Some(ValidationError::TodoTitleLength)
    }
}
