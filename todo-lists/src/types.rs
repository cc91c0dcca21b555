//! Core types: TodoList, Todo and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an identifier received from a request path or storage
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::from_string(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::from_string(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Opaque identifier of a todo list
    ListId
);

opaque_id!(
    /// Opaque identifier of a todo, unique within its list
    TodoId
);

/// Anything that is displayed and ordered by its title
pub trait Titled {
    /// The user-facing title
    fn title(&self) -> &str;
}

/// A titled item with a completion flag, owned by exactly one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, incomplete todo with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            completed: false,
        }
    }
}

impl Titled for Todo {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A named, ordered collection of todos
///
/// `todos` keeps insertion order; display order is computed with
/// [`crate::sort_items`] and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Create a new, empty list with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Append a new todo and return a reference to it
    pub fn add_todo(&mut self, title: impl Into<String>) -> &Todo {
        self.todos.push(Todo::new(title));
        let index = self.todos.len() - 1;
        &self.todos[index]
    }
}

impl Titled for TodoList {
    fn title(&self) -> &str {
        &self.title
    }
}
