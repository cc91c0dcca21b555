//! Liquid templating for the Todo Lists HTML views
//!
//! The engine compiles every page once at construction; handlers render pages
//! by name with a serializable context.
//!
//! ```rust
//! use todo_lists_templating::TemplateEngine;
//!
//! let engine = TemplateEngine::builtin()?;
//! let html = engine.render_serialized(
//!     "new_list",
//!     &serde_json::json!({"page_title": "New List", "flashes": [], "title": ""}),
//! )?;
//! assert!(html.contains("list_title"));
//! # Ok::<(), todo_lists_templating::TemplatingError>(())
//! ```
//!
//! User-supplied text is escaped in the templates with liquid's `escape` filter;
//! values passed in the context are inserted as given.

mod engine;
mod error;
pub mod partials;

pub use engine::TemplateEngine;
pub use error::{Result, TemplatingError};
pub use partials::{BuiltinTemplates, TemplateContentProvider};
