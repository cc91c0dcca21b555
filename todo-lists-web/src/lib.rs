//! HTTP front end for Todo Lists
//!
//! An axum application rendering liquid pages over per-client sessions.
//! Each client is identified by a session cookie; its lists and pending flash
//! messages live in a [`SessionStore`](session::SessionStore) chosen by
//! configuration.
//!
//! ```no_run
//! use todo_lists_config::ServerConfig;
//!
//! # async fn example() -> Result<(), todo_lists_web::ServerError> {
//! todo_lists_web::run(&ServerConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod handlers;
mod server;
pub mod session;
mod state;
mod views;

pub use error::{ServerError, WebError};
pub use server::{build_router, run, start_server};
pub use state::AppState;
