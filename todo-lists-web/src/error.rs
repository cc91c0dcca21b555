//! Error types for request handling and server startup

use crate::session::SessionError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::net::SocketAddr;
use thiserror::Error;
use todo_lists::{ListId, TodoId};
use todo_lists_common::{ErrorSeverity, Severity};
use todo_lists_config::ConfigError;
use todo_lists_templating::TemplatingError;

/// Errors a route handler can end with
#[derive(Debug, Error)]
pub enum WebError {
    /// No list with this id in the caller's session
    #[error("List not found")]
    ListNotFound(ListId),

    /// The list exists but holds no todo with this id
    #[error("Todo not found")]
    TodoNotFound(TodoId),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Template(#[from] TemplatingError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::ListNotFound(_) | WebError::TodoNotFound(_) => StatusCode::NOT_FOUND,
            WebError::Session(_) | WebError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Severity for WebError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            WebError::ListNotFound(_) | WebError::TodoNotFound(_) => ErrorSeverity::Warning,
            WebError::Session(e) => e.severity(),
            WebError::Template(e) => e.severity(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self.severity() {
            ErrorSeverity::Warning => match &self {
                WebError::ListNotFound(id) => tracing::debug!(list = %id, "{}", self),
                WebError::TodoNotFound(id) => tracing::debug!(todo = %id, "{}", self),
                _ => tracing::warn!("{}", self),
            },
            ErrorSeverity::Error => tracing::error!("Request failed: {}", self),
            ErrorSeverity::Critical => tracing::error!("Request failed (critical): {}", self),
        }

        let status = self.status();
        // Internal failures are not described to the client
        let description = if status == StatusCode::NOT_FOUND {
            self.to_string()
        } else {
            "Something went wrong.".to_string()
        };

        let body = Html(format!(
            "<!doctype html>\n<html lang=\"en\">\n  <head><title>{code}</title></head>\n  \
             <body>\n    <h1>{code}</h1>\n    <p>{description}</p>\n  </body>\n</html>\n",
            code = status.as_u16(),
        ));
        (status, body).into_response()
    }
}

/// Errors raised while setting up or running the HTTP server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplatingError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl Severity for ServerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ServerError::Template(e) => e.severity(),
            ServerError::Session(e) => e.severity(),
            ServerError::Config(e) => e.severity(),
            ServerError::Bind { .. } | ServerError::Serve(_) => ErrorSeverity::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_describes_missing_list() {
        let response = WebError::ListNotFound(ListId::from_string("nope")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("List not found"));
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_described() {
        let error = WebError::from(TemplatingError::NotFound("secret".to_string()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("secret"));
    }

    #[test]
    fn test_severity_follows_source() {
        assert_eq!(
            WebError::TodoNotFound(TodoId::from_string("x")).severity(),
            ErrorSeverity::Warning
        );
        let io = SessionError::Io(std::io::Error::other("disk"));
        assert_eq!(WebError::from(io).severity(), ErrorSeverity::Critical);
    }
}
