use crate::error::ServerError;
use crate::handlers;
use crate::session::session_cookie_layer;
use crate::state::AppState;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use todo_lists_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// Every route except `/health` runs behind the session cookie layer.
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/lists",
            get(handlers::list_lists).post(handlers::create_list),
        )
        .route("/lists/new", get(handlers::new_list_form))
        .route(
            "/lists/:list_id",
            get(handlers::show_list).post(handlers::update_list),
        )
        .route("/lists/:list_id/edit", get(handlers::edit_list_form))
        .route("/lists/:list_id/delete", post(handlers::delete_list))
        .route("/lists/:list_id/complete_all", post(handlers::complete_all))
        .route("/lists/:list_id/todos", post(handlers::create_todo))
        .route(
            "/lists/:list_id/todos/:todo_id/toggle",
            post(handlers::toggle_todo),
        )
        .route(
            "/lists/:list_id/todos/:todo_id/delete",
            post(handlers::delete_todo),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_cookie_layer,
        ));

    app.route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    tracing::debug!("Binding to socket address: {}", addr);
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Start the server in a background task
///
/// Pass port 0 to let the OS pick one; the returned address is the one
/// actually bound. Abort the handle to stop the server.
pub async fn start_server(
    state: AppState,
    addr: SocketAddr,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), ServerError> {
    let listener = bind(addr).await?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?;
    let router = build_router(state);

    tracing::info!("Todo Lists HTTP server listening on http://{}", local_addr);

    let server_task = tokio::spawn(async move {
        tracing::debug!("HTTP server task started");
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("HTTP server error: {}", e);
        }
        tracing::debug!("HTTP server task exiting");
    });

    Ok((local_addr, server_task))
}

/// Serve until interrupted with Ctrl-C
pub async fn run(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let state = AppState::from_config(&config.session).await?;
    let listener = bind(addr).await?;

    tracing::info!("Todo Lists HTTP server listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Todo Lists HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Health check handler for the /health endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let response = health_check().await;
        assert_eq!(response, "OK");
    }

    #[tokio::test]
    async fn test_start_server_with_random_port() {
        let state = AppState::from_config(&Default::default()).await.unwrap();
        let (addr, handle) = start_server(state, "127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        assert!(addr.port() > 0);

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("OK"));

        handle.abort();
    }
}
