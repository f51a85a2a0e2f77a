//! HTTP responder for the HA web app.
//!
//! Serves a greeting naming the instance that answered and a liveness probe
//! for orchestrators, with structured logging (tracing) around every request.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use identity::{HostResolver, SystemHostResolver};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub resolver: Arc<dyn HostResolver>,
}

impl AppState {
    pub fn new(resolver: impl HostResolver + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
///
/// Unknown paths fall through to axum's default 404.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::greeting::index))
        .route("/health", get(routes::health::check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the production state, reporting the operating system host name.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::new(SystemHostResolver::new()))
}

/// Serves `app` on `listener` until `shutdown` completes, then drains
/// in-flight connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
