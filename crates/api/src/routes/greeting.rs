//! Greeting endpoint reporting which instance answered.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use identity::HostName;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;

pub const GREETING_MESSAGE: &str = "Hello from the HA Web App!";

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub server: HostName,
    pub status: &'static str,
}

/// GET / — greets the caller and names the serving host.
///
/// The host is resolved on every request. Resolution failures surface as
/// 500 rather than a response with a blank `server`.
#[tracing::instrument(skip(state))]
pub async fn index(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let server = state.resolver.resolve()?;
    tracing::debug!(host = %server, "resolved serving host");

    Ok(Json(GreetingResponse {
        message: GREETING_MESSAGE,
        server,
        status: "healthy",
    }))
}
