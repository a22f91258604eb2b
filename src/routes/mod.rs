//! API routes

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::conversation::Message;
use crate::core::ResponderError;
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub messages: Vec<Message>,
}

/// Failure surfaced to HTTP clients
pub struct ApiError(ResponderError);

impl From<ResponderError> for ApiError {
    fn from(err: ResponderError) -> Self {
        Self(err)
    }
}

/// Upstream details stay in the server log; clients get a fixed message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("chat failed: {}", self.0);
        let body = Json(json!({ "error": "Completion request failed" }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: state.responder.model().to_string(),
    })
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let messages = state.responder.respond(request.messages).await?;

    Ok(Json(ChatResponse { messages }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
}
