//! Liveness probe

use axum::{Router, routing::get};
use shared::response::ApiResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

async fn health() -> ApiResponse<()> {
    ApiResponse::message("im alive")
}
