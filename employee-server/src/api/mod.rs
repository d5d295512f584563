//! HTTP API
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /health | liveness probe |
//! | GET / POST | /employees | list / create |
//! | GET / PUT / DELETE | /employees/{id} | get / update / delete |

pub mod employees;
pub mod health;

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use http::{Method, header};
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

/// Assemble every route plus the HTTP middleware stack
pub fn build_app(state: ServerState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .layer(middleware)
        .with_state(state)
}

/// Turn middleware failures into the JSON error envelope
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::new(ErrorCode::TimeoutError)
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}
