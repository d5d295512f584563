//! Shared types for the employee service
//!
//! Common types used by the server and its clients: the unified error
//! system, the JSON response envelope and the data models.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
