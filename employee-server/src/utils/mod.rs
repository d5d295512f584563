//! Utilities: error re-exports, logging and request body decoding

pub mod decoder;
pub mod logger;

// Re-export the unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use shared::response::ApiResponse;

pub use decoder::{DecodeError, JsonDecoder};
