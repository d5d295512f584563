//! Employee Server - CRUD HTTP API for the employee resource
//!
//! # Module layout
//!
//! ```text
//! employee-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── api/           # routes and handlers
//! ├── services/      # validation and sanitization
//! ├── db/            # connection pool, storage port, PostgreSQL repository
//! └── utils/         # request decoding, logging
//! ```
//!
//! Request flow: handler → decoder → service → repository.

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use api::build_app;
pub use core::{Config, Server, ServerState};
pub use db::repository::{EmployeeChanges, EmployeeColumn, EmployeeStore, RepoError, RepoResult};
pub use services::{EmployeeService, ServiceError};
pub use utils::logger::init_logger;
pub use utils::{ApiResponse, AppError, AppResult, DecodeError, ErrorCode, JsonDecoder};
