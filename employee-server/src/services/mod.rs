//! Service layer
//!
//! Validation and sanitization between the HTTP handlers and the storage port.

pub mod employee;

pub use employee::{EmployeeService, ServiceError, ServiceResult};
