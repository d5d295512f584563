//! Repository Module
//!
//! The storage port ([`EmployeeStore`]) and its PostgreSQL implementation.
//! Every query is scoped to active rows (`deleted_at IS NULL`).

pub mod changes;
pub mod employee;

// Re-exports
pub use changes::{ColumnValue, EmployeeChanges, EmployeeColumn};
pub use employee::EmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeCreate};
use thiserror::Error;

/// Repository error types
///
/// Storage failures stay opaque: callers only learn that the store failed.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Employee {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage port for the employee entity
///
/// Implementations must be callable concurrently; each operation maps to a
/// single atomic statement.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert a new row; timestamps are assigned here
    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee>;

    /// Fetch the active row with this id
    async fn find_by_id(&self, id: i64) -> RepoResult<Employee>;

    /// Apply `changes` plus a fresh `updated_at` to the active row
    ///
    /// Empty changes behave like [`EmployeeStore::find_by_id`].
    async fn update(&self, id: i64, changes: EmployeeChanges) -> RepoResult<Employee>;

    /// Soft delete the active row
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Active rows, newest id first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Employee>>;
}
