//! Employee service
//!
//! Trims and validates input, applies the column allow-list to partial
//! updates and translates repository errors into service errors.

use std::sync::Arc;

use serde_json::{Map, Number, Value};
use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeCreate};
use thiserror::Error;

use crate::db::repository::{EmployeeChanges, EmployeeColumn, EmployeeStore, RepoError};

/// Service-layer error
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rejected input; the message is shown to the client
    #[error("{0}")]
    Validation(String),

    #[error("employee not found")]
    NotFound,

    /// Storage failure; detail stays in the logs
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    fn validation(msg: impl Into<String>) -> Self {
        ServiceError::Validation(msg.into())
    }
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => ServiceError::NotFound,
            RepoError::Database(msg) => ServiceError::Storage(msg),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::validation(msg),
            ServiceError::NotFound => AppError::new(ErrorCode::EmployeeNotFound),
            ServiceError::Storage(msg) => AppError::database(msg),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Employee use cases over an [`EmployeeStore`]
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a new employee
    pub async fn create(&self, mut data: EmployeeCreate) -> ServiceResult<Employee> {
        data.name = data.name.trim().to_string();
        data.position = data.position.trim().to_string();

        if data.name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }
        if data.salary < 0 {
            return Err(ServiceError::validation("salary must be >= 0"));
        }

        let employee = self.store.create(data).await?;
        tracing::info!(id = employee.id, "Employee created");
        Ok(employee)
    }

    pub async fn get(&self, id: i64) -> ServiceResult<Employee> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Apply a partial update from an untyped JSON object
    ///
    /// Unknown keys are dropped; when nothing valid remains the current
    /// record is returned untouched.
    pub async fn update(&self, id: i64, fields: Map<String, Value>) -> ServiceResult<Employee> {
        if fields.is_empty() {
            return self.get(id).await;
        }

        let changes = sanitize_changes(&fields)?;
        if changes.is_empty() {
            tracing::debug!(id, "No updatable fields supplied");
            return self.get(id).await;
        }

        let employee = self.store.update(id, changes).await?;
        tracing::info!(id, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.store.delete(id).await?;
        tracing::info!(id, "Employee deleted");
        Ok(())
    }

    pub async fn list(&self, limit: i64, offset: i64) -> ServiceResult<Vec<Employee>> {
        Ok(self.store.list(limit, offset).await?)
    }
}

/// Filter raw fields through the column allow-list and coerce their values
fn sanitize_changes(fields: &Map<String, Value>) -> ServiceResult<EmployeeChanges> {
    let mut changes = EmployeeChanges::new();

    for (key, value) in fields {
        let Some(column) = EmployeeColumn::from_key(key) else {
            continue;
        };

        match column {
            EmployeeColumn::Name => {
                let Value::String(name) = value else {
                    return Err(ServiceError::validation("invalid type for name"));
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(ServiceError::validation("name cannot be empty"));
                }
                changes.set_name(name);
            }
            EmployeeColumn::Position => match value {
                Value::Null => changes.set_position(""),
                Value::String(position) => changes.set_position(position.trim()),
                _ => return Err(ServiceError::validation("invalid type for position")),
            },
            EmployeeColumn::Salary => match value {
                Value::Null => changes.set_salary(0),
                Value::Number(number) => changes.set_salary(coerce_salary(number)?),
                _ => return Err(ServiceError::validation("invalid type for salary")),
            },
        }
    }

    Ok(changes)
}

/// Integer salary from a JSON number, truncating fractions toward zero
fn coerce_salary(number: &Number) -> ServiceResult<i64> {
    if let Some(salary) = number.as_i64() {
        if salary < 0 {
            return Err(ServiceError::validation("salary must be >= 0"));
        }
        return Ok(salary);
    }
    if number.is_u64() {
        return Err(ServiceError::validation("salary is out of range"));
    }

    let salary = number.as_f64().unwrap_or(f64::NAN);
    if salary < 0.0 {
        return Err(ServiceError::validation("salary must be >= 0"));
    }
    // i64::MAX as f64 rounds up to 2^63
    if !salary.is_finite() || salary >= i64::MAX as f64 {
        return Err(ServiceError::validation("salary is out of range"));
    }
    Ok(salary.trunc() as i64)
}
