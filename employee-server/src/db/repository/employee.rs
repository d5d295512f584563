//! Employee Repository (PostgreSQL)

use super::{ColumnValue, EmployeeChanges, EmployeeStore, RepoError, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{Employee, EmployeeCreate};
use sqlx::{PgPool, Postgres, QueryBuilder};

const EMPLOYEE_COLUMNS: &str = "id, name, position, salary, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let now = Utc::now();
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (name, position, salary, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.position)
        .bind(data.salary)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = employee.id, "Employee inserted");
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Employee> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepoError::NotFound(id))
    }

    async fn update(&self, id: i64, changes: EmployeeChanges) -> RepoResult<Employee> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut query = build_update(id, &changes, Utc::now());
        let employee = query
            .build_query_as::<Employee>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(id))?;

        tracing::debug!(id, columns = changes.len(), "Employee updated");
        Ok(employee)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE employees SET deleted_at = $1, updated_at = $1 \
             WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        tracing::debug!(id, "Employee soft-deleted");
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE deleted_at IS NULL \
             ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }
}

/// Build the partial UPDATE for an active row
///
/// Column names come from the allow-list; every value is a bind parameter.
/// `updated_at` is always set, and is the last assignment.
fn build_update<'a>(
    id: i64,
    changes: &'a EmployeeChanges,
    now: DateTime<Utc>,
) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new("UPDATE employees SET ");

    let mut assignments = query.separated(", ");
    for (column, value) in changes.iter() {
        assignments.push(column.as_str());
        assignments.push_unseparated(" = ");
        match value {
            ColumnValue::Text(text) => assignments.push_bind_unseparated(text.as_str()),
            ColumnValue::Integer(number) => assignments.push_bind_unseparated(*number),
        };
    }
    assignments.push("updated_at = ");
    assignments.push_bind_unseparated(now);

    query
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" AND deleted_at IS NULL RETURNING ")
        .push(EMPLOYEE_COLUMNS);
    query
}
