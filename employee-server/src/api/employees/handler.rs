//! Employee API Handlers

use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde_json::{Map, Value};
use shared::models::{Employee, EmployeeCreate};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

const DEFAULT_LIMIT: i64 = 20;
const DEFAULT_OFFSET: i64 = 0;

/// Raw paging parameters; anything unusable falls back to the defaults
#[derive(Debug, Default)]
pub struct ListQuery {
    limit: Option<String>,
    offset: Option<String>,
}

impl ListQuery {
    /// Keep the first value of each key, like `URLSearchParams.get`
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    fn page(&self) -> (i64, i64) {
        let limit = self
            .limit
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = self
            .offset
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v >= 0)
            .unwrap_or(DEFAULT_OFFSET);
        (limit, offset)
    }
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::invalid_request(format!("invalid id \"{raw}\"")))
}

/// List active employees, newest first
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<Employee>>> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unparseable query string, using default paging");
            Vec::new()
        }
    };
    let (limit, offset) = ListQuery::from_pairs(pairs).page();
    let employees = state.employees.list(limit, offset).await?;
    Ok(ApiResponse::list(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Employee>> {
    let id = parse_id(&id)?;
    let employee = state.employees.get(id).await?;
    Ok(ApiResponse::ok(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    body: Body,
) -> AppResult<ApiResponse<Employee>> {
    let payload: EmployeeCreate = state.decoder.decode_body(body, false).await?;
    let employee = state.employees.create(payload).await?;
    Ok(ApiResponse::ok(employee))
}

/// Partially update an employee from an arbitrary JSON object
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Body,
) -> AppResult<ApiResponse<Employee>> {
    let id = parse_id(&id)?;
    let fields: Map<String, Value> = state.decoder.decode_body(body, false).await?;
    let employee = state.employees.update(id, fields).await?;
    Ok(ApiResponse::ok(employee))
}

/// Soft delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id)?;
    state.employees.delete(id).await?;
    Ok(ApiResponse::empty())
}
