//! Test helpers: an in-memory store and a router wired over it

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Duration, Utc};
use employee_server::db::repository::ColumnValue;
use employee_server::{
    EmployeeChanges, EmployeeColumn, EmployeeService, EmployeeStore, JsonDecoder, RepoError,
    RepoResult, ServerState, build_app,
};
use http::{Request, Response};
use shared::models::{Employee, EmployeeCreate};
use tower::ServiceExt;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Inner {
    /// Strictly increasing clock so consecutive mutations are ordered
    fn now(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_timestamp
            && now <= last
        {
            now = last + Duration::microseconds(1);
        }
        self.last_timestamp = Some(now);
        now
    }

    fn active_mut(&mut self, id: i64) -> RepoResult<&mut Employee> {
        self.rows
            .get_mut(&id)
            .filter(|e| e.deleted_at.is_none())
            .ok_or(RepoError::NotFound(id))
    }
}

/// In-memory [`EmployeeStore`] with the same soft-delete rules as PostgreSQL
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    fail: Arc<Mutex<bool>>,
    list_delay: Arc<Mutex<Option<std::time::Duration>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a storage error
    pub fn fail_all(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Make `list` stall before answering
    pub fn delay_list(&self, delay: std::time::Duration) {
        *self.list_delay.lock().unwrap() = Some(delay);
    }

    /// Raw row, including soft-deleted ones
    pub fn raw(&self, id: i64) -> Option<Employee> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    fn check(&self) -> RepoResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(RepoError::Database("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let now = inner.now();
        inner.next_id += 1;
        let employee = Employee {
            id: inner.next_id,
            name: data.name,
            position: data.position,
            salary: data.salary,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Employee> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.active_mut(id).map(|e| e.clone())
    }

    async fn update(&self, id: i64, changes: EmployeeChanges) -> RepoResult<Employee> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if changes.is_empty() {
            return inner.active_mut(id).map(|e| e.clone());
        }
        inner.active_mut(id)?;
        let now = inner.now();
        let employee = inner.active_mut(id)?;
        for (column, value) in changes.iter() {
            match (column, value) {
                (EmployeeColumn::Name, ColumnValue::Text(v)) => employee.name = v.clone(),
                (EmployeeColumn::Position, ColumnValue::Text(v)) => employee.position = v.clone(),
                (EmployeeColumn::Salary, ColumnValue::Integer(v)) => employee.salary = *v,
                (column, value) => panic!("{column} cannot hold {value:?}"),
            }
        }
        employee.updated_at = now;
        Ok(employee.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.active_mut(id)?;
        let now = inner.now();
        let employee = inner.active_mut(id)?;
        employee.deleted_at = Some(now);
        employee.updated_at = now;
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Employee>> {
        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .rev()
            .filter(|e| e.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

pub fn service(store: &MemoryStore) -> EmployeeService {
    EmployeeService::new(Arc::new(store.clone()))
}

pub fn app(store: &MemoryStore) -> Router {
    app_with_decoder(store, JsonDecoder::default())
}

pub fn app_with_decoder(store: &MemoryStore, decoder: JsonDecoder) -> Router {
    let state = ServerState::new(Arc::new(store.clone()), decoder);
    build_app(state, std::time::Duration::from_secs(30))
}

pub fn app_with_timeout(store: &MemoryStore, timeout: std::time::Duration) -> Router {
    let state = ServerState::new(Arc::new(store.clone()), JsonDecoder::default());
    build_app(state, timeout)
}

/// Drive one request through the router in-process
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (u16, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(http::header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
