//! Server State

use std::sync::Arc;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, EmployeeStore};
use crate::services::EmployeeService;
use crate::utils::{AppError, JsonDecoder};

/// State shared by every HTTP handler
///
/// Cheap to clone; the connection pool lives behind the store.
#[derive(Clone)]
pub struct ServerState {
    pub employees: EmployeeService,
    pub decoder: JsonDecoder,
}

impl ServerState {
    /// Build state over an arbitrary store
    pub fn new(store: Arc<dyn EmployeeStore>, decoder: JsonDecoder) -> Self {
        Self {
            employees: EmployeeService::new(store),
            decoder,
        }
    }

    /// Connect to PostgreSQL, run migrations and wire the services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database).await?;
        let store = Arc::new(EmployeeRepository::new(db.pool));
        Ok(Self::new(store, JsonDecoder::default()))
    }
}
