use sqlx::SqlitePool;

use crate::core::{Config, ServerError};
use crate::db::DbService;
use crate::services::StaticMapService;

/// Server state - shared handles for all request handlers
///
/// Cloning is shallow: the pool and services are reference-counted
/// internally, so handlers receive cheap copies through axum's `State`.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite database service
    pub db: DbService,
    /// Static map preview URL builder
    pub static_map: StaticMapService,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Creates the work directory layout, opens the database (running
    /// migrations) and wires up the static map service.
    pub async fn initialize(config: &Config) -> Result<Self, ServerError> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        let static_map = StaticMapService::new(&config.maps_static_url, &config.maps_api_key);

        Ok(Self {
            config: config.clone(),
            db,
            static_map,
        })
    }

    /// Build a state around an existing database service
    ///
    /// Used by tests that run against an in-memory database.
    pub fn with_db(config: Config, db: DbService) -> Self {
        let static_map = StaticMapService::new(&config.maps_static_url, &config.maps_api_key);
        Self {
            config,
            db,
            static_map,
        }
    }

    /// Connection pool shortcut for the repository layer
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
