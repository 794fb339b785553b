use std::path::{Path, PathBuf};

/// Server configuration - all settings of the zone service
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/zone-server | working directory (database, logs) |
/// | HTTP_PORT | 8081 | HTTP API port |
/// | DATABASE_PATH | <WORK_DIR>/database/zones.db | SQLite database file |
/// | ENVIRONMENT | development | runtime environment |
/// | MAPS_API_KEY | (empty) | static map provider API key |
/// | MAPS_STATIC_URL | https://maps.googleapis.com/maps/api/staticmap | static map endpoint |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (milliseconds) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/zones HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file; defaults to `<work_dir>/database/zones.db`
    pub database_path: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Static map provider API key
    pub maps_api_key: String,
    /// Static map endpoint base URL
    pub maps_static_url: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/zone-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            database_path: std::env::var("DATABASE_PATH").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            maps_api_key: std::env::var("MAPS_API_KEY").unwrap_or_default(),
            maps_static_url: std::env::var("MAPS_STATIC_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api/staticmap".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override work dir and port on top of the environment
    ///
    /// Commonly used in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Resolved database file path
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => Path::new(&self.work_dir).join("database").join("zones.db"),
        }
    }

    /// Create the work directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        let work_dir = Path::new(&self.work_dir);
        std::fs::create_dir_all(work_dir.join("database"))?;
        std::fs::create_dir_all(work_dir.join("logs"))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
