//! Delivery Zone Server
//!
//! Edge service that stores per-store delivery zones and answers
//! postcode-containment queries for other services.
//!
//! # Module structure
//!
//! ```text
//! zone-server/src/
//! ├── core/          # Configuration, state, HTTP server
//! ├── geo/           # Viewport fitting and containment geometry
//! ├── db/            # SQLite storage layer
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # Static map preview URLs
//! └── utils/         # Logging, validation, error types
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod geo;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use geo::containment::{generate_circle_polygon, haversine_distance_m, is_inside};
pub use geo::viewport::{bounds, calculate_zoom, center};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResult};

/// Set up the process environment: .env file and logging.
///
/// Call once at startup, before loading [`Config`].
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
