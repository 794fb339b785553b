//! Shared types for the delivery zone service
//!
//! Data models exchanged between zone-server and API consumers.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
