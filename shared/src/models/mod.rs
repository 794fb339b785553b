//! Data models
//!
//! Shared between zone-server and API consumers. Coordinates travel as
//! `[lat, lng]` pairs on the wire.

pub mod geo;
pub mod postcode;
pub mod zone;

// Re-exports
pub use geo::*;
pub use postcode::*;
pub use zone::*;
