//! Geometry engine
//!
//! Pure functions over lat/lng rings: viewport fitting for map previews and
//! point-in-polygon containment. No I/O, no shared state; safe to call from
//! any number of request handlers concurrently.

pub mod containment;
pub mod viewport;
