//! Service layer

pub mod staticmap;

pub use staticmap::StaticMapService;
