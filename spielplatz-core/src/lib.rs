//! Core types, classification pipeline, and filter engine for the spielplatz playground finder.

/// Compiled-in reference data: bounding box, districts, equipment, and links.
pub mod catalog;
/// Conversion of raw geodata elements into classified playgrounds.
pub mod classify;
/// Filter predicates and district aggregation.
pub mod filter;
/// Domain models shared by sources and front ends.
pub mod model;
/// Traits describing the geodata source.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use catalog::*;
pub use classify::*;
pub use filter::*;
pub use model::*;
pub use ports::*;
pub use service::*;
