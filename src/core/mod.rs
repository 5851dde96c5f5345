//! Shared codec engine: tagged values, schema tables, and the
//! encode/decode algorithms every object kind reuses.
//!
//! - [`PropKind`] / [`PropValue`] - per-key value shapes and their slot codec
//! - [`SchemaEntry`] / [`PropertySet`] - fixed key tables and the engine
//! - [`AdditionalProperties`] - ordered passthrough for unrecognized keys

mod additional;
mod schema;
mod value;

pub use additional::AdditionalProperties;
pub use schema::{format_set, PropertySet, SchemaEntry};
pub use value::{PropKind, PropValue};
