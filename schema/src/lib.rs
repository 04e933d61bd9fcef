//! Forma Schema
//!
//! Runtime schema lookup. Single source of truth for entity types, their
//! persisted fields, and their association descriptors. The schema is
//! immutable after construction via SchemaBuilder.

mod builder;
mod schema;
mod types;

pub use builder::{EntityBuilder, SchemaBuilder, SchemaError};
pub use schema::Schema;
pub use types::*;
