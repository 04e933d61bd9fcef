//! Forma Core Types
//!
//! This crate provides the foundational types used throughout Forma:
//! - Value types (the Value enum with all scalar and collection types)
//! - Attribute maps and the `attrs!` convenience macro
//! - Entity instances with persistence state and relation slots
//! - The create/update verb derived from persistence state

mod entity;
mod value;

pub use entity::*;
pub use value::*;
