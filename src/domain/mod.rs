//! Domain layer - Core menu types with no external dependencies
//!
//! This layer contains:
//! - Entities: MenuItem
//! - Value Objects: strongly-typed identifiers

pub mod entities;
pub mod value_objects;
