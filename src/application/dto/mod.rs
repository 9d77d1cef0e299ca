//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! deserialize without pulling serde into the domain model.

pub mod menu_form;

pub use menu_form::*;
