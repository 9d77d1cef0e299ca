//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - DTOs: the menu form schema and its validation
//! - Ports: interfaces to external systems (persistence)
//! - Services: the menu item submission use case

pub mod dto;
pub mod ports;
pub mod services;
