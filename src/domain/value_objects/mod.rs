//! Value objects - Immutable domain concepts

mod ids;

pub use ids::MenuItemId;
