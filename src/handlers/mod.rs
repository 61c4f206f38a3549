//! HTTP handlers for entity types.

pub mod entity_type;
pub use entity_type::*;
