//! AI components

pub mod archetypes;

// Re-export all components
pub use archetypes::*;
