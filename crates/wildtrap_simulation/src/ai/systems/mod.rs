//! AI systems (orchestrator + внешние хуки)

pub mod reset;
pub mod step;

// Re-export all systems
pub use reset::*;
pub use step::*;
