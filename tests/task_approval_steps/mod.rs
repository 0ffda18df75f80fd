//! Step definitions for task approval behaviour scenarios.

pub mod then;
pub mod world;
