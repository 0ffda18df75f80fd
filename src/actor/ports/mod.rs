//! Port contracts for actor identity lookup.

pub mod directory;

pub use directory::{ActorDirectory, ActorDirectoryError, ActorDirectoryResult};
