//! In-memory actor directory.

mod directory;

pub use directory::InMemoryActorDirectory;
