//! In-memory actor directory for tests and single-process deployments.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::actor::{
    domain::{Actor, ActorId},
    ports::{ActorDirectory, ActorDirectoryError, ActorDirectoryResult},
};

/// Thread-safe in-memory actor directory.
///
/// Registering an identifier twice replaces the earlier entry in place, so
/// listing order stays the order of first registration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActorDirectory {
    actors: Arc<RwLock<Vec<Actor>>>,
}

impl InMemoryActorDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with the given actors.
    #[must_use]
    pub fn with_actors(actors: impl IntoIterator<Item = Actor>) -> Self {
        let mut registered = Vec::new();
        for actor in actors {
            upsert(&mut registered, actor);
        }
        Self {
            actors: Arc::new(RwLock::new(registered)),
        }
    }

    /// Registers or replaces an actor.
    ///
    /// # Errors
    ///
    /// Returns [`ActorDirectoryError::Persistence`] when the lock is poisoned.
    pub fn register(&self, actor: Actor) -> ActorDirectoryResult<()> {
        let mut actors = self.actors.write().map_err(|err| {
            ActorDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        upsert(&mut actors, actor);
        Ok(())
    }
}

fn upsert(actors: &mut Vec<Actor>, actor: Actor) {
    if let Some(existing) = actors.iter_mut().find(|known| known.id() == actor.id()) {
        *existing = actor;
    } else {
        actors.push(actor);
    }
}

#[async_trait]
impl ActorDirectory for InMemoryActorDirectory {
    async fn find_by_id(&self, id: &ActorId) -> ActorDirectoryResult<Option<Actor>> {
        let actors = self.actors.read().map_err(|err| {
            ActorDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(actors.iter().find(|actor| actor.id() == id).cloned())
    }

    async fn list(&self) -> ActorDirectoryResult<Vec<Actor>> {
        let actors = self.actors.read().map_err(|err| {
            ActorDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(actors.clone())
    }
}
