//! Directory port resolving actor identifiers to roles.

use crate::actor::domain::{Actor, ActorId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for actor directory operations.
pub type ActorDirectoryResult<T> = Result<T, ActorDirectoryError>;

/// Read-only view of the identities known to the session provider.
#[async_trait]
pub trait ActorDirectory: Send + Sync {
    /// Finds an actor by identifier.
    ///
    /// Returns `None` when the identifier is unknown.
    async fn find_by_id(&self, id: &ActorId) -> ActorDirectoryResult<Option<Actor>>;

    /// Returns every known actor in registration order.
    async fn list(&self) -> ActorDirectoryResult<Vec<Actor>>;
}

/// Errors returned by actor directory implementations.
#[derive(Debug, Clone, Error)]
pub enum ActorDirectoryError {
    /// Backing-store failure.
    #[error("directory error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActorDirectoryError {
    /// Wraps a backing-store error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
