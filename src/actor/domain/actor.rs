//! Actor identity values.

use super::{ActorDomainError, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an authenticated actor, as issued by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Creates a validated actor identifier.
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ActorDomainError::EmptyActorId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ActorDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ActorDomainError::EmptyActorId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An authenticated identity together with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    role: Role,
}

impl Actor {
    /// Creates an actor value.
    #[must_use]
    pub const fn new(id: ActorId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns the actor identifier.
    #[must_use]
    pub const fn id(&self) -> &ActorId {
        &self.id
    }

    /// Returns the actor role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
