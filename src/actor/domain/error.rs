//! Error types for actor domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing actor domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActorDomainError {
    /// The actor identifier is empty after trimming.
    #[error("actor identifier must not be empty")]
    EmptyActorId,
}

/// Error returned while parsing roles from configuration or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
