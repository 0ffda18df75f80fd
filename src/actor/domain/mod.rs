//! Domain model for actors and their roles.

mod actor;
mod error;
mod role;

pub use actor::{Actor, ActorId};
pub use error::{ActorDomainError, ParseRoleError};
pub use role::Role;
