//! Actor identity for Ember.
//!
//! An actor is the authenticated identity performing an operation. The
//! session provider that authenticates actors is external; this module only
//! models the identity values and the directory port used to resolve roles.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
