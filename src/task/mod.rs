//! Task lifecycle management for Ember.
//!
//! This module implements the task approval workflow of the training
//! dashboard: creating private or assigned tasks, deciding which tasks each
//! actor can see, moving tasks between `pending`, `awaiting_approval` and
//! `completed` under a two-party approval protocol, and keeping an
//! append-only comment thread. A worker cannot close assigned work on their
//! own; the creator approves or rejects it. A private task is closed directly
//! by its creator. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
