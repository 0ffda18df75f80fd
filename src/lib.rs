//! Ember: task approval workflow for a fire-safety training dashboard.
//!
//! This crate provides the task lifecycle engine behind the dashboard's task
//! board: who may see a task, who may move it through its approval states,
//! and who may assign it to whom.
//!
//! # Architecture
//!
//! Ember follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`actor`]: Authenticated identities, roles, and the actor directory
//! - [`config`]: Workflow policy (approver and assignable roles)
//! - [`task`]: Task creation, visibility, comments, and status transitions
//! - [`telemetry`]: Structured logging bootstrap

pub mod actor;
pub mod config;
pub mod task;
pub mod telemetry;
