//! Domain model for the task approval workflow.
//!
//! The task domain models creation-time assignment rules, the status state
//! machine and its authorization table, visibility, and the append-only
//! comment thread, while keeping all infrastructure concerns outside of the
//! domain boundary.

mod access;
mod action;
mod assignment;
mod comment;
mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use access::{available_actions, is_authorized, is_visible};
pub use action::{TaskAction, TransitionParty};
pub use assignment::validate_assignment;
pub use comment::Comment;
pub use error::{
    AssignmentRejection, ParsePriorityError, ParseTaskActionError, ParseTaskStatusError,
    TaskDomainError,
};
pub use ids::TaskId;
pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDetails};
