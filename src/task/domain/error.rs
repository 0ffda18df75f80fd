//! Error types for task domain validation and parsing.

use super::{TaskAction, TaskId, TaskStatus};
use crate::actor::domain::{ActorId, Role};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The action is not permitted from the task's current status, or does
    /// not apply to this kind of task (private versus assigned).
    #[error("cannot {action} task {task_id} while it is {status}")]
    InvalidState {
        /// Task the action targeted.
        task_id: TaskId,
        /// Requested action.
        action: TaskAction,
        /// Status observed when the action was rejected.
        status: TaskStatus,
    },

    /// The actor is not the party allowed to perform the action.
    #[error("actor {actor_id} may not {action} task {task_id}")]
    UnauthorizedTransition {
        /// Task the action targeted.
        task_id: TaskId,
        /// Actor that attempted the action.
        actor_id: ActorId,
        /// Requested action.
        action: TaskAction,
    },

    /// The creation-time assignment violates the workflow policy.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(AssignmentRejection),

    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyComment,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The actor cannot see the task.
    #[error("task {task_id} is not visible to actor {actor_id}")]
    NotVisible {
        /// Task that was requested.
        task_id: TaskId,
        /// Actor that requested it.
        actor_id: ActorId,
    },
}

/// Reason a creation-time assignment was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentRejection {
    /// The creator's role may not assign tasks to others.
    #[error("{creator_id} ({role}) may not assign tasks")]
    CreatorCannotAssign {
        /// Creating actor.
        creator_id: ActorId,
        /// Creator's role.
        role: Role,
    },

    /// The proposed assignee's role is outside the assignable pool.
    #[error("{assignee_id} ({role}) cannot receive assigned tasks")]
    IneligibleAssignee {
        /// Proposed assignee.
        assignee_id: ActorId,
        /// Assignee's role.
        role: Role,
    },

    /// The proposed assignee is not a known actor.
    #[error("unknown assignee {0}")]
    UnknownAssignee(ActorId),

    /// The creator tried to assign the task to themselves.
    #[error("{0} cannot assign a task to themselves")]
    SelfAssignment(ActorId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task actions from caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task action: {0}")]
pub struct ParseTaskActionError(pub String);
