//! Status-changing actions and their transition table.
//!
//! | Action           | From                          | Task kind | Party    | To                 |
//! |------------------|-------------------------------|-----------|----------|--------------------|
//! | `finish_private` | `pending`, `awaiting_approval` | private   | creator  | `completed`        |
//! | `request_finish` | `pending`                     | assigned  | assignee | `awaiting_approval` |
//! | `approve`        | `awaiting_approval`           | assigned  | creator  | `completed`        |
//! | `reject`         | `awaiting_approval`           | assigned  | creator  | `pending`          |

use super::{ParseTaskActionError, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action requesting a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// The creator closes their own private task.
    FinishPrivate,
    /// The assignee reports assigned work as finished.
    RequestFinish,
    /// The creator accepts the reported work.
    Approve,
    /// The creator sends the work back to the assignee.
    Reject,
}

/// Party to a task that may perform an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionParty {
    /// The actor who created the task.
    Creator,
    /// The actor the task is assigned to.
    Assignee,
}

impl TaskAction {
    /// All actions, in table order.
    pub const ALL: [Self; 4] = [
        Self::FinishPrivate,
        Self::RequestFinish,
        Self::Approve,
        Self::Reject,
    ];

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinishPrivate => "finish_private",
            Self::RequestFinish => "request_finish",
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Statuses from which the action may be taken.
    #[must_use]
    pub const fn source_statuses(self) -> &'static [TaskStatus] {
        match self {
            Self::FinishPrivate => &[TaskStatus::Pending, TaskStatus::AwaitingApproval],
            Self::RequestFinish => &[TaskStatus::Pending],
            Self::Approve | Self::Reject => &[TaskStatus::AwaitingApproval],
        }
    }

    /// Status the task ends up in after the action.
    #[must_use]
    pub const fn target_status(self) -> TaskStatus {
        match self {
            Self::FinishPrivate | Self::Approve => TaskStatus::Completed,
            Self::RequestFinish => TaskStatus::AwaitingApproval,
            Self::Reject => TaskStatus::Pending,
        }
    }

    /// Returns `true` for actions on assigned tasks, `false` for actions on
    /// private tasks.
    #[must_use]
    pub const fn requires_assignee(self) -> bool {
        !matches!(self, Self::FinishPrivate)
    }

    /// The only party allowed to perform the action.
    #[must_use]
    pub const fn performer(self) -> TransitionParty {
        match self {
            Self::RequestFinish => TransitionParty::Assignee,
            Self::FinishPrivate | Self::Approve | Self::Reject => TransitionParty::Creator,
        }
    }

    /// Returns `true` when `status` is a listed source status.
    #[must_use]
    pub fn allowed_from(self, status: TaskStatus) -> bool {
        self.source_statuses().contains(&status)
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskAction {
    type Error = ParseTaskActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "finish_private" => Ok(Self::FinishPrivate),
            "request_finish" => Ok(Self::RequestFinish),
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseTaskActionError(value.to_owned())),
        }
    }
}
